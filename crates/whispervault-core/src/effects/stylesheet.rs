//! Injects the runtime stylesheet once per document.

use crate::controller::{Effect, EffectContext};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::Page;
use crate::theme::{DYNAMIC_STYLES, DYNAMIC_STYLES_ID};

#[derive(Debug, Default)]
pub struct StyleInjector {
    injected: bool,
}

impl<P: Page> Effect<P> for StyleInjector {
    fn name(&self) -> &'static str {
        "stylesheet"
    }

    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()> {
        if !matches!(event, PageEvent::Init) || self.injected {
            return Ok(());
        }
        // Another controller on the same document may have injected it already.
        if cx.page.element_by_id(DYNAMIC_STYLES_ID).is_some() {
            self.injected = true;
            return Ok(());
        }
        let Some(parent) = cx.page.head().or_else(|| cx.page.body()) else {
            return Ok(());
        };
        let style = cx.page.create_element("style")?;
        cx.page.set_attribute(&style, "id", DYNAMIC_STYLES_ID)?;
        cx.page.set_text(&style, DYNAMIC_STYLES);
        cx.page.append_child(&parent, &style)?;
        self.injected = true;
        Ok(())
    }
}
