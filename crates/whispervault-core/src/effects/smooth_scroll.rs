//! Smooth scrolling for in-page anchors.

use crate::controller::{Effect, EffectContext};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::Page;

/// Selector for anchors the host intercepts
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Element id referenced by an in-page `href`, if any.
///
/// `"#"` and hrefs without a leading `#` reference nothing.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scrolls the anchor's target to the top of the viewport.
pub struct SmoothScroll;

impl<P: Page> Effect<P> for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth-scroll"
    }

    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()> {
        let PageEvent::AnchorActivated { href } = event else {
            return Ok(());
        };
        match fragment_target(href).and_then(|id| cx.page.element_by_id(id)) {
            Some(target) => cx.page.scroll_into_view(&target),
            None => tracing::debug!(%href, "anchor target not found"),
        }
        Ok(())
    }
}
