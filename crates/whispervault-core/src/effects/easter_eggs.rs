//! Console greeting and the `V` shortcut.

use crate::controller::{Effect, EffectContext};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::Page;
use crate::theme::colors;

pub const VAULT_SHORTCUT_MESSAGE: &str = "Quick access: Vault mode activated! 🖤";

fn greeting() -> [(&'static str, String); 3] {
    [
        (
            "🖤 Whisper Vault 🖤",
            format!("font-size: 20px; color: {}; font-weight: bold;", colors::GOLD),
        ),
        (
            "Your secrets are safe here...",
            format!("font-size: 14px; color: {};", colors::TEXT_PRIMARY),
        ),
        (
            "Built with love and shadows 🌙",
            format!("font-size: 12px; color: {};", colors::TEXT_MUTED),
        ),
    ]
}

pub struct EasterEggs;

impl<P: Page> Effect<P> for EasterEggs {
    fn name(&self) -> &'static str {
        "easter-eggs"
    }

    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()> {
        match event {
            PageEvent::Init => {
                for (message, css) in greeting() {
                    cx.page.console(message, Some(css.as_str()));
                }
            }
            PageEvent::KeyDown { key } if key.eq_ignore_ascii_case("v") => {
                cx.page.console(VAULT_SHORTCUT_MESSAGE, None);
            }
            _ => {}
        }
        Ok(())
    }
}
