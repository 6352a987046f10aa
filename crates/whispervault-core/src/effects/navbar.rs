//! Navbar backdrop that darkens once the page is scrolled.

use crate::controller::{Effect, EffectContext};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::Page;
use crate::theme::colors;

pub const NAVBAR_SELECTOR: &str = ".navbar";

/// Offset (px) above which the navbar switches to its scrolled look
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    Resting,
    Scrolled,
}

impl NavbarState {
    /// No hysteresis: the state follows the offset on every event.
    pub fn for_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            NavbarState::Scrolled
        } else {
            NavbarState::Resting
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavbarState::Resting => colors::NAVBAR_RESTING,
            NavbarState::Scrolled => colors::NAVBAR_SCROLLED,
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            NavbarState::Resting => "none",
            NavbarState::Scrolled => colors::NAVBAR_SHADOW,
        }
    }
}

pub struct NavbarBackdrop;

impl<P: Page> Effect<P> for NavbarBackdrop {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()> {
        let PageEvent::Scroll { offset } = event else {
            return Ok(());
        };
        let Some(navbar) = cx.page.query(NAVBAR_SELECTOR) else {
            return Ok(());
        };
        let state = NavbarState::for_offset(*offset);
        cx.page.set_style(&navbar, "background", state.background())?;
        cx.page.set_style(&navbar, "box-shadow", state.box_shadow())?;
        Ok(())
    }
}
