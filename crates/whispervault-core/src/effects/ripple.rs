//! Click ripple on card and call-to-action buttons.

use std::collections::HashMap;
use std::time::Duration;

use super::px;
use crate::controller::{Effect, EffectContext};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::{Page, Rect, TimerId};

/// Buttons that get ripples and navigation intents
pub const BUTTON_SELECTOR: &str = ".card-btn, .cta-btn";
pub const RIPPLE_CLASS: &str = "ripple";

/// Time a ripple stays in the tree, regardless of its animation
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

/// Size and button-relative offset of a ripple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    /// Diameter: the larger button dimension
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Ripple centered on a click at viewport coordinates.
    pub fn at(button: Rect, client_x: f64, client_y: f64) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            left: client_x - button.left - size / 2.0,
            top: client_y - button.top - size / 2.0,
        }
    }
}

/// Spawns a `span.ripple` inside the clicked button and removes it after
/// [`RIPPLE_LIFETIME`]. Overlapping ripples are independent.
pub struct RippleEffect<N> {
    live: HashMap<TimerId, N>,
}

impl<N> Default for RippleEffect<N> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
        }
    }
}

impl<P: Page> Effect<P> for RippleEffect<P::Node> {
    fn name(&self) -> &'static str {
        "ripple"
    }

    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()> {
        match event {
            PageEvent::ButtonActivated {
                button,
                client_x,
                client_y,
            } => {
                let rect = cx.page.bounding_rect(button);
                let geometry = RippleGeometry::at(rect, *client_x, *client_y);
                let ripple = cx.page.create_element("span")?;
                cx.page.set_style(&ripple, "width", &px(geometry.size))?;
                cx.page.set_style(&ripple, "height", &px(geometry.size))?;
                cx.page.set_style(&ripple, "left", &px(geometry.left))?;
                cx.page.set_style(&ripple, "top", &px(geometry.top))?;
                cx.page.add_class(&ripple, RIPPLE_CLASS)?;
                cx.page.append_child(button, &ripple)?;

                let timer = cx.schedule(RIPPLE_LIFETIME);
                self.live.insert(timer, ripple);
            }
            PageEvent::Timer(timer) => {
                if let Some(ripple) = self.live.remove(timer) {
                    cx.page.remove(&ripple);
                }
            }
            _ => {}
        }
        Ok(())
    }
}
