//! Soft glow left behind by the pointer.
//!
//! Pointer moves are debounced: each move cancels the pending spawn and
//! schedules a new one 50 ms out, so a marker appears where a burst of
//! movement ends. A marker holds for 100 ms, fades for 300 ms, then goes.

use std::collections::HashMap;
use std::time::Duration;

use super::px;
use crate::controller::{Effect, EffectContext};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::{Page, TimerId};
use crate::theme::colors;

pub const DEBOUNCE: Duration = Duration::from_millis(50);
pub const HOLD: Duration = Duration::from_millis(100);
pub const FADE: Duration = Duration::from_millis(300);

/// Fixed inline styles of a glow marker (position added per marker)
const MARKER_STYLES: [(&str, &str); 8] = [
    ("position", "fixed"),
    ("width", "200px"),
    ("height", "200px"),
    ("background", colors::GLOW_GRADIENT),
    ("pointer-events", "none"),
    ("transform", "translate(-50%, -50%)"),
    ("z-index", "0"),
    ("transition", "opacity 0.3s ease"),
];

#[derive(Debug)]
enum GlowStep<N> {
    Spawn { x: f64, y: f64 },
    Fade(N),
    Remove(N),
}

pub struct CursorGlow<N> {
    debounce: Option<TimerId>,
    steps: HashMap<TimerId, GlowStep<N>>,
}

impl<N> Default for CursorGlow<N> {
    fn default() -> Self {
        Self {
            debounce: None,
            steps: HashMap::new(),
        }
    }
}

impl<P: Page> Effect<P> for CursorGlow<P::Node> {
    fn name(&self) -> &'static str {
        "cursor-glow"
    }

    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()> {
        match event {
            PageEvent::PointerMove { client_x, client_y } => {
                if let Some(previous) = self.debounce.take() {
                    self.steps.remove(&previous);
                    cx.cancel(previous);
                }
                let timer = cx.schedule(DEBOUNCE);
                self.steps.insert(
                    timer,
                    GlowStep::Spawn {
                        x: *client_x,
                        y: *client_y,
                    },
                );
                self.debounce = Some(timer);
            }
            PageEvent::Timer(timer) => match self.steps.remove(timer) {
                Some(GlowStep::Spawn { x, y }) => {
                    if self.debounce == Some(*timer) {
                        self.debounce = None;
                    }
                    let Some(body) = cx.page.body() else {
                        return Ok(());
                    };
                    let marker = cx.page.create_element("div")?;
                    for (property, value) in MARKER_STYLES {
                        cx.page.set_style(&marker, property, value)?;
                    }
                    cx.page.set_style(&marker, "left", &px(x))?;
                    cx.page.set_style(&marker, "top", &px(y))?;
                    cx.page.append_child(&body, &marker)?;
                    let next = cx.schedule(HOLD);
                    self.steps.insert(next, GlowStep::Fade(marker));
                }
                Some(GlowStep::Fade(marker)) => {
                    // Schedule removal first so a rejected style call cannot leak the node.
                    let next = cx.schedule(FADE);
                    self.steps.insert(next, GlowStep::Remove(marker.clone()));
                    cx.page.set_style(&marker, "opacity", "0")?;
                }
                Some(GlowStep::Remove(marker)) => cx.page.remove(&marker),
                None => {}
            },
            _ => {}
        }
        Ok(())
    }
}
