//! One-shot fade-in of feature cards as they scroll into view.

use crate::controller::{Effect, EffectContext};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::Page;

pub const FEATURE_CARD_SELECTOR: &str = ".feature-card";

/// Fraction of the card that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Float rounding in the reported ratio only.
const RATIO_TOLERANCE: f64 = 1e-6;

/// Hides every feature card on `Load` and reveals each one the first time
/// it is at least 10% visible. Revealed cards stay revealed.
pub struct FadeInObserver<N> {
    revealed: Vec<N>,
}

impl<N> Default for FadeInObserver<N> {
    fn default() -> Self {
        Self {
            revealed: Vec::new(),
        }
    }
}

fn crosses_threshold(ratio: f64, is_intersecting: bool) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= REVEAL_THRESHOLD
}

impl<P: Page> Effect<P> for FadeInObserver<P::Node> {
    fn name(&self) -> &'static str {
        "fade-in"
    }

    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()> {
        match event {
            PageEvent::Load => {
                let cards = cx.page.query_all(FEATURE_CARD_SELECTOR);
                if cards.is_empty() {
                    return Ok(());
                }
                for card in &cards {
                    cx.page.set_style(card, "opacity", "0")?;
                    cx.page.set_style(card, "transform", "translateY(30px)")?;
                    cx.page.set_style(
                        card,
                        "transition",
                        "opacity 0.8s ease, transform 0.8s ease",
                    )?;
                }
                cx.page.observe_intersections(&cards, REVEAL_THRESHOLD)?;
                tracing::debug!(cards = cards.len(), "watching feature cards");
            }
            PageEvent::Intersection {
                target,
                ratio,
                is_intersecting,
            } => {
                if !crosses_threshold(*ratio, *is_intersecting) || self.revealed.contains(target) {
                    return Ok(());
                }
                cx.page.set_style(target, "opacity", "1")?;
                cx.page.set_style(target, "transform", "translateY(0)")?;
                self.revealed.push(target.clone());
            }
            _ => {}
        }
        Ok(())
    }
}
