//! Parallax drift and fade of the hero block while scrolling.

use super::px;
use crate::controller::{Effect, EffectContext};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::Page;

pub const HERO_SELECTOR: &str = ".hero-content";

const DRIFT_FACTOR: f64 = 0.5;
const FADE_PER_PIXEL: f64 = 0.002;

/// Hero presentation for one scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub translate_y: f64,
    /// Not clamped; negative values render fully transparent
    pub opacity: f64,
}

impl HeroFrame {
    pub fn at(offset: f64) -> Self {
        Self {
            translate_y: offset * DRIFT_FACTOR,
            opacity: 1.0 - offset * FADE_PER_PIXEL,
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({})", px(self.translate_y))
    }
}

pub struct ParallaxHero;

impl<P: Page> Effect<P> for ParallaxHero {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()> {
        let PageEvent::Scroll { offset } = event else {
            return Ok(());
        };
        let Some(hero) = cx.page.query(HERO_SELECTOR) else {
            return Ok(());
        };
        let frame = HeroFrame::at(*offset);
        cx.page.set_style(&hero, "transform", &frame.transform())?;
        cx.page.set_style(&hero, "opacity", &frame.opacity.to_string())?;
        Ok(())
    }
}
