//! Decorative particle field populated once the page has loaded.

use rand::Rng;

use crate::controller::{Effect, EffectContext};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::Page;

pub const PARTICLE_CONTAINER_ID: &str = "particles";
pub const PARTICLE_CLASS: &str = "particle";

/// Randomized presentation of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStyle {
    /// Horizontal position, percent in [0, 100)
    pub left_percent: f64,
    /// Animation start delay, seconds in [0, 15)
    pub delay_secs: f64,
    /// Animation duration, seconds in [10, 20)
    pub duration_secs: f64,
}

impl ParticleStyle {
    /// Draw all three attributes independently and uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_percent: rng.random_range(0.0..100.0),
            delay_secs: rng.random_range(0.0..15.0),
            duration_secs: rng.random_range(10.0..20.0),
        }
    }
}

/// Fills `#particles` with `particle_count` randomized particles on `Load`.
pub struct ParticleField<R> {
    rng: R,
    populated: bool,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            populated: false,
        }
    }
}

impl<P: Page, R: Rng + 'static> Effect<P> for ParticleField<R> {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()> {
        if !matches!(event, PageEvent::Load) || self.populated {
            return Ok(());
        }
        let Some(container) = cx.page.element_by_id(PARTICLE_CONTAINER_ID) else {
            tracing::debug!("no particle container, skipping particle field");
            return Ok(());
        };
        self.populated = true;

        let count = cx.config.particle_count;
        for _ in 0..count {
            let style = ParticleStyle::random(&mut self.rng);
            let particle = cx.page.create_element("div")?;
            cx.page.add_class(&particle, PARTICLE_CLASS)?;
            cx.page
                .set_style(&particle, "left", &format!("{}%", style.left_percent))?;
            cx.page
                .set_style(&particle, "animation-delay", &format!("{}s", style.delay_secs))?;
            cx.page.set_style(
                &particle,
                "animation-duration",
                &format!("{}s", style.duration_secs),
            )?;
            cx.page.append_child(&container, &particle)?;
        }
        tracing::debug!(count, "particle field populated");
        Ok(())
    }
}
