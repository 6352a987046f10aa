//! Presentation controller: owns the page, the config and every effect.
//!
//! Each effect is a subscriber; the host turns browser events into
//! [`PageEvent`]s and hands them to [`VaultController::dispatch`]. Effects
//! run in registration order and never see each other's state.

use std::time::Duration;

use rand::rngs::StdRng;

use crate::config::VaultConfig;
use crate::effects::{
    CursorGlow, EasterEggs, FadeInObserver, NavIntentDialog, NavbarBackdrop, ParallaxHero,
    ParticleField, RippleEffect, SmoothScroll, StyleInjector,
};
use crate::error::VaultResult;
use crate::event::PageEvent;
use crate::page::{Page, TimerId};

/// A self-contained reaction to page events.
pub trait Effect<P: Page> {
    /// Name used in log fields
    fn name(&self) -> &'static str;

    /// React to one event. Events the effect does not care about are ignored.
    fn handle(
        &mut self,
        event: &PageEvent<P::Node>,
        cx: &mut EffectContext<'_, P>,
    ) -> VaultResult<()>;
}

/// Monotonic timer id allocator
#[derive(Debug, Default)]
struct TimerIds {
    next: u64,
}

impl TimerIds {
    fn allocate(&mut self) -> TimerId {
        self.next += 1;
        TimerId::new(self.next)
    }
}

/// What an effect may touch while handling an event.
pub struct EffectContext<'a, P: Page> {
    pub page: &'a mut P,
    pub config: &'a VaultConfig,
    timers: &'a mut TimerIds,
}

impl<'a, P: Page> EffectContext<'a, P> {
    /// Ask the host for a `PageEvent::Timer` after `delay`.
    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = self.timers.allocate();
        self.page.schedule(id, delay);
        id
    }

    /// Clear a timer returned by [`EffectContext::schedule`].
    pub fn cancel(&mut self, timer: TimerId) {
        self.page.cancel(timer);
    }
}

/// Owns the page and its subscribers for the lifetime of the document.
pub struct VaultController<P: Page> {
    page: P,
    config: VaultConfig,
    timers: TimerIds,
    effects: Vec<Box<dyn Effect<P>>>,
}

impl<P: Page + 'static> VaultController<P> {
    /// Controller with no effects registered.
    pub fn new(page: P, config: VaultConfig) -> Self {
        Self {
            page,
            config,
            timers: TimerIds::default(),
            effects: Vec::new(),
        }
    }

    /// Controller with the full landing page effect set.
    ///
    /// `rng` drives particle placement.
    pub fn with_default_effects(page: P, config: VaultConfig, rng: StdRng) -> Self {
        let mut controller = Self::new(page, config);
        controller.register(StyleInjector::default());
        controller.register(EasterEggs);
        controller.register(ParticleField::new(rng));
        controller.register(FadeInObserver::default());
        controller.register(SmoothScroll);
        controller.register(RippleEffect::default());
        controller.register(NavIntentDialog::default());
        controller.register(ParallaxHero);
        controller.register(NavbarBackdrop);
        controller.register(CursorGlow::default());
        controller
    }

    /// Append a subscriber. It runs after every previously registered one.
    pub fn register(&mut self, effect: impl Effect<P> + 'static) {
        tracing::debug!(effect = effect.name(), "registered effect");
        self.effects.push(Box::new(effect));
    }

    /// Deliver one event to every effect.
    ///
    /// A failing effect is logged and skipped; the rest still run.
    pub fn dispatch(&mut self, event: PageEvent<P::Node>) {
        let mut cx = EffectContext {
            page: &mut self.page,
            config: &self.config,
            timers: &mut self.timers,
        };
        for effect in self.effects.iter_mut() {
            if let Err(e) = effect.handle(&event, &mut cx) {
                tracing::warn!(
                    effect = effect.name(),
                    event = event.kind(),
                    error = %e,
                    "effect failed"
                );
            }
        }
    }

    pub fn effect_names(&self) -> Vec<&'static str> {
        self.effects.iter().map(|e| e.name()).collect()
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }
}
