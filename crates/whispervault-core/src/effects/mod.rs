//! Page effects, one subscriber per file.
//!
//! | Effect | Reacts to |
//! |---|---|
//! | [`StyleInjector`] | `Init` |
//! | [`EasterEggs`] | `Init`, `KeyDown` |
//! | [`ParticleField`] | `Load` |
//! | [`FadeInObserver`] | `Load`, `Intersection` |
//! | [`SmoothScroll`] | `AnchorActivated` |
//! | [`RippleEffect`] | `ButtonActivated`, `Timer` |
//! | [`NavIntentDialog`] | `ButtonActivated`, `Dismiss`, `Timer` |
//! | [`ParallaxHero`] | `Scroll` |
//! | [`NavbarBackdrop`] | `Scroll` |
//! | [`CursorGlow`] | `PointerMove`, `Timer` |

pub mod cursor_glow;
pub mod easter_eggs;
pub mod fade_in;
pub mod nav_intent;
pub mod navbar;
pub mod parallax;
pub mod particles;
pub mod ripple;
pub mod smooth_scroll;
pub mod stylesheet;

pub use cursor_glow::CursorGlow;
pub use easter_eggs::EasterEggs;
pub use fade_in::FadeInObserver;
pub use nav_intent::{NavIntentDialog, NavigationMap};
pub use navbar::{NavbarBackdrop, NavbarState};
pub use parallax::{HeroFrame, ParallaxHero};
pub use particles::{ParticleField, ParticleStyle};
pub use ripple::{RippleEffect, RippleGeometry};
pub use smooth_scroll::SmoothScroll;
pub use stylesheet::StyleInjector;

/// CSS pixel length
pub(crate) fn px(value: f64) -> String {
    format!("{}px", value)
}
