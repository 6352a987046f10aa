//! Whisper Vault Core Library
//!
//! Cosmetic interactivity for the Whisper Vault landing page, written
//! against a small document abstraction so every effect can be exercised
//! without a browser.
//!
//! ## Overview
//!
//! The host (the `whispervault` wasm crate) turns browser events into
//! [`PageEvent`]s and feeds them to a [`VaultController`]. The controller
//! owns the page handle, the configuration and a list of [`Effect`]
//! subscribers: particle field, card fade-in, smooth anchor scrolling,
//! button ripples, the navigation-intent dialog, hero parallax, navbar
//! backdrop, cursor glow, and the console easter eggs.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rand::{rngs::StdRng, SeedableRng};
//! use whispervault_core::{PageEvent, VaultConfig, VaultController};
//!
//! let rng = StdRng::seed_from_u64(7);
//! let mut controller = VaultController::with_default_effects(page, VaultConfig::default(), rng);
//! controller.dispatch(PageEvent::Init);
//! controller.dispatch(PageEvent::Load);
//! controller.dispatch(PageEvent::Scroll { offset: 120.0 });
//! ```

pub mod config;
pub mod controller;
pub mod effects;
pub mod error;
pub mod event;
pub mod logging;
pub mod page;
pub mod theme;

// Re-exports
pub use config::{NavigationConfig, VaultConfig};
pub use controller::{Effect, EffectContext, VaultController};
pub use error::{VaultError, VaultResult};
pub use event::PageEvent;
pub use page::{Page, Rect, TimerId};
