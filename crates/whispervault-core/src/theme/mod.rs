//! Whisper Vault visual theme: palette and the stylesheet injected at startup.

pub mod colors;
pub mod styles;

pub use styles::{DYNAMIC_STYLES, DYNAMIC_STYLES_ID};
