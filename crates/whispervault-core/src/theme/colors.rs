//! Color constants for the gothic gold-on-black palette.

// === GOLD (Accents, titles) ===
pub const GOLD: &str = "#d4af37";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#e8e8e8";
pub const TEXT_MUTED: &str = "#a8a8a8";

// === NAVBAR ===
pub const NAVBAR_RESTING: &str = "rgba(10, 10, 10, 0.8)";
pub const NAVBAR_SCROLLED: &str = "rgba(10, 10, 10, 0.95)";
pub const NAVBAR_SHADOW: &str = "0 5px 20px rgba(0, 0, 0, 0.5)";

// === CURSOR GLOW ===
pub const GLOW_GRADIENT: &str =
    "radial-gradient(circle, rgba(212, 175, 55, 0.05) 0%, transparent 70%)";
