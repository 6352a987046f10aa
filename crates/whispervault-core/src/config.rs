//! Runtime configuration for the page effects.
//!
//! The host page may embed a JSON document (camelCase keys) to override the
//! defaults. Every field is optional.
//!
//! ```json
//! { "particleCount": 30, "logFilter": "debug", "navigation": { "enabled": true } }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::VaultResult;

/// Number of particles spawned on load
pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// Delay between announcing a destination and following it
pub const DEFAULT_NAVIGATION_DELAY_MS: u64 = 1000;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VaultConfig {
    /// Particles created in the `#particles` container
    pub particle_count: usize,
    /// `tracing_subscriber::EnvFilter` directive (e.g. "whispervault_core=debug")
    pub log_filter: String,
    /// Real navigation after the intent dialog
    pub navigation: NavigationConfig,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            log_filter: "info".to_string(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl VaultConfig {
    /// Parse a configuration document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> VaultResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Gate for following a button's mapped destination.
///
/// Disabled by default: the dialog announces the page and nothing else
/// happens until the destination pages exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationConfig {
    pub enabled: bool,
    pub delay_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: DEFAULT_NAVIGATION_DELAY_MS,
        }
    }
}

impl NavigationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
