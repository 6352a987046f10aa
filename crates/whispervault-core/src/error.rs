//! Error types for Whisper Vault

use thiserror::Error;

/// Main error type for page effect operations.
///
/// Missing optional markup is never an error: effects skip silently when
/// their target element is absent. Only failed document calls end up here.
#[derive(Error, Debug)]
pub enum VaultError {
    /// A document call (create, append, style, observe) was rejected
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using VaultError
pub type VaultResult<T> = Result<T, VaultError>;
