//! One captured log event.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A log event flattened for console output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Module path / target (e.g., "whispervault_core::controller")
    pub target: String,

    /// Human-readable message
    pub msg: String,

    /// Structured fields recorded alongside the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing spans, root first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogEntry {
    pub fn new(
        level: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            level: level.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level.to_uppercase(), self.target)?;
        if let Some(span) = &self.span {
            write!(f, " [{}]", span)?;
        }
        write!(f, ": {}", self.msg)?;
        if let Some(fields) = &self.fields {
            write!(f, " {}", fields)?;
        }
        Ok(())
    }
}
