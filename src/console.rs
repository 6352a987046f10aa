//! Log sink writing to the browser's developer console.

use whispervault_core::logging::{LogEntry, LogSink};

/// Routes each entry to the console method matching its level.
pub struct BrowserConsole;

impl LogSink for BrowserConsole {
    fn write(&self, entry: &LogEntry) {
        let line = entry.to_string();
        match entry.level.as_str() {
            "error" => gloo::console::error!(line),
            "warn" => gloo::console::warn!(line),
            "info" => gloo::console::info!(line),
            _ => gloo::console::debug!(line),
        }
    }
}
