//! Structured logging for the page effects.
//!
//! Effects log through `tracing`. In the browser there is no stdout, so the
//! host installs a [`ConsoleLayer`] that turns every event into a
//! [`LogEntry`] and hands it to a [`LogSink`] (the developer console).
//!
//! ```ignore
//! use whispervault_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new(BrowserConsole)
//!     .with_filter("whispervault_core=debug")
//!     .init()?;
//! ```

pub mod entry;
pub mod layer;

pub use entry::LogEntry;
pub use layer::{ConsoleLayer, LogSink, LoggingBuilder};
