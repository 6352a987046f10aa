//! Custom tracing Layer that forwards events to a console sink.

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::LogEntry;
use crate::error::{VaultError, VaultResult};

/// Destination for captured log entries.
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, entry: &LogEntry);
}

/// A tracing Layer that hands every event to a [`LogSink`].
pub struct ConsoleLayer<W> {
    sink: Arc<W>,
}

impl<W: LogSink> ConsoleLayer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: LogSink,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = metadata.level().as_str().to_lowercase();

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let mut entry = LogEntry::new(
            level,
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }
        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<String> = scope
                .from_root()
                .map(|span| span.name().to_string())
                .collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        self.sink.write(&entry);
    }
}

/// Visitor that extracts fields from tracing events.
struct FieldVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: serde_json::Map::new(),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::String(value.to_string()),
        );
    }
}

/// Builder for the global subscriber: env filter plus a console layer.
pub struct LoggingBuilder<W> {
    sink: W,
    env_filter: String,
}

impl<W: LogSink> LoggingBuilder<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            env_filter: "info".to_string(),
        }
    }

    /// Set the filter directive (e.g., "info,whispervault_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = filter.into();
        self
    }

    /// Install as the global default subscriber.
    ///
    /// Fails when the filter does not parse or a subscriber is already set.
    pub fn init(self) -> VaultResult<()> {
        let filter = EnvFilter::try_new(&self.env_filter).map_err(|e| {
            VaultError::Logging(format!("invalid filter {:?}: {}", self.env_filter, e))
        })?;
        tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLayer::new(self.sink))
            .try_init()
            .map_err(|e| VaultError::Logging(e.to_string()))
    }
}
