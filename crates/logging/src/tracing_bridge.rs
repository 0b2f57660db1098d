//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the tracelog channels.
//!
//! [`TracelogLayer`] is a tracing-subscriber layer that writes each event's
//! message to the channel matching the event level. Whether anything appears
//! is decided by the channel binding, so a debug event is silent unless the
//! context is at `DEVEL`, and info/warning events are silent at `ERROR`.
//!
//! | tracing level  | channel |
//! |----------------|---------|
//! | ERROR          | error   |
//! | WARN           | warning |
//! | INFO           | info    |
//! | DEBUG, TRACE   | debug   |
//!
//! Events with exactly the `tracelog` target (the facility's own diagnostics)
//! are not forwarded; other targets, including `tracelog::*` modules, are.
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::update_level("DEVEL")?;
//! logging::init_tracing();
//!
//! tracing::info!("service started");
//! tracing::debug!(port = 8080, "listening");
//! ```

use std::fmt::Write as _;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use super::channel::Channel;
use super::context::Tracelog;
use super::global::global;

const SELF_TARGET: &str = "tracelog";

/// A tracing layer forwarding events into a [`Tracelog`]'s channels.
#[derive(Clone, Copy, Debug)]
pub struct TracelogLayer {
    context: &'static Tracelog,
}

impl TracelogLayer {
    /// Creates a layer writing into `context`.
    #[must_use]
    pub const fn new(context: &'static Tracelog) -> Self {
        Self { context }
    }

    /// Creates a layer writing into the process-wide context.
    #[must_use]
    pub fn global() -> Self {
        Self::new(global())
    }

    /// Map a tracing level to a channel.
    const fn level_to_channel(level: &Level) -> Channel {
        match *level {
            Level::ERROR => Channel::Error,
            Level::WARN => Channel::Warning,
            Level::INFO => Channel::Info,
            Level::DEBUG | Level::TRACE => Channel::Debug,
        }
    }
}

impl<S> Layer<S> for TracelogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target() == SELF_TARGET {
            return;
        }

        let logger = self
            .context
            .logger(Self::level_to_channel(metadata.level()));
        if !logger.is_enabled() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.finish() {
            logger.log(format_args!("{message}"));
        }
    }
}

/// Collects the `message` field, followed by any other fields as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> Option<String> {
        match (self.message, self.fields.is_empty()) {
            (Some(message), true) => Some(message),
            (Some(message), false) => Some(format!("{message}{}", self.fields)),
            (None, false) => Some(self.fields.trim_start().to_owned()),
            (None, true) => None,
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Installs [`TracelogLayer::global`] as the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(TracelogLayer::global())
        .init();
}
