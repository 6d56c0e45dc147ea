// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Delivering messages to logging sinks.
//!
//! A [`Dispatcher`] turns a [`Message`] into a structured record for its sink.
//! Two are provided:
//!
//! * [`LoggerDispatcher`] builds an [`Entry`] and writes it through a
//!   [`Logger`] and its [`Formatter`]
//! * [`TracingDispatcher`] emits a `tracing` event
//!
//! Dispatch is synchronous and best-effort: no retries, no buffering. It
//! never stops the process, whatever the severity. A caller that wants
//! CRITICAL messages to be fatal checks [`Severity::is_critical`] after
//! dispatching and exits on its own terms.
//!
//! ```
//! use opsmsg::catalog::Catalog;
//! use opsmsg::config::FormatterOptions;
//! use opsmsg::dispatcher::{formatters::BoxFormatter, Dispatcher, Logger, LoggerDispatcher};
//! use opsmsg::message::Context;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let logger = Logger::new(BoxFormatter::new(FormatterOptions::default()), std::io::sink());
//! let dispatcher = LoggerDispatcher::new(logger);
//!
//! let context = Context::from([("port".to_string(), "8080".to_string())]);
//! let msg = catalog.new_message("SRV001", context).unwrap();
//! dispatcher.dispatch(&msg).unwrap();
//! ```
//!
//! [`Severity::is_critical`]: crate::message::Severity::is_critical

pub mod entry;
pub mod formatters;
mod logger;

pub use entry::{Entry, Level};
pub use formatters::Formatter;
pub use logger::Logger;

use crate::errors::DispatchError;
use crate::message::{Message, Severity};
use crate::observability::messages::dispatch::{
    DispatchFailed, MessageDispatched, MessageFiltered, ReservedContextKeySkipped,
};
use crate::observability::messages::StructuredLog;
use entry::{is_reserved, FIELD_HELP, FIELD_ID, FIELD_SEVERITY};
use std::fmt::{self, Display};

/// Delivers messages to a sink.
pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, message: &Message) -> Result<(), DispatchError>;
}

/// Build the log entry for `message`.
///
/// Fields are `id` and `severity`, then the context in key order, then
/// `help` when present. Context keys that collide with reserved fields are
/// dropped.
pub fn message_entry(message: &Message) -> Entry {
    let mut entry = Entry::new(Level::from(message.severity), message.text.as_str())
        .at(message.timestamp)
        .with_field(FIELD_ID, &message.id)
        .with_field(FIELD_SEVERITY, message.severity);

    for (key, value) in &message.context {
        if is_reserved(key) {
            ReservedContextKeySkipped {
                id: &message.id,
                key,
            }
            .log();
            continue;
        }
        entry.set_field(key.as_str(), value);
    }

    if let Some(help) = message.help.as_deref().filter(|h| !h.is_empty()) {
        entry.set_field(FIELD_HELP, help);
    }
    entry
}

/// Writes messages through a [`Logger`].
#[derive(Debug)]
pub struct LoggerDispatcher {
    logger: Logger,
}

impl LoggerDispatcher {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl Dispatcher for LoggerDispatcher {
    fn dispatch(&self, message: &Message) -> Result<(), DispatchError> {
        let dispatched = MessageDispatched {
            id: &message.id,
            severity: message.severity.as_str(),
            sink: "logger",
        };
        let span = dispatched.span("dispatch");
        let _guard = span.enter();

        let entry = message_entry(message);
        match self.logger.log(&entry) {
            Ok(true) => {
                dispatched.log();
                Ok(())
            }
            Ok(false) => {
                MessageFiltered {
                    id: &message.id,
                    level: entry.level.as_str(),
                    min_level: self.logger.min_level().as_str(),
                }
                .log();
                Ok(())
            }
            Err(source) => {
                DispatchFailed {
                    id: &message.id,
                    error: &source,
                }
                .log();
                Err(DispatchError::Write {
                    id: message.id.clone(),
                    source,
                })
            }
        }
    }
}

/// Emits messages as `tracing` events.
///
/// `tracing` has no level above `ERROR`, so CRITICAL messages are emitted
/// at `ERROR` with `critical = true`. Context keys are dynamic, so the
/// context travels as a single `context` field rendered `key=value` in key
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDispatcher;

impl Dispatcher for TracingDispatcher {
    fn dispatch(&self, message: &Message) -> Result<(), DispatchError> {
        let context = ContextFields(message);
        let help = message.help.as_deref().unwrap_or("");
        let replies = message.replies.join(",");

        macro_rules! emit {
            ($level:ident, $critical:expr) => {
                tracing::$level!(
                    id = %message.id,
                    severity = %message.severity,
                    critical = $critical,
                    context = %context,
                    help = help,
                    replies = %replies,
                    "{}", message.text
                )
            };
        }

        match message.severity {
            Severity::Info => emit!(info, false),
            Severity::Warn => emit!(warn, false),
            Severity::Error => emit!(error, false),
            Severity::Critical => emit!(error, true),
        }

        MessageDispatched {
            id: &message.id,
            severity: message.severity.as_str(),
            sink: "tracing",
        }
        .log();
        Ok(())
    }
}

/// `key=value` pairs of a message's context, space separated.
struct ContextFields<'a>(&'a Message);

impl Display for ContextFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.context.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
