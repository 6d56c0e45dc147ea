// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dispatch events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Message handed to a sink.
///
/// # Log Level
/// `trace!` - Emitted once per dispatch
pub struct MessageDispatched<'a> {
    pub id: &'a str,
    pub severity: &'a str,
    pub sink: &'a str,
}

impl Display for MessageDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatched message '{}' ({}) to {} sink",
            self.id, self.severity, self.sink
        )
    }
}

impl StructuredLog for MessageDispatched<'_> {
    fn log(&self) {
        tracing::trace!(
            id = self.id,
            severity = self.severity,
            sink = self.sink,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "message_dispatched",
            span_name = name,
            id = self.id,
            severity = self.severity,
            sink = self.sink,
        )
    }
}

/// Message dropped because its level is below the sink's minimum.
///
/// # Log Level
/// `trace!` - Expected filtering
pub struct MessageFiltered<'a> {
    pub id: &'a str,
    pub level: &'a str,
    pub min_level: &'a str,
}

impl Display for MessageFiltered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Message '{}' at {} filtered by minimum level {}",
            self.id, self.level, self.min_level
        )
    }
}

impl StructuredLog for MessageFiltered<'_> {
    fn log(&self) {
        tracing::trace!(
            id = self.id,
            level = self.level,
            min_level = self.min_level,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "message_filtered",
            span_name = name,
            id = self.id,
            level = self.level,
            min_level = self.min_level,
        )
    }
}

/// A context key collides with a reserved entry field and was not forwarded.
///
/// # Log Level
/// `warn!` - The context value is lost from the rendered output
///
/// # Example
/// ```
/// use opsmsg::observability::messages::dispatch::ReservedContextKeySkipped;
///
/// let msg = ReservedContextKeySkipped {
///     id: "SRV001",
///     key: "severity",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct ReservedContextKeySkipped<'a> {
    pub id: &'a str,
    pub key: &'a str,
}

impl Display for ReservedContextKeySkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Context key '{}' of message '{}' is reserved and was not forwarded",
            self.key, self.id
        )
    }
}

impl StructuredLog for ReservedContextKeySkipped<'_> {
    fn log(&self) {
        tracing::warn!(id = self.id, key = self.key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "reserved_context_key_skipped",
            span_name = name,
            id = self.id,
            key = self.key,
        )
    }
}

/// The sink rejected a write.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use opsmsg::observability::messages::dispatch::DispatchFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
/// let msg = DispatchFailed {
///     id: "SRV002",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DispatchFailed<'a> {
    pub id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for DispatchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Dispatch of message '{}' failed: {}", self.id, self.error)
    }
}

impl StructuredLog for DispatchFailed<'_> {
    fn log(&self) {
        tracing::error!(id = self.id, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "dispatch_failed",
            span_name = name,
            id = self.id,
            error = %self.error,
        )
    }
}
