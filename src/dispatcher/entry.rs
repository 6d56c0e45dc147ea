// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Field-based log entries handed from dispatchers to a [`Logger`](super::Logger).

use crate::message::Severity;
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display};

/// Field carrying the message id.
pub const FIELD_ID: &str = "id";
/// Field carrying the catalog severity label.
pub const FIELD_SEVERITY: &str = "severity";
/// Field name reserved for timestamps; never rendered as context.
pub const FIELD_TIMESTAMP: &str = "timestamp";
/// Field carrying the help text.
pub const FIELD_HELP: &str = "help";

/// Fields with a dedicated place in the rendered output. Everything else is
/// treated as context.
pub const RESERVED_FIELDS: [&str; 4] = [FIELD_ID, FIELD_SEVERITY, FIELD_TIMESTAMP, FIELD_HELP];

pub fn is_reserved(key: &str) -> bool {
    RESERVED_FIELDS.contains(&key)
}

/// Sink log level, least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CRITICAL maps to its own level; nothing about it terminates the process.
impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Level::Info,
            Severity::Warn => Level::Warn,
            Severity::Error => Level::Error,
            Severity::Critical => Level::Critical,
        }
    }
}

/// One structured log record.
///
/// Fields keep the order they were first set in; setting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    fields: Vec<(String, String)>,
}

impl Entry {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn at(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.set_field(key, value);
        self
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: impl Display) {
        let key = key.into();
        let value = value.to_string();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fields that are not reserved, in insertion order.
    pub fn context_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields().filter(|(k, _)| !is_reserved(k))
    }
}

/// JSON shape: `time`, `level`, `msg`, then every field in order. Fields
/// that collide with those three keys are written as `fields.<key>`.
impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 3))?;
        map.serialize_entry("time", &self.time.to_rfc3339())?;
        map.serialize_entry("level", self.level.as_str())?;
        map.serialize_entry("msg", &self.message)?;
        for (key, value) in &self.fields {
            if matches!(key.as_str(), "time" | "level" | "msg") {
                map.serialize_entry(&format!("fields.{key}"), value)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_insertion_order() {
        let entry = Entry::new(Level::Info, "hello")
            .with_field("zeta", "1")
            .with_field("alpha", "2")
            .with_field("mid", 3);

        let keys: Vec<&str> = entry.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(entry.field("mid"), Some("3"));
    }

    #[test]
    fn test_set_field_replaces_in_place() {
        let mut entry = Entry::new(Level::Info, "hello")
            .with_field("a", "1")
            .with_field("b", "2");
        entry.set_field("a", "changed");

        let fields: Vec<(&str, &str)> = entry.fields().collect();
        assert_eq!(fields, vec![("a", "changed"), ("b", "2")]);
    }

    #[test]
    fn test_context_fields_skip_reserved() {
        let entry = Entry::new(Level::Warn, "x")
            .with_field(FIELD_ID, "SRV001")
            .with_field("port", "8080")
            .with_field(FIELD_HELP, "help text")
            .with_field(FIELD_SEVERITY, "WARN");

        let context: Vec<(&str, &str)> = entry.context_fields().collect();
        assert_eq!(context, vec![("port", "8080")]);
    }

    #[test]
    fn test_level_from_severity() {
        assert_eq!(Level::from(Severity::Info), Level::Info);
        assert_eq!(Level::from(Severity::Warn), Level::Warn);
        assert_eq!(Level::from(Severity::Error), Level::Error);
        assert_eq!(Level::from(Severity::Critical), Level::Critical);
        assert!(Level::Critical > Level::Error);
        assert!(Level::Trace < Level::Debug);
    }

    #[test]
    fn test_level_parses_lowercase() {
        let level: Level = serde_yaml::from_str("warn").unwrap();
        assert_eq!(level, Level::Warn);
    }
}
