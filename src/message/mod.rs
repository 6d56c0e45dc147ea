// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Materialized operational messages.
//!
//! A [`Message`] is a catalog template filled in with runtime context and
//! stamped with its capture time. Everything it carries is copied out of the
//! catalog entry, so a message stays valid no matter what happens to the
//! catalog afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Runtime values substituted into a template.
///
/// Keys iterate in sorted order, which is the order context fields are
/// rendered and dispatched in.
pub type Context = BTreeMap<String, String>;

/// Operational importance of a message.
///
/// Catalog sources spell severities in upper case (`INFO`, `WARN`, `ERROR`,
/// `CRITICAL`); anything else is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Error,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Whether the message asks the caller to stop the process.
    ///
    /// Dispatching never acts on this; callers that want to terminate must
    /// check it and exit themselves.
    pub fn is_critical(&self) -> bool {
        matches!(self, Severity::Critical)
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A catalog template instantiated with context and a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub severity: Severity,
    pub text: String,
    pub context: Context,
    pub timestamp: DateTime<Utc>,
    pub help: Option<String>,
    pub replies: Vec<String>,
}

/// Result of filling a template: the rendered text plus the names of any
/// placeholders that had no context value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    pub unresolved: Vec<String>,
}

/// Replace `{name}` tokens in `template` with values from `context`.
///
/// Substitution is a single left-to-right pass, so a value that itself looks
/// like a placeholder is never expanded again. Tokens with no matching key
/// are left verbatim and reported in [`Substitution::unresolved`].
pub fn substitute(template: &str, context: &Context) -> Substitution {
    let mut text = String::with_capacity(template.len());
    let mut unresolved = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find(|c: char| c == '}' || c == '{') {
            Some(close) if after.as_bytes()[close] == b'}' && is_placeholder_name(&after[..close]) => {
                let name = &after[..close];
                match context.get(name) {
                    Some(value) => text.push_str(value),
                    None => {
                        text.push('{');
                        text.push_str(name);
                        text.push('}');
                        if !unresolved.iter().any(|n| n == name) {
                            unresolved.push(name.to_string());
                        }
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                text.push('{');
                rest = after;
            }
        }
    }
    text.push_str(rest);

    Substitution { text, unresolved }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> Context {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_single_placeholder() {
        let result = substitute("Server started on port {port}", &ctx(&[("port", "8080")]));
        assert_eq!(result.text, "Server started on port 8080");
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_substitute_without_placeholders_is_identity() {
        let template = "Application initialized successfully";
        let result = substitute(template, &ctx(&[("unused", "value")]));
        assert_eq!(result.text, template);
    }

    #[test]
    fn test_substitute_repeated_and_multiple() {
        let result = substitute(
            "{host}:{port} ({host})",
            &ctx(&[("host", "db.example.com"), ("port", "5432")]),
        );
        assert_eq!(result.text, "db.example.com:5432 (db.example.com)");
    }

    #[test]
    fn test_substitute_keeps_unresolved_verbatim() {
        let result = substitute("Rate limit {current}/{limit}", &ctx(&[("current", "950")]));
        assert_eq!(result.text, "Rate limit 950/{limit}");
        assert_eq!(result.unresolved, vec!["limit".to_string()]);
    }

    #[test]
    fn test_substitute_does_not_expand_values() {
        let result = substitute("{a} {b}", &ctx(&[("a", "{b}"), ("b", "x")]));
        assert_eq!(result.text, "{b} x");
    }

    #[test]
    fn test_substitute_ignores_non_placeholder_braces() {
        let template = "payload { \"key\": 1 } and {} and {unterminated";
        let result = substitute(template, &Context::new());
        assert_eq!(result.text, template);
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_substitute_nested_open_brace() {
        let result = substitute("{{port}}", &ctx(&[("port", "80")]));
        assert_eq!(result.text, "{80}");
    }

    #[test]
    fn test_severity_display_and_parse() {
        assert_eq!(Severity::Warn.to_string(), "WARN");
        assert_eq!(format!("{:<6}|", Severity::Info), "INFO  |");
        let parsed: Severity = serde_yaml::from_str("CRITICAL").unwrap();
        assert_eq!(parsed, Severity::Critical);
        assert!(parsed.is_critical());
        assert!(serde_yaml::from_str::<Severity>("info").is_err());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Error < Severity::Critical);
    }
}
