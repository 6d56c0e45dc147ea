// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Output formatters for log entries.
//!
//! * [`BoxFormatter`] - fixed-width bordered block with wrapping and colors
//! * [`SimpleFormatter`] - the same information without borders
//! * [`JsonFormatter`] - one JSON object per line
//!
//! Formatting is a pure function of the entry and the formatter options, and
//! it never fails: missing fields fall back to defaults.

mod boxed;
mod json;
pub mod layout;
mod simple;
mod style;

pub use boxed::BoxFormatter;
pub use json::JsonFormatter;
pub use simple::SimpleFormatter;

use crate::config::consts::{DEFAULT_TIMESTAMP_FORMAT, UNKNOWN_ID};
use crate::config::{FormatterOptions, FormatterStyle};
use crate::dispatcher::entry::{Entry, FIELD_ID, FIELD_SEVERITY};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Renders one entry to text, including the trailing newline.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &Entry) -> String;
}

/// Build the formatter selected by `options.style`.
pub fn build_formatter(options: &FormatterOptions) -> Box<dyn Formatter> {
    match options.get_style() {
        FormatterStyle::Box => Box::new(BoxFormatter::new(options.clone())),
        FormatterStyle::Simple => Box::new(SimpleFormatter::new(options.clone())),
        FormatterStyle::Json => Box::new(JsonFormatter),
    }
}

/// Format `time` with a strftime pattern, falling back to the default
/// pattern when `format` is invalid.
pub(crate) fn format_timestamp(time: &DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", time.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}

/// The entry's message id, or `UNKNOWN` when absent or blank.
pub(crate) fn message_id(entry: &Entry) -> &str {
    match entry.field(FIELD_ID) {
        Some(id) if !id.trim().is_empty() => id,
        _ => UNKNOWN_ID,
    }
}

/// The catalog severity label, or the upper-cased level name.
pub(crate) fn severity_label(entry: &Entry) -> String {
    match entry.field(FIELD_SEVERITY) {
        Some(severity) if !severity.trim().is_empty() => severity.to_string(),
        _ => entry.level.as_str().to_ascii_uppercase(),
    }
}
