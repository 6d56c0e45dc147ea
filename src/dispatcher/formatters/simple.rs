// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::style::Palette;
use super::{format_timestamp, message_id, severity_label, Formatter};
use crate::config::FormatterOptions;
use crate::dispatcher::entry::{Entry, FIELD_HELP};

const INDENT: &str = "    ";

/// Renders entries without borders or wrapping:
///
/// ```text
/// [2024-03-09T14:05:07Z] SEC001 (ERROR): Unauthorized access attempt from 192.168.1.100 to /admin
///     endpoint=/admin
///     ip=192.168.1.100
///     Help: Cause: A request was made without valid credentials.
/// ```
///
/// The `width` option is ignored.
#[derive(Debug, Clone, Default)]
pub struct SimpleFormatter {
    options: FormatterOptions,
}

impl SimpleFormatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }
}

impl Formatter for SimpleFormatter {
    fn format(&self, entry: &Entry) -> String {
        let p = Palette::new(!self.options.disable_colors);
        let timestamp = format_timestamp(&entry.time, self.options.get_timestamp_format());

        let mut out = format!(
            "{}[{timestamp}]{} {}{}{}{} {}({}){}: {}{}{}\n",
            p.timestamp,
            p.reset,
            p.bright,
            p.accent,
            message_id(entry),
            p.reset,
            p.severity(entry.level),
            severity_label(entry),
            p.reset,
            p.bright,
            entry.message,
            p.reset,
        );

        for (key, value) in entry.context_fields() {
            out.push_str(&format!("{INDENT}{}{key}={value}{}\n", p.dim, p.reset));
        }

        if let Some(help) = entry.field(FIELD_HELP).filter(|h| !h.trim().is_empty()) {
            out.push_str(&format!(
                "{INDENT}{}Help:{} {}{help}{}\n",
                p.help_label, p.reset, p.dim, p.reset
            ));
        }

        out
    }
}
