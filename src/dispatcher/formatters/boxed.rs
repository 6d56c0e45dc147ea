// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::layout::{visible_width, wrap, wrap_hanging};
use super::style::{
    Palette, BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, TOP_LEFT, TOP_RIGHT, VERTICAL,
};
use super::{format_timestamp, message_id, severity_label, Formatter};
use crate::config::FormatterOptions;
use crate::dispatcher::entry::{Entry, FIELD_HELP};

/// Columns taken by `│ ` and ` │` around every content line.
const FRAME_WIDTH: usize = 4;
/// Indent of a context line, relative to the body.
const CONTEXT_INDENT: &str = "  ";
/// Indent of a wrapped context continuation line.
const CONTEXT_CONTINUATION_INDENT: &str = "    ";
const HELP_LABEL: &str = "Help:";
/// Continuation lines of the help text line up with its first word.
const HELP_CONTINUATION_INDENT: &str = "      ";

/// Renders entries as a bordered block of a fixed width.
///
/// ```text
/// ╭──────────────────────────────────────────╮
/// │ [2024-03-09T14:05:07Z] SRV002 (ERROR)    │
/// │ Failed to bind to port 8080: address     │
/// │ already in use                           │
/// │                                          │
/// │   error=address already in use           │
/// │   port=8080                              │
/// │                                          │
/// │ Help: Cause: Another process is          │
/// │       listening on the port. Recovery:   │
/// │       Stop the other process.            │
/// ╰──────────────────────────────────────────╯
/// ```
///
/// Every content line is padded to exactly `width` visible columns. Content
/// that cannot fit (a single very long word) overflows the right border
/// instead of being cut.
#[derive(Debug, Clone, Default)]
pub struct BoxFormatter {
    options: FormatterOptions,
}

impl BoxFormatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }
}

impl Formatter for BoxFormatter {
    fn format(&self, entry: &Entry) -> String {
        let width = self.options.get_width();
        let body_width = width - FRAME_WIDTH;
        let palette = Palette::new(!self.options.disable_colors);
        let p = &palette;

        let timestamp = format_timestamp(&entry.time, self.options.get_timestamp_format());
        let id = message_id(entry);
        let severity = severity_label(entry);

        let mut out = String::new();
        push_border(&mut out, p, TOP_LEFT, TOP_RIGHT, width);

        let header = format!(
            "{ts_color}[{timestamp}]{reset} {bright}{accent}{id}{reset} {sev_color}({severity}){reset}",
            ts_color = p.timestamp,
            reset = p.reset,
            bright = p.bright,
            accent = p.accent,
            sev_color = p.severity(entry.level),
        );
        push_line(&mut out, p, &header, body_width);

        for line in wrap(&entry.message, body_width) {
            push_line(&mut out, p, &format!("{}{}{}", p.bright, line, p.reset), body_width);
        }

        let mut context = entry.context_fields().peekable();
        if context.peek().is_some() {
            push_line(&mut out, p, "", body_width);
            for (key, value) in context {
                let item = format!("{key}={value}");
                let first_width = body_width.saturating_sub(CONTEXT_INDENT.len());
                let rest_width = body_width.saturating_sub(CONTEXT_CONTINUATION_INDENT.len());
                for (i, line) in wrap_hanging(&item, first_width, rest_width).iter().enumerate() {
                    let indent = if i == 0 {
                        CONTEXT_INDENT
                    } else {
                        CONTEXT_CONTINUATION_INDENT
                    };
                    let content = format!("{indent}{}{line}{}", p.dim, p.reset);
                    push_line(&mut out, p, &content, body_width);
                }
            }
        }

        if let Some(help) = entry.field(FIELD_HELP).filter(|h| !h.trim().is_empty()) {
            push_line(&mut out, p, "", body_width);
            let help_width = body_width.saturating_sub(HELP_CONTINUATION_INDENT.len());
            for (i, line) in wrap(help, help_width).iter().enumerate() {
                let content = if i == 0 {
                    format!(
                        "{}{HELP_LABEL}{} {}{line}{}",
                        p.help_label, p.reset, p.dim, p.reset
                    )
                } else {
                    format!("{HELP_CONTINUATION_INDENT}{}{line}{}", p.dim, p.reset)
                };
                push_line(&mut out, p, &content, body_width);
            }
        }

        push_border(&mut out, p, BOTTOM_LEFT, BOTTOM_RIGHT, width);
        out
    }
}

fn push_border(out: &mut String, p: &Palette, left: &str, right: &str, width: usize) {
    out.push_str(p.border);
    out.push_str(left);
    out.push_str(&HORIZONTAL.repeat(width - 2));
    out.push_str(right);
    out.push_str(p.reset);
    out.push('\n');
}

/// `│ content<padding> │`, padded so the line is `body_width + 4` columns.
fn push_line(out: &mut String, p: &Palette, content: &str, body_width: usize) {
    let padding = body_width.saturating_sub(visible_width(content));

    out.push_str(p.border);
    out.push_str(VERTICAL);
    out.push_str(p.reset);
    out.push(' ');
    out.push_str(content);
    out.push_str(&" ".repeat(padding));
    out.push(' ');
    out.push_str(p.border);
    out.push_str(VERTICAL);
    out.push_str(p.reset);
    out.push('\n');
}
