// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::Formatter;
use crate::dispatcher::entry::Entry;

/// Renders each entry as one line of JSON: `time`, `level`, `msg`, then
/// every field in entry order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry) -> String {
        let mut line = match serde_json::to_string(entry) {
            Ok(json) => json,
            Err(e) => serde_json::json!({
                "level": "error",
                "msg": format!("failed to serialize log entry: {e}"),
            })
            .to_string(),
        };
        line.push('\n');
        line
    }
}
