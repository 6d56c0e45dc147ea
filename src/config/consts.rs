// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::dispatcher::Level;

/// Default box width in terminal columns
pub const DEFAULT_WIDTH: usize = 80;
/// Narrowest box whose wrapped body and help block stay readable
pub const MIN_WIDTH: usize = 20;
/// Widest box the formatter will draw
pub const MAX_WIDTH: usize = 512;

/// Default timestamp layout, RFC 3339 to the second in UTC
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Shown in the header when an entry carries no usable id
pub const UNKNOWN_ID: &str = "UNKNOWN";

/// Entries below this level are dropped by the logger
pub const DEFAULT_MIN_LEVEL: Level = Level::Trace;
