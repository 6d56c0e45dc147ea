// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::entry::{Entry, Level};
use super::formatters::Formatter;
use crate::config::consts::DEFAULT_MIN_LEVEL;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// A formatting sink: entries at or above the minimum level are formatted
/// and written to the underlying writer.
///
/// Writes are serialized through a mutex so the bytes of one entry are never
/// interleaved with another's.
pub struct Logger {
    formatter: Box<dyn Formatter>,
    out: Mutex<Box<dyn Write + Send>>,
    min_level: Level,
}

impl Logger {
    pub fn new<F, W>(formatter: F, out: W) -> Self
    where
        F: Formatter + 'static,
        W: Write + Send + 'static,
    {
        Self::from_boxed(Box::new(formatter), Box::new(out))
    }

    pub fn from_boxed(formatter: Box<dyn Formatter>, out: Box<dyn Write + Send>) -> Self {
        Self {
            formatter,
            out: Mutex::new(out),
            min_level: DEFAULT_MIN_LEVEL,
        }
    }

    /// A logger writing to standard output.
    pub fn stdout(formatter: Box<dyn Formatter>) -> Self {
        Self::from_boxed(formatter, Box::new(io::stdout()))
    }

    pub fn with_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Format and write `entry`.
    ///
    /// Returns `Ok(false)` when the entry is below the minimum level and
    /// nothing was written.
    pub fn log(&self, entry: &Entry) -> io::Result<bool> {
        if !self.enabled(entry.level) {
            return Ok(false);
        }

        let rendered = self.formatter.format(entry);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(true)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}
