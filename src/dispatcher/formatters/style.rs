// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! ANSI colors and box-drawing glyphs.

use crate::dispatcher::Level;

const RESET: &str = "\x1b[0m";
const ORANGE: &str = "\x1b[38;5;208m";
const YELLOW: &str = "\x1b[38;5;226m";
const RED: &str = "\x1b[38;5;196m";
const CYAN: &str = "\x1b[38;5;51m";
const GRAY: &str = "\x1b[38;5;240m";
const BRIGHT: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

pub const TOP_LEFT: &str = "╭";
pub const TOP_RIGHT: &str = "╮";
pub const BOTTOM_LEFT: &str = "╰";
pub const BOTTOM_RIGHT: &str = "╯";
pub const HORIZONTAL: &str = "─";
pub const VERTICAL: &str = "│";

/// Escape sequences for each rendered element. With colors disabled every
/// sequence is empty.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub border: &'static str,
    pub timestamp: &'static str,
    pub accent: &'static str,
    pub bright: &'static str,
    pub dim: &'static str,
    pub help_label: &'static str,
    pub reset: &'static str,
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        let pick = |code: &'static str| if enabled { code } else { "" };
        Self {
            border: pick(ORANGE),
            timestamp: pick(GRAY),
            accent: pick(ORANGE),
            bright: pick(BRIGHT),
            dim: pick(DIM),
            help_label: pick(YELLOW),
            reset: pick(RESET),
            enabled,
        }
    }

    pub fn severity(&self, level: Level) -> &'static str {
        if !self.enabled {
            return "";
        }
        match level {
            Level::Critical | Level::Error => RED,
            Level::Warn => YELLOW,
            Level::Info => CYAN,
            _ => ORANGE,
        }
    }
}
