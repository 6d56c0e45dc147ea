// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text measurement and word wrapping for fixed-width output.

use unicode_width::UnicodeWidthStr;

/// Remove ANSI escape sequences (CSI `ESC [ ... final` and bare `ESC x`).
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                // Parameters and intermediates run until a final byte in @..~
                for c in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&c) {
                        break;
                    }
                }
            }
            Some(_) | None => {}
        }
    }
    out
}

/// Terminal columns `text` occupies once escape sequences are removed.
pub fn visible_width(text: &str) -> usize {
    if text.contains('\x1b') {
        strip_ansi(text).width()
    } else {
        text.width()
    }
}

/// Greedy word wrap.
///
/// Words are split on whitespace and added to the current line while
/// `current + 1 + word <= width`. A word wider than `width` gets a line of its
/// own and is never broken. Empty input yields a single empty line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    wrap_hanging(text, width, width)
}

/// Greedy word wrap where the first line and the continuation lines have
/// different widths.
pub fn wrap_hanging(text: &str, first_width: usize, rest_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let limit = if lines.is_empty() { first_width } else { rest_width };

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= limit {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_is_single_trimmed_line() {
        assert_eq!(wrap("  hello world  ", 40), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_empty_text_is_single_empty_line() {
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("   \n\t ", 10), vec![""]);
    }

    #[test]
    fn test_wrap_is_greedy() {
        let lines = wrap("this is a somewhat long message", 16);
        assert_eq!(lines, vec!["this is a", "somewhat long", "message"]);
        assert!(lines.iter().all(|l| l.len() <= 16));
    }

    #[test]
    fn test_wrap_exact_fit() {
        // "aaaa bbbb" is exactly 9 columns
        assert_eq!(wrap("aaaa bbbb cc", 9), vec!["aaaa bbbb", "cc"]);
    }

    #[test]
    fn test_wrap_long_word_stands_alone() {
        let lines = wrap("a supercalifragilistic b", 8);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_hanging_widths() {
        let lines = wrap_hanging("one two three four five", 13, 9);
        assert_eq!(lines, vec!["one two three", "four five"]);

        let lines = wrap_hanging("one two three four five", 7, 4);
        assert_eq!(lines, vec!["one two", "three", "four", "five"]);
    }

    #[test]
    fn test_strip_ansi() {
        let colored = "\x1b[38;5;208m│\x1b[0m \x1b[1mhello\x1b[0m";
        assert_eq!(strip_ansi(colored), "│ hello");
        assert_eq!(visible_width(colored), 7);
    }

    #[test]
    fn test_visible_width_counts_columns() {
        assert_eq!(visible_width("╭──╮"), 4);
        assert_eq!(visible_width("plain"), 5);
    }
}
