/*
 *   Copyright (c) 2023-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Greedy word wrap measured in visible columns (see [`crate::visible_len`]).
//!
//! Rules, applied to each output line:
//! 1. Leading spaces are skipped.
//! 2. Words (runs without a space or newline) are added while
//!    `line_width + separator + word_width <= width`, where the separator is 1 unless
//!    the line is still empty. One separating space is consumed per word.
//! 3. A word that does not fit on an empty line is broken after exactly `width` visible
//!    columns. The rest continues on the next line.
//! 4. `\n` ends the line immediately and is consumed. Consecutive newlines produce
//!    empty lines.
//!
//! Escape runs have no width, so styled words wrap the same as plain ones, and a
//! forced break never splits an escape run or a code point.

use crate::{ESC, is_escape_terminator, utf8_char_len, visible_len};

/// Lines produced by [`word_wrap`]. The caller owns them.
pub type WrappedLines = Vec<String>;

/// Wrap `text` to `width` visible columns. Each call is independent.
///
/// A `width` of 0 is treated as 1 so that every line makes progress.
///
/// ```
/// use glyphbox_tuify::word_wrap;
///
/// assert_eq!(word_wrap("one two three", 7), vec!["one two", "three"]);
/// assert_eq!(word_wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
/// ```
#[must_use]
pub fn word_wrap(text: &str, width: usize) -> WrappedLines {
    let width = width.max(1);
    let bytes = text.as_bytes();
    let end = bytes.len();
    let mut lines = WrappedLines::new();
    let mut ptr = 0;

    while ptr < end {
        while ptr < end && bytes[ptr] == b' ' {
            ptr += 1;
        }
        if ptr >= end {
            break;
        }

        let line_start = ptr;
        let mut line_end = line_start;
        let mut line_width = 0;

        // Add whole words while they fit.
        while ptr < end && bytes[ptr] != b'\n' {
            let word_end = find_word_end(bytes, ptr);
            let word_width = visible_len(&bytes[ptr..word_end]);
            let separator = usize::from(line_end != line_start);
            if line_width + separator + word_width > width {
                break;
            }
            line_width += separator + word_width;
            line_end = word_end;
            ptr = word_end;
            if ptr < end && bytes[ptr] == b' ' {
                ptr += 1;
            }
        }

        // Nothing fit, so break the word.
        if line_end == line_start && ptr < end {
            ptr = forced_break_end(bytes, ptr, width);
            line_end = ptr;
        }

        lines.push(text[line_start..line_end].to_string());

        if ptr < end && bytes[ptr] == b'\n' {
            ptr += 1;
        }
    }

    lines
}

fn find_word_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&byte| byte == b' ' || byte == b'\n')
        .map_or(bytes.len(), |offset| start + offset)
}

/// Byte offset after `width` visible columns of the word starting at `start`. Escape
/// runs are taken whole and code points are never split.
fn forced_break_end(bytes: &[u8], start: usize, width: usize) -> usize {
    let end = bytes.len();
    let mut ptr = start;
    let mut columns = 0;

    while ptr < end && bytes[ptr] != b' ' && bytes[ptr] != b'\n' {
        if bytes[ptr] == ESC {
            ptr += 1;
            while ptr < end && !is_escape_terminator(bytes[ptr]) {
                ptr += 1;
            }
            ptr = (ptr + 1).min(end);
            continue;
        }
        if columns == width {
            break;
        }
        ptr += utf8_char_len(bytes[ptr]);
        columns += 1;
    }

    ptr
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("one two three", 7, &["one two", "three"]; "basic")]
    #[test_case("", 10, &[]; "empty")]
    #[test_case("     ", 10, &[]; "only spaces")]
    #[test_case("hello", 10, &["hello"]; "fits")]
    #[test_case("hello", 5, &["hello"]; "exact fit")]
    #[test_case("  lead", 10, &["lead"]; "leading spaces skipped")]
    #[test_case("a b c d", 3, &["a b", "c d"]; "separators counted")]
    #[test_case("abcdefghij", 4, &["abcd", "efgh", "ij"]; "forced break")]
    #[test_case("hi abcdefgh", 4, &["hi", "abcd", "efgh"]; "forced break on new line")]
    #[test_case("one\ntwo", 20, &["one", "two"]; "newline ends line")]
    #[test_case("one\n\ntwo", 20, &["one", "", "two"]; "blank line kept")]
    #[test_case("olá você", 4, &["olá", "você"]; "utf8 measured in columns")]
    #[test_case("ééééé", 2, &["éé", "éé", "é"]; "forced break keeps code points")]
    #[test_case("word", 0, &["w", "o", "r", "d"]; "zero width")]
    fn test_word_wrap(text: &str, width: usize, expected: &[&str]) {
        assert_eq!(word_wrap(text, width), expected);
    }

    #[test]
    fn styled_words_wrap_by_visible_width() {
        let text = "\x1b[31mred\x1b[0m fox";
        assert_eq!(word_wrap(text, 7), vec![text]);
        assert_eq!(word_wrap(text, 5), vec!["\x1b[31mred\x1b[0m", "fox"]);
    }

    #[test]
    fn forced_break_keeps_trailing_escape_run() {
        let text = "\x1b[1mabcd\x1b[0mef";
        assert_eq!(word_wrap(text, 4), vec!["\x1b[1mabcd\x1b[0m", "ef"]);
    }

    #[test]
    fn width_bound_holds() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                    eiusmod tempor incididunt ut labore et dolore magna aliqua.";
        for width in 1..30 {
            for line in word_wrap(text, width) {
                assert!(visible_len(&line) <= width, "{line:?} at {width}");
            }
        }
    }

    #[test]
    fn words_survive_wrapping_in_order() {
        let text = "the quick brown fox\njumps over  the lazy dog";
        let expected: Vec<&str> = text.split_whitespace().collect();
        for width in 5..25 {
            let joined = word_wrap(text, width).join(" ");
            let actual: Vec<&str> = joined.split_whitespace().collect();
            assert_eq!(actual, expected, "width {width}");
        }
    }

    #[test]
    fn each_call_is_independent() {
        let first = word_wrap("alpha beta gamma", 6);
        let second = word_wrap("alpha beta gamma", 6);
        assert_eq!(first, second);
        assert_eq!(first, vec!["alpha", "beta", "gamma"]);
    }
}
