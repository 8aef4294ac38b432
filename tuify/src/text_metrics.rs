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

//! Visible length: the number of terminal columns a string occupies.
//!
//! The count walks bytes. An `ESC` byte starts an escape run that ends at the next ASCII
//! letter (usually the `m` of an SGR sequence), and nothing inside it is counted.
//! Outside escape runs every byte that is not a UTF-8 continuation byte (`0b10xx_xxxx`)
//! counts as one column.
//!
//! Wide glyphs (eg: CJK, most emoji) count as one column, and combining marks or zero
//! width joiners count as one column each. Callers laying out such text get an
//! approximate width.

pub const ESC: u8 = 0x1b;

#[must_use]
pub fn is_utf8_continuation(byte: u8) -> bool { byte & 0xC0 == 0x80 }

/// Length in bytes of the UTF-8 sequence that starts with `lead_byte`. A stray
/// continuation byte or an invalid lead byte counts as a sequence of 1.
#[must_use]
pub fn utf8_char_len(lead_byte: u8) -> usize {
    match lead_byte {
        0xF0..=0xF7 => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}

/// Terminates an escape run.
#[must_use]
pub fn is_escape_terminator(byte: u8) -> bool { byte.is_ascii_alphabetic() }

/// On screen columns taken by `text`, see the module docs.
///
/// ```
/// use glyphbox_tuify::visible_len;
///
/// assert_eq!(visible_len("hello"), 5);
/// assert_eq!(visible_len("\x1b[38;5;231mhi\x1b[0m"), 2);
/// assert_eq!(visible_len("olá"), 3);
/// ```
#[must_use]
pub fn visible_len(text: impl AsRef<[u8]>) -> usize {
    let mut in_escape = false;
    let mut count = 0;
    for &byte in text.as_ref() {
        if in_escape {
            if is_escape_terminator(byte) {
                in_escape = false;
            }
        } else if byte == ESC {
            in_escape = true;
        } else if !is_utf8_continuation(byte) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("", 0)]
    #[test_case("abc", 3)]
    #[test_case("one two", 7)]
    #[test_case("ç", 1; "two byte")]
    #[test_case("€", 1; "three byte")]
    #[test_case("🦀", 1; "four byte")]
    #[test_case("╔══╗", 4)]
    #[test_case("\x1b[0m", 0)]
    #[test_case("\x1b[38;5;231mX\x1b[0m", 1)]
    #[test_case("\x1b[?25l>", 1; "private mode sequence")]
    #[test_case("\x1b[12;40Habc", 3; "cursor position")]
    #[test_case("\x1b[1", 0; "unterminated escape")]
    fn test_visible_len(text: &str, expected: usize) {
        assert_eq!(visible_len(text), expected);
    }

    #[test]
    fn ascii_printable_equals_byte_length() {
        let text: String = (b' '..=b'~').map(char::from).collect();
        assert_eq!(visible_len(&text), text.len());
    }

    #[test]
    fn escape_insertion_never_changes_length() {
        let text = "Olá, mundo colorido";
        let escape = "\x1b[48;5;231m";
        let expected = visible_len(text);
        for (index, _) in text.char_indices() {
            let mut with_escape = text.to_string();
            with_escape.insert_str(index, escape);
            assert_eq!(visible_len(&with_escape), expected, "insert at {index}");
        }
    }

    #[test]
    fn two_byte_code_points_count_once() {
        for count in 0..10 {
            let text = "é".repeat(count);
            assert_eq!(text.len(), 2 * count);
            assert_eq!(visible_len(&text), count);
        }
    }

    #[test_case(b'a', 1)]
    #[test_case(0xC3, 2)]
    #[test_case(0xE2, 3)]
    #[test_case(0xF0, 4)]
    #[test_case(0x80, 1; "continuation")]
    fn test_utf8_char_len(lead_byte: u8, expected: usize) {
        assert_eq!(utf8_char_len(lead_byte), expected);
    }

    #[test]
    fn raw_bytes_are_accepted() {
        assert_eq!(visible_len([0xE2_u8, 0x96, 0xBC]), 1);
    }
}
