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

//! Single line text input. Input is append only: printable characters are added at
//! the end, Backspace removes the last code point, Enter submits. Navigation keys are
//! ignored.

use std::io::Write;

use crate::{BACKSPACE_ERASE, ConsoleResult, KeyPress, KeyPressReader, OutputBuffer, Pos,
            PromptStyle};

/// Text typed so far. Always valid UTF-8, `visible_len` counts code points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptBuffer {
    text: String,
    visible_len: usize,
}

impl PromptBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.text }

    #[must_use]
    pub fn byte_len(&self) -> usize { self.text.len() }

    #[must_use]
    pub fn visible_len(&self) -> usize { self.visible_len }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Append `ch`. Returns the bytes that were added, for echoing.
    pub fn push(&mut self, ch: char) -> &str {
        let start = self.text.len();
        self.text.push(ch);
        self.visible_len += 1;
        &self.text[start..]
    }

    /// Remove the last code point, however many bytes it takes. Returns false if there
    /// was nothing to remove.
    pub fn backspace(&mut self) -> bool {
        match self.text.pop() {
            Some(_) => {
                self.visible_len -= 1;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn into_string(self) -> String { self.text }
}

/// Read a line at `pos`. Returns the text when Enter is pressed, after erasing it from
/// the screen.
///
/// - Printable characters are accepted while fewer than `style.max_len` are typed
///   (0 means 255), and echoed right away.
/// - Backspace erases the last character with `\b \b`.
/// - Control characters, Esc and navigation keys are ignored. DEL (`\x7f`) counts as a
///   control character here, although its code is above space.
///
/// # Errors
///
/// Returns a [`crate::ConsoleError`] if flushing to the console or reading a key fails.
pub fn prompt<W: Write>(
    buf: &mut OutputBuffer<W>,
    keys: &mut impl KeyPressReader,
    pos: Pos,
    style: &PromptStyle,
) -> ConsoleResult<String> {
    let max_len = style.effective_max_len();
    let mut input = PromptBuffer::new();

    buf.move_cursor_to(pos);
    buf.append_text(&style.input_color);
    buf.flush()?;

    loop {
        match keys.read_key_press()? {
            KeyPress::Enter => {
                buf.move_cursor_to(pos);
                buf.append_repeated(" ", input.visible_len());
                buf.move_cursor_to(pos);
                buf.reset_style();
                buf.flush()?;
                tracing::debug!(message = "prompt submitted", bytes = input.byte_len());
                return Ok(input.into_string());
            }
            KeyPress::Backspace => {
                if input.backspace() {
                    buf.append_text(BACKSPACE_ERASE);
                    buf.flush()?;
                }
            }
            KeyPress::Char(ch) if ch >= ' ' && ch != '\x7f' => {
                if input.visible_len() < max_len {
                    let echo = input.push(ch);
                    buf.append_text(echo);
                    buf.flush()?;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ConsoleError, TestStringWriter, TestVecKeyPressReader, col, row};

    #[test]
    fn backspace_removes_a_whole_code_point() {
        let mut input = PromptBuffer::new();
        input.push('a');
        input.push('€');
        assert_eq!(input.byte_len(), 4);
        assert_eq!(input.visible_len(), 2);

        assert!(input.backspace());
        assert_eq!(input.byte_len(), 1);
        assert_eq!(input.visible_len(), 1);
        assert_eq!(input.as_str(), "a");

        assert!(input.backspace());
        assert!(!input.backspace());
        assert_eq!(input.visible_len(), 0);
    }

    #[test]
    fn push_returns_the_encoded_bytes() {
        let mut input = PromptBuffer::new();
        assert_eq!(input.push('ç').as_bytes(), [0xC3, 0xA7]);
        assert_eq!(input.push('x'), "x");
    }

    #[test]
    fn typed_text_is_echoed_and_returned() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new(
            TestVecKeyPressReader::typing("olá")
                .into_iter()
                .chain([KeyPress::Enter]),
        );

        let result =
            prompt(&mut buf, &mut keys, col(2) + row(5), &PromptStyle::new(8, "")).unwrap();

        assert_eq!(result, "olá");
        assert_eq!(
            buf.output_device().get_buffer(),
            "\x1b[5;2Holá\x1b[5;2H   \x1b[5;2H\x1b[0m"
        );
    }

    #[test]
    fn input_color_is_applied_first() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Enter]);

        let result = prompt(
            &mut buf,
            &mut keys,
            col(1) + row(1),
            &PromptStyle::new(0, "\x1b[38;5;51m"),
        )
        .unwrap();

        assert_eq!(result, "");
        assert_eq!(
            buf.output_device().get_buffer(),
            "\x1b[1;1H\x1b[38;5;51m\x1b[1;1H\x1b[1;1H\x1b[0m"
        );
    }

    #[test]
    fn backspace_erases_on_screen() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([
            KeyPress::Char('a'),
            KeyPress::Char('€'),
            KeyPress::Backspace,
            KeyPress::Char('b'),
            KeyPress::Enter,
        ]);

        let result =
            prompt(&mut buf, &mut keys, col(1) + row(1), &PromptStyle::default()).unwrap();

        assert_eq!(result, "ab");
        assert!(
            buf.output_device()
                .get_buffer()
                .starts_with("\x1b[1;1Ha€\x08 \x08b")
        );
    }

    #[test]
    fn backspace_on_empty_input_does_nothing() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Backspace, KeyPress::Enter]);

        let result =
            prompt(&mut buf, &mut keys, col(1) + row(1), &PromptStyle::default()).unwrap();

        assert_eq!(result, "");
        assert!(!buf.output_device().get_buffer().contains('\x08'));
    }

    #[test]
    fn max_len_counts_visible_characters() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new(
            TestVecKeyPressReader::typing("ééé")
                .into_iter()
                .chain([KeyPress::Enter]),
        );

        let result =
            prompt(&mut buf, &mut keys, col(1) + row(1), &PromptStyle::new(2, "")).unwrap();

        assert_eq!(result, "éé");
    }

    #[test]
    fn non_printable_and_navigation_keys_are_ignored() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([
            KeyPress::Up,
            KeyPress::Left,
            KeyPress::Extended(71),
            KeyPress::Esc,
            KeyPress::Char('\x03'),
            KeyPress::Char('\t'),
            KeyPress::Char('\x7f'),
            KeyPress::Char('z'),
            KeyPress::Enter,
        ]);

        let result =
            prompt(&mut buf, &mut keys, col(1) + row(1), &PromptStyle::default()).unwrap();

        assert_eq!(result, "z");
        assert!(!buf.output_device().get_buffer().contains('\x7f'));
    }

    #[test]
    fn missing_enter_is_an_error() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Char('a')]);
        let result = prompt(&mut buf, &mut keys, col(1) + row(1), &PromptStyle::default());
        assert!(matches!(result, Err(ConsoleError::InputExhausted)));
    }
}
