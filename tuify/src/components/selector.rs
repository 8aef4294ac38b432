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

//! Single choice selectors. Options are laid out in a column
//! ([`SelectorLayout::Vertical`], navigated with Up and Down) or in a row
//! ([`SelectorLayout::Horizontal`], navigated with Left and Right). Moving past either
//! end wraps around. Enter confirms, Esc cancels.
//!
//! ```text
//! vertical:          horizontal:
//! > first            > first    second    third
//!   second
//!   third
//! ```

use std::{io::Write, thread, time::Duration};

use glyphbox_ansi_color::SgrCode;
use smallvec::SmallVec;

use crate::{ConsoleResult, HORIZONTAL_OPTION_GAP, KeyPress, KeyPressReader, OutputBuffer,
            Pos, SELECTED_MARKER, SelectorStyle, UNSELECTED_MARKER, visible_len};

/// Visible widths of the options, measured once per selector run.
type OptionWidths = SmallVec<[usize; 16]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorState {
    pub current_index: usize,
    /// Set whenever `current_index` changes, cleared after the next paint.
    pub redraw: bool,
}

impl Default for SelectorState {
    fn default() -> Self {
        Self {
            current_index: 0,
            redraw: true,
        }
    }
}

impl SelectorState {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Move to the next option, the last one wraps to the first.
    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % count;
        self.redraw = true;
    }

    /// Move to the previous option, the first one wraps to the last.
    pub fn select_prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.current_index = (self.current_index + count - 1) % count;
        self.redraw = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Confirmed(usize),
    Cancelled,
}

impl Selection {
    /// The confirmed index, or -1 when cancelled.
    #[must_use]
    pub fn as_index_or_sentinel(&self) -> isize {
        match *self {
            Selection::Confirmed(index) => isize::try_from(index).unwrap_or(isize::MAX),
            Selection::Cancelled => -1,
        }
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match *self {
            Selection::Confirmed(index) => Some(index),
            Selection::Cancelled => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorLayout {
    Vertical,
    Horizontal,
}

/// What the loop does after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectorLoopResult {
    Continue,
    ContinueAndRerender,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionLook {
    Normal,
    Selected,
    Confirmed,
}

/// Vertical selector starting at index 0. See [`run_selector`].
///
/// # Errors
///
/// Returns a [`crate::ConsoleError`] if flushing to the console or reading a key fails.
pub fn select_vertical<W: Write>(
    buf: &mut OutputBuffer<W>,
    keys: &mut impl KeyPressReader,
    pos: Pos,
    options: &[impl AsRef<str>],
    style: &SelectorStyle,
) -> ConsoleResult<Selection> {
    let mut state = SelectorState::new();
    run_selector(buf, keys, &mut state, SelectorLayout::Vertical, pos, options, style)
}

/// Horizontal selector starting at index 0. See [`run_selector`].
///
/// # Errors
///
/// Returns a [`crate::ConsoleError`] if flushing to the console or reading a key fails.
pub fn select_horizontal<W: Write>(
    buf: &mut OutputBuffer<W>,
    keys: &mut impl KeyPressReader,
    pos: Pos,
    options: &[impl AsRef<str>],
    style: &SelectorStyle,
) -> ConsoleResult<Selection> {
    let mut state = SelectorState::new();
    run_selector(buf, keys, &mut state, SelectorLayout::Horizontal, pos, options, style)
}

/// Run a selector until the user confirms or cancels.
///
/// The cursor is hidden while the selector runs and shown again before returning, on
/// success and on error. When the user confirms, the chosen option is repainted in the
/// "correct" colors and kept on screen for `style.confirm_pause`.
///
/// With no options there is nothing to choose, [`Selection::Cancelled`] is returned
/// without drawing anything.
///
/// # Errors
///
/// Returns a [`crate::ConsoleError`] if flushing to the console or reading a key fails.
pub fn run_selector<W: Write>(
    buf: &mut OutputBuffer<W>,
    keys: &mut impl KeyPressReader,
    state: &mut SelectorState,
    layout: SelectorLayout,
    pos: Pos,
    options: &[impl AsRef<str>],
    style: &SelectorStyle,
) -> ConsoleResult<Selection> {
    let count = options.len();
    if count == 0 {
        return Ok(Selection::Cancelled);
    }
    state.current_index %= count;
    state.redraw = true;

    let option_widths: OptionWidths =
        options.iter().map(|it| visible_len(it.as_ref())).collect();

    buf.hide_cursor();
    let result = selector_loop(buf, keys, state, layout, pos, options, &option_widths, style);

    if let Err(error) = &result {
        buf.show_cursor();
        if let Err(flush_error) = buf.flush() {
            tracing::warn!(
                message = "could not restore cursor after selector error",
                ?error,
                ?flush_error
            );
        }
    }

    result
}

#[allow(clippy::too_many_arguments)]
fn selector_loop<W: Write>(
    buf: &mut OutputBuffer<W>,
    keys: &mut impl KeyPressReader,
    state: &mut SelectorState,
    layout: SelectorLayout,
    pos: Pos,
    options: &[impl AsRef<str>],
    option_widths: &[usize],
    style: &SelectorStyle,
) -> ConsoleResult<Selection> {
    let count = options.len();
    let max_width = option_widths.iter().copied().max().unwrap_or(0);

    loop {
        if state.redraw {
            render_options(buf, state, layout, pos, options, option_widths, max_width, style);
            buf.flush()?;
            state.redraw = false;
        }

        let key_press = keys.read_key_press()?;
        match on_keypress(state, layout, count, key_press) {
            SelectorLoopResult::Continue => {}
            SelectorLoopResult::ContinueAndRerender => {
                tracing::trace!(message = "selector moved", index = state.current_index);
            }
            SelectorLoopResult::Confirm => {
                let index = state.current_index;
                let option_pos = match layout {
                    SelectorLayout::Vertical => pos.down(index),
                    SelectorLayout::Horizontal => {
                        pos.right(horizontal_offset(option_widths, index))
                    }
                };
                buf.move_cursor_to(option_pos);
                render_option(
                    buf,
                    options[index].as_ref(),
                    padding(layout, option_widths[index], max_width),
                    OptionLook::Confirmed,
                    style,
                );
                buf.flush()?;

                pause(style.confirm_pause);

                buf.show_cursor();
                buf.flush()?;
                tracing::debug!(message = "selector confirmed", index);
                return Ok(Selection::Confirmed(index));
            }
            SelectorLoopResult::Cancel => {
                buf.show_cursor();
                buf.flush()?;
                tracing::debug!(message = "selector cancelled");
                return Ok(Selection::Cancelled);
            }
        }
    }
}

fn on_keypress(
    state: &mut SelectorState,
    layout: SelectorLayout,
    count: usize,
    key_press: KeyPress,
) -> SelectorLoopResult {
    match (layout, key_press) {
        (SelectorLayout::Vertical, KeyPress::Up)
        | (SelectorLayout::Horizontal, KeyPress::Left) => {
            state.select_prev(count);
            SelectorLoopResult::ContinueAndRerender
        }
        (SelectorLayout::Vertical, KeyPress::Down)
        | (SelectorLayout::Horizontal, KeyPress::Right) => {
            state.select_next(count);
            SelectorLoopResult::ContinueAndRerender
        }
        (_, KeyPress::Enter) => SelectorLoopResult::Confirm,
        (_, KeyPress::Esc) => SelectorLoopResult::Cancel,
        _ => SelectorLoopResult::Continue,
    }
}

#[allow(clippy::too_many_arguments)]
fn render_options<W: Write>(
    buf: &mut OutputBuffer<W>,
    state: &SelectorState,
    layout: SelectorLayout,
    pos: Pos,
    options: &[impl AsRef<str>],
    option_widths: &[usize],
    max_width: usize,
    style: &SelectorStyle,
) {
    if layout == SelectorLayout::Horizontal {
        buf.move_cursor_to(pos);
    }

    for (index, option) in options.iter().enumerate() {
        if layout == SelectorLayout::Vertical {
            buf.move_cursor_to(pos.down(index));
        }
        let look = if index == state.current_index {
            OptionLook::Selected
        } else {
            OptionLook::Normal
        };
        render_option(
            buf,
            option.as_ref(),
            padding(layout, option_widths[index], max_width),
            look,
            style,
        );
    }
}

/// One option: colors, marker, text, trailing spaces, reset.
fn render_option<W: Write>(
    buf: &mut OutputBuffer<W>,
    option: &str,
    padding: usize,
    look: OptionLook,
    style: &SelectorStyle,
) {
    match look {
        OptionLook::Normal => {
            buf.append_text(&style.bg_normal);
            buf.append_text(&style.fg_normal);
            buf.append_text(UNSELECTED_MARKER);
        }
        OptionLook::Selected => {
            buf.append_text(&style.bg_select);
            buf.append_text(&style.fg_select);
            buf.append_display(SgrCode::Bold);
            buf.append_text(SELECTED_MARKER);
        }
        OptionLook::Confirmed => {
            buf.append_text(&style.bg_correct);
            buf.append_text(&style.fg_correct);
            buf.append_display(SgrCode::Bold);
            buf.append_text(SELECTED_MARKER);
        }
    }
    buf.append_text(option);
    buf.append_repeated(" ", padding);
    buf.reset_style();
}

/// Vertical rows are padded to a common width (widest option plus two columns), so
/// every highlighted row is a bar of the same length. Horizontal options get a fixed
/// gap.
fn padding(layout: SelectorLayout, option_width: usize, max_width: usize) -> usize {
    match layout {
        SelectorLayout::Vertical => (max_width + 2).saturating_sub(option_width),
        SelectorLayout::Horizontal => visible_len(HORIZONTAL_OPTION_GAP),
    }
}

/// Columns from the start of the row to the marker of option `index`.
fn horizontal_offset(option_widths: &[usize], index: usize) -> usize {
    let item_chrome = visible_len(SELECTED_MARKER) + visible_len(HORIZONTAL_OPTION_GAP);
    option_widths
        .iter()
        .take(index)
        .map(|width| item_chrome + width)
        .sum()
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{ConsoleError, LegacyCodeKeyPressReader, TestStringWriter,
                TestVecKeyPressReader, col, row};

    fn no_pause(style: SelectorStyle) -> SelectorStyle {
        style.with_confirm_pause(Duration::ZERO)
    }

    #[test_case(0, 3, 1)]
    #[test_case(2, 3, 0)]
    #[test_case(0, 1, 0)]
    fn select_next_wraps(start: usize, count: usize, expected: usize) {
        let mut state = SelectorState {
            current_index: start,
            redraw: false,
        };
        state.select_next(count);
        assert!(state.redraw);
        assert_eq!(state.current_index, expected);
    }

    #[test_case(0, 3, 2)]
    #[test_case(2, 3, 1)]
    #[test_case(0, 1, 0)]
    fn select_prev_wraps(start: usize, count: usize, expected: usize) {
        let mut state = SelectorState {
            current_index: start,
            redraw: false,
        };
        state.select_prev(count);
        assert_eq!(state.current_index, expected);
    }

    #[test]
    fn sentinel() {
        assert_eq!(Selection::Confirmed(3).as_index_or_sentinel(), 3);
        assert_eq!(Selection::Cancelled.as_index_or_sentinel(), -1);
        assert_eq!(Selection::Cancelled.index(), None);
    }

    #[test]
    fn vertical_paint_and_confirm() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Enter]);

        let selection = select_vertical(
            &mut buf,
            &mut keys,
            col(1) + row(1),
            &["ab", "c"],
            &no_pause(SelectorStyle::plain()),
        )
        .unwrap();

        assert_eq!(selection, Selection::Confirmed(0));
        let expected = [
            "\x1b[?25l",
            "\x1b[1;1H\x1b[1m> ab  \x1b[0m",
            "\x1b[2;1H  c   \x1b[0m",
            "\x1b[1;1H\x1b[1m> ab  \x1b[0m",
            "\x1b[?25h",
        ]
        .concat();
        assert_eq!(buf.output_device().get_buffer(), expected);
        // Paint, confirm, show cursor.
        assert_eq!(buf.output_device().write_call_count(), 3);
    }

    #[test]
    fn vertical_uses_default_colors() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Down, KeyPress::Enter]);

        let selection = select_vertical(
            &mut buf,
            &mut keys,
            col(4) + row(2),
            &["Yes", "No"],
            &no_pause(SelectorStyle::default()),
        )
        .unwrap();

        assert_eq!(selection, Selection::Confirmed(1));
        let output = buf.output_device().get_buffer().to_string();
        assert!(output.contains("\x1b[2;4H\x1b[40m\x1b[90m  Yes  \x1b[0m"));
        assert!(output.contains("\x1b[3;4H\x1b[44m\x1b[37m\x1b[1m> No   \x1b[0m"));
        assert!(output.ends_with("\x1b[3;4H\x1b[42m\x1b[30m\x1b[1m> No   \x1b[0m\x1b[?25h"));
    }

    #[test]
    fn up_from_first_wraps_to_last() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Up, KeyPress::Enter]);
        let mut state = SelectorState::new();

        let selection = run_selector(
            &mut buf,
            &mut keys,
            &mut state,
            SelectorLayout::Vertical,
            col(1) + row(1),
            &["a", "b", "c"],
            &no_pause(SelectorStyle::plain()),
        )
        .unwrap();

        assert_eq!(selection, Selection::Confirmed(2));
        assert_eq!(state.current_index, 2);
        assert!(!state.redraw);
    }

    #[test]
    fn down_past_last_wraps_to_first() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([
            KeyPress::Down,
            KeyPress::Down,
            KeyPress::Down,
            KeyPress::Enter,
        ]);

        let selection = select_vertical(
            &mut buf,
            &mut keys,
            col(1) + row(1),
            &["a", "b", "c"],
            &no_pause(SelectorStyle::plain()),
        )
        .unwrap();

        assert_eq!(selection, Selection::Confirmed(0));
    }

    #[test]
    fn escape_cancels_without_confirmation() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Esc]);
        let mut state = SelectorState::new();

        let selection = run_selector(
            &mut buf,
            &mut keys,
            &mut state,
            SelectorLayout::Vertical,
            col(1) + row(1),
            &["a", "b"],
            &no_pause(SelectorStyle::default()),
        )
        .unwrap();

        assert_eq!(selection, Selection::Cancelled);
        assert_eq!(selection.as_index_or_sentinel(), -1);
        assert_eq!(state.current_index, 0);
        let output = buf.output_device().get_buffer().to_string();
        assert!(!output.contains("\x1b[42m"));
        assert!(output.ends_with("\x1b[0m\x1b[?25h"));
    }

    #[test]
    fn other_keys_do_not_repaint() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([
            KeyPress::Left,
            KeyPress::Right,
            KeyPress::Char('x'),
            KeyPress::Extended(71),
            KeyPress::Down,
            KeyPress::Enter,
        ]);

        let selection = select_vertical(
            &mut buf,
            &mut keys,
            col(1) + row(1),
            &["a", "b"],
            &no_pause(SelectorStyle::plain()),
        )
        .unwrap();

        assert_eq!(selection, Selection::Confirmed(1));
        // Two paints, one confirmation, one show cursor.
        assert_eq!(buf.output_device().write_call_count(), 4);
        assert_eq!(buf.output_device().get_buffer().matches("\x1b[1;1H").count(), 2);
    }

    #[test]
    fn horizontal_paint_and_confirm_column() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([
            KeyPress::Up,
            KeyPress::Right,
            KeyPress::Right,
            KeyPress::Enter,
        ]);

        let selection = select_horizontal(
            &mut buf,
            &mut keys,
            col(1) + row(5),
            &["one", "two", "three"],
            &no_pause(SelectorStyle::plain()),
        )
        .unwrap();

        assert_eq!(selection, Selection::Confirmed(2));
        let output = buf.output_device().get_buffer().to_string();
        assert!(output.starts_with(
            "\x1b[?25l\x1b[5;1H\x1b[1m> one  \x1b[0m  two  \x1b[0m  three  \x1b[0m"
        ));
        // 1 + (2 + 3 + 2) + (2 + 3 + 2)
        assert!(output.ends_with("\x1b[5;15H\x1b[1m> three  \x1b[0m\x1b[?25h"));
    }

    #[test]
    fn horizontal_left_wraps_to_last_option() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Left, KeyPress::Enter]);

        let selection = select_horizontal(
            &mut buf,
            &mut keys,
            col(1) + row(5),
            &["a", "bb", "c"],
            &no_pause(SelectorStyle::plain()),
        )
        .unwrap();

        assert_eq!(selection, Selection::Confirmed(2));
        // 1 + (2 + 1 + 2) + (2 + 2 + 2)
        let output = buf.output_device().get_buffer().to_string();
        assert!(output.ends_with("\x1b[5;12H\x1b[1m> c  \x1b[0m\x1b[?25h"));
    }

    #[test]
    fn padding_ignores_escape_sequences() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Esc]);

        select_vertical(
            &mut buf,
            &mut keys,
            col(1) + row(1),
            &["\x1b[31mred\x1b[0m", "blue"],
            &SelectorStyle::plain(),
        )
        .unwrap();

        let output = buf.output_device().get_buffer().to_string();
        assert!(output.contains("> \x1b[31mred\x1b[0m   \x1b[0m"));
        assert!(output.contains("  blue  \x1b[0m"));
    }

    #[test]
    fn legacy_arrow_codes_navigate() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = LegacyCodeKeyPressReader::new([0xE0_u32, 80, 0x00, 80, 13]);

        let selection = select_vertical(
            &mut buf,
            &mut keys,
            col(1) + row(1),
            &["a", "b", "c"],
            &no_pause(SelectorStyle::plain()),
        )
        .unwrap();

        assert_eq!(selection, Selection::Confirmed(2));
    }

    #[test]
    fn empty_options_are_cancelled_without_drawing() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Enter]);
        let options: [&str; 0] = [];

        let selection = select_vertical(
            &mut buf,
            &mut keys,
            col(1) + row(1),
            &options,
            &SelectorStyle::default(),
        )
        .unwrap();

        assert_eq!(selection, Selection::Cancelled);
        assert_eq!(buf.output_device().get_buffer(), "");
        assert_eq!(keys.remaining(), 1);
    }

    #[test]
    fn cursor_is_restored_on_error() {
        let mut buf = OutputBuffer::new(TestStringWriter::new());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Down]);

        let result = select_vertical(
            &mut buf,
            &mut keys,
            col(1) + row(1),
            &["a", "b"],
            &SelectorStyle::plain(),
        );

        assert!(matches!(result, Err(ConsoleError::InputExhausted)));
        assert!(buf.output_device().get_buffer().ends_with("\x1b[?25h"));
        assert!(buf.is_empty());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut buf = OutputBuffer::new(TestStringWriter::failing());
        let mut keys = TestVecKeyPressReader::new([KeyPress::Enter]);

        let result = select_vertical(
            &mut buf,
            &mut keys,
            col(1) + row(1),
            &["a"],
            &SelectorStyle::plain(),
        );

        assert!(matches!(result, Err(ConsoleError::Write(_))));
        assert_eq!(keys.remaining(), 1);
    }
}
