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

//! Typewriter dialogue box.
//!
//! The text is wrapped once, then split into pages of `size.height` lines. Each page
//! goes through two phases:
//! 1. Reveal: an empty box is drawn, then every line is revealed one code point at a
//!    time, flushing after each one. A key press while a line is being revealed prints
//!    the rest of that line at once. The next line animates again.
//! 2. Await page advance: `▼` is drawn at the bottom right of the interior and the
//!    dialogue blocks until Enter, Space or the advance letter is pressed.
//!
//! There is no way to abort a dialogue. Once started, every page is shown.

use std::{io::Write, thread, time::Duration};

use crate::{ConsoleResult, DialogueStyle, ESC, KeyPress, KeyPressReader, OutputBuffer,
            PAGE_ADVANCE_INDICATOR, Pos, Size, draw_box_with_lines, is_escape_terminator,
            utf8_char_len, word_wrap};

/// Show `text` inside a titled box, one page at a time. Returns once the last page is
/// acknowledged, leaving it on screen.
///
/// # Errors
///
/// Returns a [`crate::ConsoleError`] if flushing to the console or reading a key fails.
pub fn speak<W: Write>(
    buf: &mut OutputBuffer<W>,
    keys: &mut impl KeyPressReader,
    pos: Pos,
    size: Size,
    title: &str,
    text: &str,
    style: &DialogueStyle,
) -> ConsoleResult<()> {
    let lines = word_wrap(text, size.width);
    let page_height = size.height.max(1);

    for (page_index, page) in lines.chunks(page_height).enumerate() {
        tracing::debug!(message = "dialogue page", page_index, lines = page.len());

        draw_box_with_lines(buf, pos, size, title, &[], &style.frame);
        buf.flush()?;

        for (line_index, line) in page.iter().enumerate() {
            let line_pos = pos.down(line_index + 1).right(1);
            let skipped = reveal_line(buf, keys, line_pos, line, style)?;
            if skipped {
                tracing::debug!(message = "dialogue line skipped", page_index, line_index);
            }
        }

        buf.move_cursor_to(pos.down(size.height).right(size.width));
        buf.append_text(&style.frame.bg);
        buf.append_text(&style.frame.border);
        buf.append_text(PAGE_ADVANCE_INDICATOR);
        buf.reset_style();
        buf.flush()?;

        wait_for_page_advance(keys, style.advance_key)?;
    }

    Ok(())
}

/// Reveal `text` at `pos` without a box. A `\n` continues on the next row at
/// `pos.col`. A key press stops the pacing for the rest of the text.
///
/// # Errors
///
/// Returns a [`crate::ConsoleError`] if flushing to the console or reading a key fails.
pub fn text_speak<W: Write>(
    buf: &mut OutputBuffer<W>,
    keys: &mut impl KeyPressReader,
    pos: Pos,
    text: &str,
    style: &DialogueStyle,
) -> ConsoleResult<()> {
    let bg = &style.frame.bg;
    let text_style = &style.frame.text;
    let mut row_offset = 0;
    let mut skip = false;

    buf.move_cursor_to(pos);
    buf.append_text(bg);
    buf.append_text(text_style);
    buf.flush()?;

    let mut rest = text;
    while let Some((unit, tail)) = split_first_unit(rest) {
        rest = tail;
        match unit {
            TextUnit::Newline => {
                row_offset += 1;
                buf.move_cursor_to(pos.down(row_offset));
                buf.append_text(bg);
                buf.append_text(text_style);
                buf.flush()?;
            }
            TextUnit::Escape(escape) => buf.append_text(escape),
            TextUnit::Glyph(glyph) => {
                buf.append_text(glyph);
                buf.flush()?;
                if !skip {
                    if keys.try_read_key_press()?.is_some() {
                        skip = true;
                    } else {
                        pace(style.char_delay);
                    }
                }
            }
        }
    }

    buf.reset_style();
    buf.flush()
}

/// Returns true if a key press cut the animation short.
fn reveal_line<W: Write>(
    buf: &mut OutputBuffer<W>,
    keys: &mut impl KeyPressReader,
    line_pos: Pos,
    line: &str,
    style: &DialogueStyle,
) -> ConsoleResult<bool> {
    // Escape runs inside the line are replayed before every glyph, so that the style
    // applied per glyph does not undo them.
    let mut inline_styles = String::new();
    let mut col_offset = 0;
    let mut rest = line;

    while let Some((unit, tail)) = split_first_unit(rest) {
        rest = tail;
        let glyph = match unit {
            TextUnit::Escape(escape) => {
                inline_styles.push_str(escape);
                continue;
            }
            TextUnit::Newline => continue,
            TextUnit::Glyph(glyph) => glyph,
        };

        buf.move_cursor_to(line_pos.right(col_offset));
        buf.append_text(&style.frame.bg);
        buf.append_text(&style.frame.text);
        buf.append_text(&inline_styles);
        buf.append_text(glyph);
        buf.flush()?;
        col_offset += 1;

        pace(style.char_delay);

        if keys.try_read_key_press()?.is_some() {
            if !rest.is_empty() {
                buf.append_text(rest);
                buf.flush()?;
            }
            return Ok(true);
        }
    }

    Ok(false)
}

fn wait_for_page_advance(
    keys: &mut impl KeyPressReader,
    advance_key: char,
) -> ConsoleResult<()> {
    loop {
        match keys.read_key_press()? {
            KeyPress::Enter | KeyPress::Char(' ') => return Ok(()),
            KeyPress::Char(ch) if ch.eq_ignore_ascii_case(&advance_key) => return Ok(()),
            _ => {}
        }
    }
}

fn pace(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextUnit<'a> {
    /// A whole escape run, up to and including its terminating letter.
    Escape(&'a str),
    Newline,
    /// One code point.
    Glyph(&'a str),
}

fn split_first_unit(text: &str) -> Option<(TextUnit<'_>, &str)> {
    let first = *text.as_bytes().first()?;
    let unit_len = if first == ESC {
        text.bytes()
            .skip(1)
            .position(is_escape_terminator)
            .map_or(text.len(), |offset| offset + 2)
    } else {
        utf8_char_len(first)
    };
    let (unit, rest) = text.split_at(unit_len);
    let unit = match first {
        ESC => TextUnit::Escape(unit),
        b'\n' => TextUnit::Newline,
        _ => TextUnit::Glyph(unit),
    };
    Some((unit, rest))
}
