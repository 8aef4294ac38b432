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

//! Bordered boxes, region clearing, and static text.
//!
//! A box at `pos` with interior `size` covers `size.height + 2` rows and
//! `size.width + 2` columns, border included:
//!
//! ```text
//! ╔═══ UI ═══╗   <- pos.row
//! ║wrapped   ║
//! ║body text ║
//! ╚══════════╝   <- pos.row + height + 1
//! ```
//!
//! Nothing here flushes. Callers flush once the whole image is in the buffer.

use std::io::Write;

use crate::{BOX_BOTTOM_LEFT, BOX_BOTTOM_RIGHT, BOX_HORIZONTAL, BOX_TOP_LEFT, BOX_TOP_RIGHT,
            BOX_VERTICAL, DEFAULT_CLEAR_BG, FrameStyle, OutputBuffer, Pos, Size,
            WrappedLines, visible_len, word_wrap};

/// Draw a double line box. The body is word wrapped to `size.width`, and lines past
/// `size.height` are not drawn.
///
/// Overflow policies:
/// - A title that does not fit in `width - 2` columns is drawn as is, over the border.
/// - A wrapped line wider than the interior is drawn without padding.
pub fn draw_box<W: Write>(
    buf: &mut OutputBuffer<W>,
    pos: Pos,
    size: Size,
    title: &str,
    body: &str,
    style: &FrameStyle,
) {
    let lines = if body.is_empty() {
        WrappedLines::new()
    } else {
        word_wrap(body, size.width)
    };
    draw_box_with_lines(buf, pos, size, title, &lines, style);
}

/// Same as [`draw_box`] with the body already split into lines.
pub fn draw_box_with_lines<W: Write>(
    buf: &mut OutputBuffer<W>,
    pos: Pos,
    size: Size,
    title: &str,
    lines: &[String],
    style: &FrameStyle,
) {
    let Size { width, height } = size;

    // Top border.
    buf.move_cursor_to(pos);
    buf.append_text(&style.bg);
    buf.append_text(&style.border);
    buf.append_text(BOX_TOP_LEFT);
    render_title(buf, title, width);
    buf.append_text(BOX_TOP_RIGHT);
    buf.reset_style();

    // Interior rows.
    for row_index in 0..height {
        buf.move_cursor_to(pos.down(row_index + 1));
        buf.append_text(&style.bg);
        buf.append_text(&style.border);
        buf.append_text(BOX_VERTICAL);
        buf.append_text(&style.text);

        let mut padding = width;
        if let Some(line) = lines.get(row_index) {
            buf.append_text(line);
            padding = width.saturating_sub(visible_len(line));
        }
        buf.append_repeated(" ", padding);

        buf.append_text(&style.border);
        buf.append_text(BOX_VERTICAL);
        buf.reset_style();
    }

    // Bottom border.
    buf.move_cursor_to(pos.down(height + 1));
    buf.append_text(&style.bg);
    buf.append_text(&style.border);
    buf.append_text(BOX_BOTTOM_LEFT);
    buf.append_repeated(BOX_HORIZONTAL, width);
    buf.append_text(BOX_BOTTOM_RIGHT);
    buf.reset_style();
}

/// Centered as `═ title ═` when it fits, any odd fill column goes on the right.
fn render_title<W: Write>(buf: &mut OutputBuffer<W>, title: &str, width: usize) {
    if title.is_empty() {
        buf.append_repeated(BOX_HORIZONTAL, width);
        return;
    }

    let title_len = visible_len(title);
    if title_len + 2 <= width {
        let fill = width - title_len - 2;
        let fill_left = fill / 2;
        buf.append_repeated(BOX_HORIZONTAL, fill_left);
        buf.append_text(" ");
        buf.append_text(title);
        buf.append_text(" ");
        buf.append_repeated(BOX_HORIZONTAL, fill - fill_left);
    } else {
        buf.append_text(title);
    }
}

/// Blank out the area a box with the same `pos` and `size` would cover, border
/// included. `bg` of [None] means black ([`DEFAULT_CLEAR_BG`]).
pub fn clear_region<W: Write>(
    buf: &mut OutputBuffer<W>,
    pos: Pos,
    size: Size,
    bg: Option<&str>,
) {
    for row_index in 0..size.height + 2 {
        buf.move_cursor_to(pos.down(row_index));
        match bg {
            Some(bg) => buf.append_text(bg),
            None => buf.append_display(DEFAULT_CLEAR_BG),
        }
        buf.append_repeated(" ", size.width + 2);
        buf.reset_style();
    }
}

/// Draw text without wrapping. Each `\n` starts a new row at `pos.col`. Empty styles
/// are skipped.
pub fn draw_text<W: Write>(
    buf: &mut OutputBuffer<W>,
    pos: Pos,
    text: &str,
    text_style: &str,
    bg: &str,
) {
    let mut segments = text.split('\n').peekable();
    let mut row_offset = 0;
    while let Some(segment) = segments.next() {
        // Text after the last newline is only drawn if there is some.
        if segments.peek().is_none() && segment.is_empty() {
            break;
        }
        buf.move_cursor_to(pos.down(row_offset));
        buf.append_text(bg);
        buf.append_text(text_style);
        buf.append_text(segment);
        buf.reset_style();
        row_offset += 1;
    }
}
