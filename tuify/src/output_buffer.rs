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

//! Every byte the engine puts on screen goes through [`OutputBuffer`]. Widgets append
//! text, styles and cursor moves, then call [`OutputBuffer::flush`] once the image is
//! complete, so the terminal never shows a half drawn box. The typewriter effect is the
//! one place that flushes after every glyph.
//!
//! Growth policy: capacity doubles until the pending append fits, and is kept across
//! flushes. If the allocator can't satisfy the growth the process aborts, there is no
//! way to continue with a truncated escape sequence in the buffer.

use std::{fmt::Display,
          io::{Stdout, Write}};

use glyphbox_ansi_color::{SgrCode, to_inline_string};

use crate::{ConsoleError, ConsoleResult, CsiSequence, DEFAULT_BUFFER_CAPACITY,
            ERASE_ENTIRE_DISPLAY, Pos};

#[derive(Debug)]
pub struct OutputBuffer<W: Write> {
    data: Vec<u8>,
    capacity: usize,
    output_device: W,
}

impl OutputBuffer<Stdout> {
    #[must_use]
    pub fn new_stdout() -> Self { Self::new(std::io::stdout()) }
}

impl<W: Write> OutputBuffer<W> {
    pub fn new(output_device: W) -> Self {
        Self::with_capacity(output_device, DEFAULT_BUFFER_CAPACITY)
    }

    pub fn with_capacity(output_device: W, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            output_device,
        }
    }

    /// Number of pending bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.data.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// The pending bytes that the next [`Self::flush`] will write.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.data }

    pub fn output_device(&self) -> &W { &self.output_device }

    /// Any pending bytes are dropped.
    pub fn into_output_device(self) -> W { self.output_device }

    pub fn append_raw(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        self.data.extend_from_slice(bytes);
    }

    pub fn append_text(&mut self, text: &str) { self.append_raw(text.as_bytes()); }

    pub fn append_repeated(&mut self, text: &str, count: usize) {
        self.reserve(text.len() * count);
        for _ in 0..count {
            self.data.extend_from_slice(text.as_bytes());
        }
    }

    /// Append anything that implements [Display], eg: [`CsiSequence`] or [`SgrCode`].
    pub fn append_display(&mut self, it: impl Display) {
        self.append_text(&to_inline_string(it));
    }

    /// `ESC [ row ; col H`, both 1-based.
    pub fn move_cursor(&mut self, row: usize, col: usize) {
        self.append_display(CsiSequence::CursorPosition { row, col });
    }

    pub fn move_cursor_to(&mut self, pos: Pos) { self.move_cursor(pos.row, pos.col); }

    pub fn hide_cursor(&mut self) { self.append_display(CsiSequence::HideCursor); }

    pub fn show_cursor(&mut self) { self.append_display(CsiSequence::ShowCursor); }

    pub fn clear_screen(&mut self) {
        self.append_display(CsiSequence::EraseDisplay(ERASE_ENTIRE_DISPLAY));
    }

    pub fn reset_style(&mut self) { self.append_display(SgrCode::Reset); }

    /// Write all pending bytes to the output device with a single write, then empty the
    /// buffer. Capacity is kept. Does nothing when there is nothing pending.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Write`] if the device rejects the write or the flush. The
    /// pending bytes are discarded either way, so a later flush never repeats a partial
    /// frame.
    pub fn flush(&mut self) -> ConsoleResult<()> {
        if self.data.is_empty() {
            return Ok(());
        }

        tracing::trace!(message = "flush", bytes = self.data.len());

        let result = self
            .output_device
            .write_all(&self.data)
            .and_then(|()| self.output_device.flush());
        self.data.clear();
        result.map_err(ConsoleError::Write)
    }

    fn reserve(&mut self, additional: usize) {
        let required = self.data.len() + additional;
        if required <= self.capacity {
            return;
        }

        let mut new_capacity = self.capacity.max(1);
        while new_capacity < required {
            new_capacity *= 2;
        }

        tracing::debug!(
            message = "output buffer growth",
            from = self.capacity,
            to = new_capacity
        );

        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }
}
