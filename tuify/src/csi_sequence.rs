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

//! The cursor and screen control sequences that the engine emits. SGR (styling)
//! sequences live in [`glyphbox_ansi_color::SgrCode`].

use std::fmt::{Display, Formatter, Result};

use glyphbox_ansi_color::sgr_code_impl::CSI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// Cursor Position (CUP) - ESC [ row ; col H. Both are 1-based.
    CursorPosition { row: usize, col: usize },
    /// Erase Display (ED) - ESC [ n J
    EraseDisplay(u16),
    /// Show cursor (DECTCEM) - ESC [ ? 25 h
    ShowCursor,
    /// Hide cursor (DECTCEM) - ESC [ ? 25 l
    HideCursor,
}

/// `n` for [`CsiSequence::EraseDisplay`] that clears the whole screen.
pub const ERASE_ENTIRE_DISPLAY: u16 = 2;

impl Display for CsiSequence {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            CsiSequence::CursorPosition { row, col } => write!(f, "{CSI}{row};{col}H"),
            CsiSequence::EraseDisplay(n)             => write!(f, "{CSI}{n}J"),
            CsiSequence::ShowCursor                  => write!(f, "{CSI}?25h"),
            CsiSequence::HideCursor                  => write!(f, "{CSI}?25l"),
        }
    }
}
