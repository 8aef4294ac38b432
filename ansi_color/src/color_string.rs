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

use std::fmt::{Display, Write as _};

use smallstr::SmallString;

use crate::{SgrCode, TransformColor, parse_hex_color_or_black};

pub mod sizing {
    /// A foreground plus a background 256 color escape sequence fit inline.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;
}

/// Owned, stack allocated string used for escape sequences and styles. Longer values
/// spill over to the heap transparently.
pub type InlineString = SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]>;

/// Format anything that implements [Display] (eg: [`SgrCode`]) into an
/// [`InlineString`].
pub fn to_inline_string(it: impl Display) -> InlineString {
    let mut acc = InlineString::new();
    // Writing into a SmallString can't fail.
    _ = write!(acc, "{it}");
    acc
}

/// Palette index (16-231) for a `#RRGGBB` string. Malformed or short input yields 16.
#[must_use]
pub fn color_hex_to_ansi_id(hex: &str) -> u8 { parse_hex_color_or_black(hex).as_ansi256().index }

/// Foreground escape sequence, eg: `"#FFFFFF"` -> `ESC[38;5;231m`.
#[must_use]
pub fn color_fg(hex: &str) -> InlineString {
    to_inline_string(SgrCode::ForegroundAnsi256(color_hex_to_ansi_id(hex)))
}

/// Background escape sequence, eg: `"#000000"` -> `ESC[48;5;16m`.
#[must_use]
pub fn color_bg(hex: &str) -> InlineString {
    to_inline_string(SgrCode::BackgroundAnsi256(color_hex_to_ansi_id(hex)))
}
