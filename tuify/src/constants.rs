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

use std::time::Duration;

use glyphbox_ansi_color::{BasicColor, SgrCode};

// Double line box drawing glyphs (U+2554 family).
pub const BOX_TOP_LEFT: &str = "\u{2554}"; // ╔
pub const BOX_HORIZONTAL: &str = "\u{2550}"; // ═
pub const BOX_TOP_RIGHT: &str = "\u{2557}"; // ╗
pub const BOX_VERTICAL: &str = "\u{2551}"; // ║
pub const BOX_BOTTOM_LEFT: &str = "\u{255A}"; // ╚
pub const BOX_BOTTOM_RIGHT: &str = "\u{255D}"; // ╝

/// Shown at the bottom right of a dialogue page when it waits for the user.
pub const PAGE_ADVANCE_INDICATOR: &str = "\u{25BC}"; // ▼

// Selector row markers.
pub const SELECTED_MARKER: &str = "> ";
pub const UNSELECTED_MARKER: &str = "  ";
/// Trailing gap after each option in the horizontal selector.
pub const HORIZONTAL_OPTION_GAP: &str = "  ";

// Default styles.
pub const STYLE_NONE: &str = "";
pub const DEFAULT_BORDER_STYLE: SgrCode = SgrCode::ForegroundBasic(BasicColor::White);
pub const DEFAULT_TEXT_STYLE: SgrCode = SgrCode::ForegroundBasic(BasicColor::White);
pub const DEFAULT_CLEAR_BG: SgrCode = SgrCode::BackgroundBasic(BasicColor::Black);
pub const DEFAULT_DIALOGUE_BG: SgrCode = SgrCode::BackgroundBasic(BasicColor::Black);
pub const DEFAULT_BG_NORMAL: SgrCode = SgrCode::BackgroundBasic(BasicColor::Black);
pub const DEFAULT_FG_NORMAL: SgrCode = SgrCode::ForegroundBasic(BasicColor::BrightBlack);
pub const DEFAULT_BG_SELECT: SgrCode = SgrCode::BackgroundBasic(BasicColor::Blue);
pub const DEFAULT_FG_SELECT: SgrCode = SgrCode::ForegroundBasic(BasicColor::White);
pub const DEFAULT_BG_CORRECT: SgrCode = SgrCode::BackgroundBasic(BasicColor::Green);
pub const DEFAULT_FG_CORRECT: SgrCode = SgrCode::ForegroundBasic(BasicColor::Black);

/// Erases one echoed glyph: move back, overwrite with a space, move back again.
pub const BACKSPACE_ERASE: &str = "\x08 \x08";

// Sizing.
pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;
pub const DEFAULT_PROMPT_MAX_LEN: usize = 255;

// Timing.
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(30);
pub const DEFAULT_CONFIRM_PAUSE: Duration = Duration::from_millis(150);

/// Case insensitive letter that advances a dialogue page, besides Enter and Space.
pub const DEFAULT_ADVANCE_KEY: char = 'z';
