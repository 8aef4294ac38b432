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

//! Per widget style sheets. Every style is a pre-formatted escape sequence that is
//! appended as is. An empty style emits nothing, defaults only come from [Default].

use std::time::Duration;

use glyphbox_ansi_color::{InlineString, color_bg, color_fg, to_inline_string};

use crate::{DEFAULT_ADVANCE_KEY, DEFAULT_BG_CORRECT, DEFAULT_BG_NORMAL, DEFAULT_BG_SELECT,
            DEFAULT_BORDER_STYLE, DEFAULT_CHAR_DELAY, DEFAULT_CONFIRM_PAUSE,
            DEFAULT_DIALOGUE_BG, DEFAULT_FG_CORRECT, DEFAULT_FG_NORMAL, DEFAULT_FG_SELECT,
            DEFAULT_PROMPT_MAX_LEN, DEFAULT_TEXT_STYLE, STYLE_NONE};

/// Box colors: background for the whole box, border glyphs, and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStyle {
    pub bg: InlineString,
    pub border: InlineString,
    pub text: InlineString,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            bg: STYLE_NONE.into(),
            border: to_inline_string(DEFAULT_BORDER_STYLE),
            text: to_inline_string(DEFAULT_TEXT_STYLE),
        }
    }
}

impl FrameStyle {
    /// Build from `#RRGGBB` colors, see [`glyphbox_ansi_color::color_hex_to_ansi_id`].
    #[must_use]
    pub fn from_hex_colors(bg_hex: &str, border_hex: &str, text_hex: &str) -> Self {
        Self {
            bg: color_bg(bg_hex),
            border: color_fg(border_hex),
            text: color_fg(text_hex),
        }
    }
}

/// Typewriter dialogue settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueStyle {
    pub frame: FrameStyle,
    /// Pause after each revealed code point.
    pub char_delay: Duration,
    /// Letter (case insensitive) that advances a page, along with Enter and Space.
    pub advance_key: char,
}

impl Default for DialogueStyle {
    fn default() -> Self {
        Self {
            frame: FrameStyle {
                bg: to_inline_string(DEFAULT_DIALOGUE_BG),
                ..FrameStyle::default()
            },
            char_delay: DEFAULT_CHAR_DELAY,
            advance_key: DEFAULT_ADVANCE_KEY,
        }
    }
}

impl DialogueStyle {
    #[must_use]
    pub fn with_char_delay(mut self, char_delay: Duration) -> Self {
        self.char_delay = char_delay;
        self
    }
}

/// Selector colors for the three row states: normal, selected (under the cursor), and
/// correct (confirmed with Enter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorStyle {
    pub bg_normal: InlineString,
    pub fg_normal: InlineString,
    pub bg_select: InlineString,
    pub fg_select: InlineString,
    pub bg_correct: InlineString,
    pub fg_correct: InlineString,
    /// How long the confirmed row stays visible before the selector returns.
    pub confirm_pause: Duration,
}

impl Default for SelectorStyle {
    fn default() -> Self {
        Self {
            bg_normal: to_inline_string(DEFAULT_BG_NORMAL),
            fg_normal: to_inline_string(DEFAULT_FG_NORMAL),
            bg_select: to_inline_string(DEFAULT_BG_SELECT),
            fg_select: to_inline_string(DEFAULT_FG_SELECT),
            bg_correct: to_inline_string(DEFAULT_BG_CORRECT),
            fg_correct: to_inline_string(DEFAULT_FG_CORRECT),
            confirm_pause: DEFAULT_CONFIRM_PAUSE,
        }
    }
}

impl SelectorStyle {
    /// Colors given as `[bg, fg]` pairs of `#RRGGBB` strings.
    #[must_use]
    pub fn from_hex_colors(
        normal: [&str; 2],
        select: [&str; 2],
        correct: [&str; 2],
    ) -> Self {
        Self {
            bg_normal: color_bg(normal[0]),
            fg_normal: color_fg(normal[1]),
            bg_select: color_bg(select[0]),
            fg_select: color_fg(select[1]),
            bg_correct: color_bg(correct[0]),
            fg_correct: color_fg(correct[1]),
            ..Self::default()
        }
    }

    /// Every style empty: only the markers and text are drawn.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            bg_normal: STYLE_NONE.into(),
            fg_normal: STYLE_NONE.into(),
            bg_select: STYLE_NONE.into(),
            fg_select: STYLE_NONE.into(),
            bg_correct: STYLE_NONE.into(),
            fg_correct: STYLE_NONE.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_confirm_pause(mut self, confirm_pause: Duration) -> Self {
        self.confirm_pause = confirm_pause;
        self
    }
}

/// Line editor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptStyle {
    /// Applied once before reading. Empty for none.
    pub input_color: InlineString,
    /// Most visible characters accepted. 0 means [`DEFAULT_PROMPT_MAX_LEN`].
    pub max_len: usize,
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self {
            input_color: STYLE_NONE.into(),
            max_len: DEFAULT_PROMPT_MAX_LEN,
        }
    }
}

impl PromptStyle {
    #[must_use]
    pub fn new(max_len: usize, input_color: &str) -> Self {
        Self {
            input_color: input_color.into(),
            max_len,
        }
    }

    /// [`Self::max_len`] with 0 replaced by the default.
    #[must_use]
    pub fn effective_max_len(&self) -> usize {
        if self.max_len == 0 {
            DEFAULT_PROMPT_MAX_LEN
        } else {
            self.max_len
        }
    }
}
