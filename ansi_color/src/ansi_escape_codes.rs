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

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

/// The 16 colors every terminal supports. `Foreground*`/`Background*` variants of
/// [`SgrCode`] map these onto `30-37`/`90-97` and `40-47`/`100-107`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl BasicColor {
    /// Offset within the normal (`0..8`) or bright (`8..16`) group.
    fn offset(self) -> u8 { (self as u8) % 8 }

    fn is_bright(self) -> bool { (self as u8) >= 8 }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    ForegroundBasic(BasicColor),
    BackgroundBasic(BasicColor),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
}

pub mod sgr_code_impl {
    use super::{BasicColor, Display, Formatter, Result, SgrCode};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    fn basic_fg(color: BasicColor) -> u8 {
        if color.is_bright() {
            90 + color.offset()
        } else {
            30 + color.offset()
        }
    }

    fn basic_bg(color: BasicColor) -> u8 {
        if color.is_bright() {
            100 + color.offset()
        } else {
            40 + color.offset()
        }
    }

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                     => write!(f, "{CSI}1{SGR}"),
                SgrCode::ForegroundBasic(color)   => write!(f, "{CSI}{}{SGR}", basic_fg(color)),
                SgrCode::BackgroundBasic(color)   => write!(f, "{CSI}{}{SGR}", basic_bg(color)),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
            }
        }
    }
}
