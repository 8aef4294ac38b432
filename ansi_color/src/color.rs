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
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//!
//! Palette layout: indices 0-15 are the basic and bright colors, 16-231 are a 6x6x6
//! cube, and 232-255 are a gray ramp. Only the cube is produced by
//! [`convert_rgb_into_ansi256`].

pub trait TransformColor {
    /// Returns the index of a color in 256-color ANSI palette approximating the `self`
    /// color.
    fn as_ansi256(&self) -> Ansi256Color;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor {
        red: 0,
        green: 0,
        blue: 0,
    };
}

impl TransformColor for RgbColor {
    fn as_ansi256(&self) -> Ansi256Color { convert_rgb_into_ansi256(*self) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ansi256Color {
    pub index: u8,
}

/// The offset of the first entry of the 6x6x6 color cube in the 256 color palette.
pub const COLOR_CUBE_OFFSET: u8 = 16;

/// Map one 0-255 channel onto the 0-5 axis of the color cube.
///
/// The cube axis values are `0, 95, 135, 175, 215, 255`. Anything under 48 is closer to
/// 0 than to 95, anything under 115 is closer to 95 than to 135, and from there each
/// step is 40 wide.
#[must_use]
pub fn scale_channel_to_cube(value: u8) -> u8 {
    match value {
        0..48 => 0,
        48..115 => 1,
        _ => (value - 35) / 40,
    }
}

/// `16 + 36 * r + 6 * g + b`, with each channel quantized by [`scale_channel_to_cube`].
#[must_use]
pub fn convert_rgb_into_ansi256(rgb_color: RgbColor) -> Ansi256Color {
    let red = scale_channel_to_cube(rgb_color.red);
    let green = scale_channel_to_cube(rgb_color.green);
    let blue = scale_channel_to_cube(rgb_color.blue);
    Ansi256Color {
        index: COLOR_CUBE_OFFSET + 36 * red + 6 * green + blue,
    }
}
