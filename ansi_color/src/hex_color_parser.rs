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

//! This module contains a parser that parses a hex color string into a [`RgbColor`]
//! struct. The hex color string can be in the following format: `#RRGGBB` or `RRGGBB`,
//! eg: `#FF0000` for red. Hex digits are case insensitive. Anything after the sixth hex
//! digit is left in the remainder.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{map_res, opt}};

use crate::RgbColor;

/// Parse function that generates an [`RgbColor`] struct from a hex color string.
///
/// # Errors
///
/// Returns a [`nom::Err`] when the input does not start with six hex digits (after the
/// optional `#`).
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    let (input, _) = opt(tag("#")).parse(input)?;
    let (input, (red, green, blue)) =
        (helper_fns::parse_hex_seg, helper_fns::parse_hex_seg, helper_fns::parse_hex_seg)
            .parse(input)?;
    Ok((input, RgbColor { red, green, blue }))
}

/// Same as [`parse_hex_color`], except that malformed or short input is substituted
/// with [`RgbColor::BLACK`].
#[must_use]
pub fn parse_hex_color_or_black(input: &str) -> RgbColor {
    match parse_hex_color(input) {
        Ok((_, rgb_color)) => rgb_color,
        Err(_) => RgbColor::BLACK,
    }
}

mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// Used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }
}
