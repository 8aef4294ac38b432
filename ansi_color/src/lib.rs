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

//! # glyphbox_ansi_color
//!
//! Turn `#RRGGBB` hex strings into ANSI 256 color escape sequences.
//!
//! ```
//! use glyphbox_ansi_color::{color_bg, color_fg, color_hex_to_ansi_id};
//!
//! assert_eq!(color_hex_to_ansi_id("#000000"), 16);
//! assert_eq!(color_hex_to_ansi_id("#FFFFFF"), 231);
//! assert_eq!(color_fg("#FFFFFF").as_str(), "\x1b[38;5;231m");
//! assert_eq!(color_bg("000000").as_str(), "\x1b[48;5;16m");
//! ```
//!
//! The conversion is a pure function. Every color string is returned as an owned,
//! stack allocated [`InlineString`], so two calls never share storage.
//!
//! Malformed or short hex input maps to black (palette index 16), it never fails.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod ansi_escape_codes;
pub mod color;
pub mod color_string;
pub mod hex_color_parser;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use color_string::*;
pub use hex_color_parser::*;
