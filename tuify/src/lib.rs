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

//! # glyphbox_tuify
//!
//! A small engine for drawing text user interfaces with raw ANSI escape sequences.
//!
//! Everything is drawn through an [`OutputBuffer`]: widgets append UTF-8 text, SGR
//! styles and cursor moves, and the buffer writes the whole frame to the console
//! device in one call to [`OutputBuffer::flush`]. Layout is computed in *visible
//! columns* ([`visible_len`]), which skips escape sequences and counts each UTF-8 code
//! point once, so colored and accented text lines up.
//!
//! Widgets:
//!
//! | Widget                                  | Input                     |
//! | --------------------------------------- | ------------------------- |
//! | [`draw_box`], [`clear_region`], [`draw_text`] | none                |
//! | [`speak`], [`text_speak`]               | any key skips, Enter/Space/`z` advance |
//! | [`prompt`]                              | printable chars, Backspace, Enter |
//! | [`select_vertical`], [`select_horizontal`] | arrows, Enter, Esc     |
//!
//! Interactive widgets read keys from a [`KeyPressReader`]. Use
//! [`CrosstermKeyPressReader`] with the terminal in raw mode, or
//! [`TestVecKeyPressReader`] to script keys in tests.
//!
//! ```
//! use glyphbox_tuify::*;
//!
//! let mut buf = OutputBuffer::new(TestStringWriter::new());
//! draw_box(
//!     &mut buf,
//!     col(1) + row(1),
//!     width(10) + height(3),
//!     "UI",
//!     "",
//!     &FrameStyle::default(),
//! );
//! buf.flush().unwrap();
//!
//! let mut keys = TestVecKeyPressReader::new([KeyPress::Down, KeyPress::Enter]);
//! let style = SelectorStyle::default().with_confirm_pause(std::time::Duration::ZERO);
//! let selection =
//!     select_vertical(&mut buf, &mut keys, col(2) + row(6), &["Yes", "No"], &style)
//!         .unwrap();
//! assert_eq!(selection, Selection::Confirmed(1));
//! ```
//!
//! The binary target `glyphbox-demo` runs each widget in a real terminal. Logs go to
//! `log.txt` when `--log-file` is passed, see [`log_support`].
//!
//! ANSI escape codes:
//!
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod components;
pub mod constants;
pub mod csi_sequence;
pub mod dimens;
pub mod error;
pub mod keypress;
pub mod log_support;
pub mod output_buffer;
pub mod test_fixtures;
pub mod text_metrics;
pub mod word_wrap;

// Re-export.
pub use components::*;
pub use constants::*;
pub use csi_sequence::*;
pub use dimens::*;
pub use error::*;
pub use glyphbox_ansi_color::*;
pub use keypress::*;
pub use log_support::*;
pub use output_buffer::*;
pub use test_fixtures::*;
pub use text_metrics::*;
pub use word_wrap::*;
