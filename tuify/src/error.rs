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

//! Errors are only produced at the two device boundaries: writing the output buffer to
//! the console and reading keys. Bad caller input (empty text, malformed hex colors,
//! zero lengths) is replaced with defaults instead, and allocation failure aborts the
//! process.

use miette::Diagnostic;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConsoleError {
    /// Failed to write or flush the accumulated bytes to the console device.
    #[error("Failed to write to the console device")]
    #[diagnostic(
        code(glyphbox::console::write),
        help("Check that stdout is still open (eg: the terminal was not closed)")
    )]
    Write(#[source] std::io::Error),

    /// Failed to read a key from the key input source.
    #[error("Failed to read from the key input source")]
    #[diagnostic(
        code(glyphbox::input::read),
        help("Interactive widgets need a terminal in raw mode on stdin")
    )]
    Read(#[source] std::io::Error),

    /// A scripted key source ran out of keys while a widget was blocked on input.
    #[error("The key input source has no more keys")]
    #[diagnostic(code(glyphbox::input::exhausted))]
    InputExhausted,
}
