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

//! In memory console device and scripted key source, for tests.

use std::{borrow::Cow,
          collections::VecDeque,
          io::{Error, ErrorKind, Result, Write}};

use crate::{ConsoleError, ConsoleResult, KeyPress, KeyPressReader};

/// Records everything written to it. Each call to [`Write::write`] and
/// [`Write::flush`] is counted, so tests can check that a frame went out in one write.
#[derive(Debug, Default)]
pub struct TestStringWriter {
    buffer: Vec<u8>,
    write_call_count: usize,
    flush_call_count: usize,
    fail: bool,
}

impl TestStringWriter {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Every write fails with [`ErrorKind::BrokenPipe`].
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn get_buffer(&self) -> Cow<'_, str> { String::from_utf8_lossy(&self.buffer) }

    #[must_use]
    pub fn get_bytes(&self) -> &[u8] { &self.buffer }

    #[must_use]
    pub fn write_call_count(&self) -> usize { self.write_call_count }

    #[must_use]
    pub fn flush_call_count(&self) -> usize { self.flush_call_count }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if self.fail {
            return Err(Error::new(ErrorKind::BrokenPipe, "test writer is closed"));
        }
        self.write_call_count += 1;
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_call_count += 1;
        Ok(())
    }
}

/// Plays back a script of keys. A `None` entry means "no key is waiting" for one call
/// to [`KeyPressReader::try_read_key_press`], and is skipped by
/// [`KeyPressReader::read_key_press`].
///
/// When the script runs out, blocking reads return [`ConsoleError::InputExhausted`] and
/// polls return [None].
#[derive(Debug, Default)]
pub struct TestVecKeyPressReader {
    script: VecDeque<Option<KeyPress>>,
    read_count: usize,
}

impl TestVecKeyPressReader {
    /// Every key is available immediately.
    #[must_use]
    pub fn new(key_press_vec: impl IntoIterator<Item = KeyPress>) -> Self {
        Self::from_script(key_press_vec.into_iter().map(Some))
    }

    #[must_use]
    pub fn from_script(script: impl IntoIterator<Item = Option<KeyPress>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            read_count: 0,
        }
    }

    /// Type `text` one character at a time.
    #[must_use]
    pub fn typing(text: &str) -> Vec<KeyPress> { text.chars().map(KeyPress::Char).collect() }

    /// Keys consumed so far.
    #[must_use]
    pub fn read_count(&self) -> usize { self.read_count }

    #[must_use]
    pub fn remaining(&self) -> usize { self.script.len() }
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> ConsoleResult<KeyPress> {
        while let Some(entry) = self.script.pop_front() {
            if let Some(key_press) = entry {
                self.read_count += 1;
                return Ok(key_press);
            }
        }
        Err(ConsoleError::InputExhausted)
    }

    fn try_read_key_press(&mut self) -> ConsoleResult<Option<KeyPress>> {
        let maybe_key_press = self.script.pop_front().flatten();
        if maybe_key_press.is_some() {
            self.read_count += 1;
        }
        Ok(maybe_key_press)
    }
}
