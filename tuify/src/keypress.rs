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

//! Key input.
//!
//! Widgets read keys through the [`KeyPressReader`] trait:
//! - [`KeyPressReader::read_key_press`] blocks until the next key. A multi-byte
//!   character arrives as a single [`KeyPress::Char`].
//! - [`KeyPressReader::try_read_key_press`] never blocks. It consumes and returns the
//!   next key if one is waiting.
//!
//! [`CrosstermKeyPressReader`] reads the real terminal (it must be in raw mode).
//! [`LegacyCodeKeyPressReader`] decodes a stream of console key codes, where `0x00` or
//! `0xE0` announces that the following code is an extended (navigation) key.

use std::{iter::Peekable, time::Duration};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{ConsoleError, ConsoleResult};

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyPress {
    /// A Unicode scalar value. Control characters (eg: `'\x03'` for Ctrl+C) are
    /// delivered as is and widgets treat them as not printable.
    Char(char),
    Enter,
    Backspace,
    Esc,
    Up,
    Down,
    Left,
    Right,
    /// Any other navigation or function key, by its console scan code (eg: 71 for Home).
    Extended(u8),
    #[default]
    Noop,
}

pub trait KeyPressReader {
    /// Block until the next key arrives.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Read`] when the input source fails, or
    /// [`ConsoleError::InputExhausted`] when a finite source has no more keys.
    fn read_key_press(&mut self) -> ConsoleResult<KeyPress>;

    /// Consume and return the next key if one is already waiting, without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Read`] when the input source fails.
    fn try_read_key_press(&mut self) -> ConsoleResult<Option<KeyPress>>;
}

impl<T: KeyPressReader + ?Sized> KeyPressReader for &mut T {
    fn read_key_press(&mut self) -> ConsoleResult<KeyPress> { (**self).read_key_press() }

    fn try_read_key_press(&mut self) -> ConsoleResult<Option<KeyPress>> {
        (**self).try_read_key_press()
    }
}

/// Non-blocking poll: the next waiting key, or [None].
///
/// # Errors
///
/// See [`KeyPressReader::try_read_key_press`].
pub fn poll_key(reader: &mut impl KeyPressReader) -> ConsoleResult<Option<KeyPress>> {
    reader.try_read_key_press()
}

/// Non-blocking poll using the legacy key codes: 0 when no key is waiting, otherwise
/// [`KeyPress::legacy_code`] (eg: 1072 for Up).
///
/// # Errors
///
/// See [`KeyPressReader::try_read_key_press`].
pub fn poll_key_code(reader: &mut impl KeyPressReader) -> ConsoleResult<i32> {
    Ok(poll_key(reader)?.map_or(0, |it| it.legacy_code()))
}

// ╭──────────────────────────────────────────────────────────╮
// │ Legacy console key codes                                 │
// ╰──────────────────────────────────────────────────────────╯

pub mod legacy_codes {
    pub const NO_KEY: i32 = 0;
    pub const BACKSPACE: i32 = 8;
    pub const ENTER: i32 = 13;
    pub const ESC: i32 = 27;

    /// Extended keys are reported as `EXTENDED_OFFSET + scan code`.
    pub const EXTENDED_OFFSET: i32 = 1000;
    pub const EXTENDED_PREFIXES: [u32; 2] = [0x00, 0xE0];

    pub const SCAN_UP: u8 = 72;
    pub const SCAN_DOWN: u8 = 80;
    pub const SCAN_LEFT: u8 = 75;
    pub const SCAN_RIGHT: u8 = 77;
    pub const SCAN_HOME: u8 = 71;
    pub const SCAN_END: u8 = 79;
    pub const SCAN_PAGE_UP: u8 = 73;
    pub const SCAN_PAGE_DOWN: u8 = 81;
    pub const SCAN_INSERT: u8 = 82;
    pub const SCAN_DELETE: u8 = 83;
    /// F1 is 59, F10 is 68.
    pub const SCAN_F1: u8 = 59;
    pub const SCAN_F11: u8 = 133;
    pub const SCAN_F12: u8 = 134;

    #[must_use]
    pub fn is_extended_prefix(code: u32) -> bool { EXTENDED_PREFIXES.contains(&code) }
}

impl KeyPress {
    #[must_use]
    pub fn legacy_code(&self) -> i32 {
        use legacy_codes::{BACKSPACE, ENTER, ESC, EXTENDED_OFFSET, NO_KEY, SCAN_DOWN,
                           SCAN_LEFT, SCAN_RIGHT, SCAN_UP};
        match *self {
            KeyPress::Char(ch) => i32::try_from(u32::from(ch)).unwrap_or(NO_KEY),
            KeyPress::Enter => ENTER,
            KeyPress::Backspace => BACKSPACE,
            KeyPress::Esc => ESC,
            KeyPress::Up => EXTENDED_OFFSET + i32::from(SCAN_UP),
            KeyPress::Down => EXTENDED_OFFSET + i32::from(SCAN_DOWN),
            KeyPress::Left => EXTENDED_OFFSET + i32::from(SCAN_LEFT),
            KeyPress::Right => EXTENDED_OFFSET + i32::from(SCAN_RIGHT),
            KeyPress::Extended(scan_code) => EXTENDED_OFFSET + i32::from(scan_code),
            KeyPress::Noop => NO_KEY,
        }
    }

    /// Inverse of [`Self::legacy_code`]. Codes from 1000 to 1255 always decode as
    /// extended keys.
    #[must_use]
    pub fn from_legacy_code(code: i32) -> KeyPress {
        use legacy_codes::{BACKSPACE, ENTER, ESC, EXTENDED_OFFSET, NO_KEY};

        if let Some(scan_code) = code
            .checked_sub(EXTENDED_OFFSET)
            .and_then(|it| u8::try_from(it).ok())
        {
            return KeyPress::from_scan_code(scan_code);
        }

        match code {
            NO_KEY => KeyPress::Noop,
            ENTER => KeyPress::Enter,
            BACKSPACE => KeyPress::Backspace,
            ESC => KeyPress::Esc,
            _ => u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .map_or(KeyPress::Noop, KeyPress::Char),
        }
    }

    fn from_scan_code(scan_code: u8) -> KeyPress {
        use legacy_codes::{SCAN_DOWN, SCAN_LEFT, SCAN_RIGHT, SCAN_UP};
        match scan_code {
            SCAN_UP => KeyPress::Up,
            SCAN_DOWN => KeyPress::Down,
            SCAN_LEFT => KeyPress::Left,
            SCAN_RIGHT => KeyPress::Right,
            _ => KeyPress::Extended(scan_code),
        }
    }
}

// ╭──────────────────────────────────────────────────────────╮
// │ Crossterm                                                │
// ╰──────────────────────────────────────────────────────────╯

impl From<KeyEvent> for KeyPress {
    fn from(key_event: KeyEvent) -> Self {
        use legacy_codes::{SCAN_DELETE, SCAN_END, SCAN_F1, SCAN_F11, SCAN_F12, SCAN_HOME,
                           SCAN_INSERT, SCAN_PAGE_DOWN, SCAN_PAGE_UP};

        let KeyEvent {
            code, modifiers, ..
        } = key_event;

        match code {
            KeyCode::Enter => KeyPress::Enter,
            KeyCode::Backspace => KeyPress::Backspace,
            KeyCode::Esc => KeyPress::Esc,
            KeyCode::Up => KeyPress::Up,
            KeyCode::Down => KeyPress::Down,
            KeyCode::Left => KeyPress::Left,
            KeyCode::Right => KeyPress::Right,
            KeyCode::Tab => KeyPress::Char('\t'),
            KeyCode::Char(ch) if modifiers.contains(KeyModifiers::CONTROL) => {
                // Ctrl+A is 1, ..., Ctrl+Z is 26.
                u8::try_from(ch)
                    .ok()
                    .filter(u8::is_ascii_alphabetic)
                    .map_or(KeyPress::Noop, |byte| KeyPress::Char(char::from(byte & 0x1f)))
            }
            KeyCode::Char(ch) => KeyPress::Char(ch),
            KeyCode::Home => KeyPress::Extended(SCAN_HOME),
            KeyCode::End => KeyPress::Extended(SCAN_END),
            KeyCode::PageUp => KeyPress::Extended(SCAN_PAGE_UP),
            KeyCode::PageDown => KeyPress::Extended(SCAN_PAGE_DOWN),
            KeyCode::Insert => KeyPress::Extended(SCAN_INSERT),
            KeyCode::Delete => KeyPress::Extended(SCAN_DELETE),
            KeyCode::F(n @ 1..=10) => KeyPress::Extended(SCAN_F1 + n - 1),
            KeyCode::F(11) => KeyPress::Extended(SCAN_F11),
            KeyCode::F(12) => KeyPress::Extended(SCAN_F12),
            _ => KeyPress::Noop,
        }
    }
}

/// Only key presses (and repeats) count, releases and other events are skipped.
fn key_press_from_event(event: &Event) -> Option<KeyPress> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            Some(KeyPress::from(*key_event))
        }
        _ => None,
    }
}

/// Reads the terminal through crossterm. Raw mode has to be enabled by the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> ConsoleResult<KeyPress> {
        loop {
            let event = crossterm::event::read().map_err(ConsoleError::Read)?;
            if let Some(key_press) = key_press_from_event(&event) {
                tracing::trace!(message = "read key", ?key_press);
                return Ok(key_press);
            }
        }
    }

    fn try_read_key_press(&mut self) -> ConsoleResult<Option<KeyPress>> {
        while crossterm::event::poll(Duration::ZERO).map_err(ConsoleError::Read)? {
            let event = crossterm::event::read().map_err(ConsoleError::Read)?;
            if let Some(key_press) = key_press_from_event(&event) {
                tracing::trace!(message = "polled key", ?key_press);
                return Ok(Some(key_press));
            }
        }
        Ok(None)
    }
}

// ╭──────────────────────────────────────────────────────────╮
// │ Legacy code stream                                       │
// ╰──────────────────────────────────────────────────────────╯

/// Decodes console key codes. `0x00` or `0xE0` followed by a scan code is one extended
/// key, any other code is a key on its own (a Unicode scalar value, Enter, Backspace or
/// Esc). Since `0xE0` is always a prefix, `'à'` can't be typed through this reader.
///
/// A key is "waiting" for [`KeyPressReader::try_read_key_press`] whenever the
/// underlying iterator has more codes.
#[derive(Debug)]
pub struct LegacyCodeKeyPressReader<I: Iterator<Item = u32>> {
    codes: Peekable<I>,
}

impl<I: Iterator<Item = u32>> LegacyCodeKeyPressReader<I> {
    pub fn new(codes: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            codes: codes.into_iter().peekable(),
        }
    }

    fn decode_next(&mut self) -> Option<KeyPress> {
        let code = self.codes.next()?;
        if legacy_codes::is_extended_prefix(code) {
            let scan_code = self.codes.next()?;
            return Some(
                u8::try_from(scan_code).map_or(KeyPress::Noop, KeyPress::from_scan_code),
            );
        }
        Some(i32::try_from(code).map_or(KeyPress::Noop, KeyPress::from_legacy_code))
    }
}

impl<I: Iterator<Item = u32>> KeyPressReader for LegacyCodeKeyPressReader<I> {
    fn read_key_press(&mut self) -> ConsoleResult<KeyPress> {
        self.decode_next().ok_or(ConsoleError::InputExhausted)
    }

    fn try_read_key_press(&mut self) -> ConsoleResult<Option<KeyPress>> {
        Ok(self.decode_next())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test_case(KeyCode::Enter, KeyModifiers::NONE, KeyPress::Enter)]
    #[test_case(KeyCode::Backspace, KeyModifiers::NONE, KeyPress::Backspace)]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE, KeyPress::Esc)]
    #[test_case(KeyCode::Left, KeyModifiers::NONE, KeyPress::Left)]
    #[test_case(KeyCode::Char('ç'), KeyModifiers::NONE, KeyPress::Char('ç'))]
    #[test_case(KeyCode::Char('A'), KeyModifiers::SHIFT, KeyPress::Char('A'))]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyPress::Char('\x03'))]
    #[test_case(KeyCode::Home, KeyModifiers::NONE, KeyPress::Extended(71))]
    #[test_case(KeyCode::F(1), KeyModifiers::NONE, KeyPress::Extended(59))]
    #[test_case(KeyCode::F(10), KeyModifiers::NONE, KeyPress::Extended(68))]
    #[test_case(KeyCode::F(12), KeyModifiers::NONE, KeyPress::Extended(134))]
    #[test_case(KeyCode::CapsLock, KeyModifiers::NONE, KeyPress::Noop)]
    fn test_from_key_event(code: KeyCode, modifiers: KeyModifiers, expected: KeyPress) {
        assert_eq!(KeyPress::from(key_event(code, modifiers)), expected);
    }

    #[test]
    fn release_events_are_skipped() {
        let mut release = key_event(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_press_from_event(&Event::Key(release)), None);
        assert_eq!(key_press_from_event(&Event::FocusGained), None);
    }

    #[test_case(KeyPress::Enter, 13)]
    #[test_case(KeyPress::Backspace, 8)]
    #[test_case(KeyPress::Esc, 27)]
    #[test_case(KeyPress::Char('a'), 97)]
    #[test_case(KeyPress::Char('€'), 0x20AC)]
    #[test_case(KeyPress::Up, 1072)]
    #[test_case(KeyPress::Down, 1080)]
    #[test_case(KeyPress::Left, 1075)]
    #[test_case(KeyPress::Right, 1077)]
    #[test_case(KeyPress::Extended(83), 1083)]
    #[test_case(KeyPress::Noop, 0)]
    fn test_legacy_code(key_press: KeyPress, code: i32) {
        assert_eq!(key_press.legacy_code(), code);
        assert_eq!(KeyPress::from_legacy_code(code), key_press);
    }

    #[test]
    fn legacy_stream_decodes_prefixes() {
        let mut reader =
            LegacyCodeKeyPressReader::new([0xE0_u32, 72, 0x00, 80, 0xE0, 71, 13, 0x20AC, 27]);
        let mut keys = vec![];
        while let Some(key) = reader.try_read_key_press().unwrap() {
            keys.push(key);
        }
        assert_eq!(
            keys,
            vec![
                KeyPress::Up,
                KeyPress::Down,
                KeyPress::Extended(71),
                KeyPress::Enter,
                KeyPress::Char('€'),
                KeyPress::Esc,
            ]
        );
        assert!(matches!(
            reader.read_key_press(),
            Err(ConsoleError::InputExhausted)
        ));
    }

    #[test]
    fn poll_key_code_reports_zero_when_idle() {
        let mut reader = LegacyCodeKeyPressReader::new([0xE0_u32, 77]);
        assert_eq!(poll_key_code(&mut reader).unwrap(), 1077);
        assert_eq!(poll_key_code(&mut reader).unwrap(), 0);
    }
}
