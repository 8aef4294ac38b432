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

//! Screen coordinates and box sizes.
//!
//! [`Pos`] is 1-based, the same as the terminal's cursor position escape sequence.
//! [`Size`] is the interior of a box, in visible columns and rows, and does not include
//! the border.
//!
//! ```
//! use glyphbox_tuify::{Pos, Size, col, height, row, width};
//!
//! let pos: Pos = col(2) + row(5);
//! let size: Size = width(20) + height(3);
//! assert_eq!(pos, Pos { col: 2, row: 5 });
//! assert_eq!(size, Size { width: 20, height: 3 });
//! ```

use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub col: usize,
    pub row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColIndex(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowIndex(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColWidth(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHeight(pub usize);

#[must_use]
pub fn col(it: usize) -> ColIndex { ColIndex(it) }

#[must_use]
pub fn row(it: usize) -> RowIndex { RowIndex(it) }

#[must_use]
pub fn width(it: usize) -> ColWidth { ColWidth(it) }

#[must_use]
pub fn height(it: usize) -> RowHeight { RowHeight(it) }

impl Add<RowIndex> for ColIndex {
    type Output = Pos;
    fn add(self, rhs: RowIndex) -> Pos {
        Pos {
            col: self.0,
            row: rhs.0,
        }
    }
}

impl Add<ColIndex> for RowIndex {
    type Output = Pos;
    fn add(self, rhs: ColIndex) -> Pos { rhs + self }
}

impl Add<RowHeight> for ColWidth {
    type Output = Size;
    fn add(self, rhs: RowHeight) -> Size {
        Size {
            width: self.0,
            height: rhs.0,
        }
    }
}

impl Add<ColWidth> for RowHeight {
    type Output = Size;
    fn add(self, rhs: ColWidth) -> Size { rhs + self }
}

impl Pos {
    /// Same column, `offset` rows further down.
    #[must_use]
    pub fn down(self, offset: usize) -> Pos {
        Pos {
            col: self.col,
            row: self.row + offset,
        }
    }

    /// Same row, `offset` columns further right.
    #[must_use]
    pub fn right(self, offset: usize) -> Pos {
        Pos {
            col: self.col + offset,
            row: self.row,
        }
    }
}
