// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use super::BoardError;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: isize = 8;

/// A cell on the board, addressed by row and column.
///
/// Row 0 is the second mover's back rank and row 7 is the first mover's.
/// A `Coord` can hold any pair of integers so that out-of-range input can be
/// represented and rejected; use `is_inbounds` or `ensure_inbounds` before
/// indexing.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    #[inline]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: isize, col: isize) -> Result<Self> {
        Self::new(row, col).ensure_inbounds()
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < 64);
        Self::new((index / 8) as isize, (index % 8) as isize)
    }

    #[inline]
    pub const fn is_inbounds(&self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    #[inline]
    pub fn ensure_inbounds(self) -> Result<Self> {
        if !self.is_inbounds() {
            return Err(BoardError::OutOfBounds(self).into());
        }
        Ok(self)
    }

    /// Every in-bounds cell in row-major order.
    pub fn all() -> impl DoubleEndedIterator<Item = Coord> + ExactSizeIterator {
        (0..64).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(isize, isize)> for Coord {
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub row: isize,
    pub col: isize,
}

impl Offset {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub const fn flip_rows(self) -> Self {
        Self::new(-self.row, self.col)
    }

    pub const fn transpose(self) -> Self {
        Self::new(self.col, self.row)
    }
}

// Unchecked: the result may fall off the board.
impl Add<Offset> for Coord {
    type Output = Coord;
    fn add(self, rhs: Offset) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign<Offset> for Coord {
    fn add_assign(&mut self, rhs: Offset) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

impl Sub for Coord {
    type Output = Offset;
    fn sub(self, rhs: Self) -> Self::Output {
        Offset::new(self.row - rhs.row, self.col - rhs.col)
    }
}
