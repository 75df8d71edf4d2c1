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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;
use strum_macros::Display;
use strum_macros::EnumIter;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    team: Team,
    kind: PieceKind,
}

impl Piece {
    pub const WK: Self = Self::white(King);
    pub const WQ: Self = Self::white(Queen);
    pub const WR: Self = Self::white(Rook);
    pub const WB: Self = Self::white(Bishop);
    pub const WN: Self = Self::white(Knight);
    pub const WP: Self = Self::white(Pawn);

    pub const BK: Self = Self::black(King);
    pub const BQ: Self = Self::black(Queen);
    pub const BR: Self = Self::black(Rook);
    pub const BB: Self = Self::black(Bishop);
    pub const BN: Self = Self::black(Knight);
    pub const BP: Self = Self::black(Pawn);

    #[inline]
    pub const fn new(team: Team, kind: PieceKind) -> Self {
        Self { team, kind }
    }

    #[inline]
    pub const fn white(kind: PieceKind) -> Self {
        Self::new(White, kind)
    }

    #[inline]
    pub const fn black(kind: PieceKind) -> Self {
        Self::new(Black, kind)
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }
}

/// Short name of the kind, upper-case for white and lower-case for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.to_string();
        match self.team {
            White => write!(f, "{}", name),
            Black => write!(f, "{}", name.to_lowercase()),
        }
    }
}

use Team::{Black, White};

/// `White` always moves first.
#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub const fn back_row(&self) -> isize {
        match self {
            White => 7,
            Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_row(&self) -> isize {
        match self {
            White => 6,
            Black => 1,
        }
    }
}

impl Default for Team {
    fn default() -> Self {
        White
    }
}

impl Not for Team {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            White => Black,
            Black => White,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PieceKind {
    #[strum(serialize = "Pa")]
    Pawn,
    #[strum(serialize = "Ro")]
    Rook,
    #[strum(serialize = "Kn")]
    Knight,
    #[strum(serialize = "Bi")]
    Bishop,
    #[strum(serialize = "Qu")]
    Queen,
    #[strum(serialize = "Ki")]
    King,
}
use PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};

impl PieceKind {
    /// Back rank order, read from column 0 to column 7 for either team.
    pub const BACK_ROW: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Kinds whose movement depends on which team owns the piece.
    #[inline]
    pub fn is_directional(&self) -> bool {
        matches!(*self, Pawn)
    }
}
