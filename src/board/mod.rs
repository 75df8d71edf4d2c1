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

//! Chess board and per-piece movement rules
//!
//! A _board_ holds the contents of the 64 cells of a chess board. It
//! has no notion of whose turn it is; that lives in `GameState`. The
//! following rules are supported:
//!
//! [x] Standard starting layout
//! [x] Pawn advance and diagonal capture
//! [x] Sliding moves for rooks, bishops and queens
//! [x] Single-step king moves and knight jumps
//! [ ] Pawn double advance
//! [ ] Check and checkmate
//! [ ] Castling
//! [ ] En passant
//! [ ] Pawn promotion
//!
//! Some of the key abstractions include:
//!
//! * A `Coord` addresses a single cell by row and column. Row 0 is
//!   black's back rank and row 7 is white's. Coordinates outside the
//!   board can be built but are rejected with `BoardError::OutOfBounds`
//!   by every checked query.
//!
//! * A `Piece` is a `PieceKind` owned by a `Team`. Each kind has a
//!   fixed list of `MovePrototype`s: a direction, whether the piece may
//!   capture along it and whether it may repeat the step (slide).
//!
//! * `legal_destinations_from` runs the same walk over every prototype
//!   of a piece, so there is one move generator for all kinds and the
//!   kinds differ only in their data.
//!

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use strum::IntoEnumIterator;
use thiserror::Error;

mod material;
mod moves;
mod square;

pub use material::*;
pub use moves::*;
pub use square::*;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("Coordinate {0} is off the board")]
    OutOfBounds(Coord),
    #[error("No piece is selected")]
    InvalidState,
}

/// The 8x8 grid of cells, each either empty or holding one piece.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Pawns on the rows next to each back rank, back ranks in
    /// `PieceKind::BACK_ROW` order.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for team in Team::iter() {
            for (col, kind) in PieceKind::BACK_ROW.into_iter().enumerate() {
                let col = col as isize;
                board[Coord::new(team.pawn_row(), col)] = Some(Piece::new(team, PieceKind::Pawn));
                board[Coord::new(team.back_row(), col)] = Some(Piece::new(team, kind));
            }
        }
        board
    }

    /// Replaces the contents of a cell. Intended for setting up positions.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    pub fn set_contents(mut self, coord: Coord, contents: Option<Piece>) -> Self {
        self[coord] = contents;
        self
    }

    pub fn piece_at(&self, coord: Coord) -> Result<Option<Piece>> {
        let coord = coord.ensure_inbounds()?;
        Ok(self[coord])
    }

    /// Occupied cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |coord| self[*coord].is_some())
    }

    pub fn count(&self, team: Team) -> usize {
        self.occupied_cells()
            .filter(|coord| matches!(self[*coord], Some(piece) if piece.team() == team))
            .count()
    }

    /// Moves whatever is at `from` onto `to` and returns what was captured
    /// there. No legality checks are made.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is off the board.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let moving = self[from].take();
        let captured = std::mem::replace(&mut self[to], moving);
        tracing::trace!(%from, %to, ?moving, ?captured, "moved piece");
        captured
    }
}

impl Index<Coord> for Board {
    type Output = Option<Piece>;
    fn index(&self, coord: Coord) -> &Self::Output {
        debug_assert!(coord.is_inbounds());
        &self.cells[coord.row as usize][coord.col as usize]
    }
}

impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        debug_assert!(coord.is_inbounds());
        &mut self.cells[coord.row as usize][coord.col as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(piece) => piece.to_string(),
                    None => "--".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
