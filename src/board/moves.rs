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
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use strum::IntoEnumIterator;

use super::material::{PieceKind, Team};
use super::square::{Coord, Offset};
use super::Board;

use PieceKind::*;

/// Whether a prototype may end on an occupied cell.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capture {
    /// Only empty cells.
    Forbidden,
    /// Empty cells or a capture.
    Allowed,
    /// Only a capture.
    Required,
}

impl Capture {
    #[inline]
    pub fn can_capture(&self) -> bool {
        !matches!(*self, Capture::Forbidden)
    }
    #[inline]
    pub fn can_move_to_empty(&self) -> bool {
        !matches!(*self, Capture::Required)
    }
}

/// One direction a kind of piece may travel.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovePrototype {
    pub offset: Offset,
    pub capture: Capture,
    pub sliding: bool,
}

impl MovePrototype {
    pub const fn new(offset: Offset, capture: Capture, sliding: bool) -> Self {
        Self {
            offset,
            capture,
            sliding,
        }
    }

    const fn step(offset: Offset) -> Self {
        Self::new(offset, Capture::Allowed, false)
    }

    const fn slide(offset: Offset) -> Self {
        Self::new(offset, Capture::Allowed, true)
    }

    /// Prototypes are written from white's point of view; black's
    /// rows run the other way.
    pub const fn oriented(self, team: Team) -> Self {
        match team {
            Team::White => self,
            Team::Black => Self::new(self.offset.flip_rows(), self.capture, self.sliding),
        }
    }
}

const STRAIGHTS: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
];

const DIAGONALS: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
];

const KNIGHT_JUMPS: [Offset; 4] = [
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(-2, 1),
    Offset::new(-2, -1),
];

const PAWN_MOVES: [MovePrototype; 3] = [
    MovePrototype::new(Offset::new(-1, 0), Capture::Forbidden, false),
    MovePrototype::new(Offset::new(-1, -1), Capture::Required, false),
    MovePrototype::new(Offset::new(-1, 1), Capture::Required, false),
];

static CATALOG: Lazy<[Vec<MovePrototype>; 6]> = Lazy::new(|| {
    let all_lines = || STRAIGHTS.into_iter().chain(DIAGONALS);
    let mut catalog: [Vec<MovePrototype>; 6] = Default::default();
    for kind in PieceKind::iter() {
        catalog[kind.to_index()] = match kind {
            Pawn => PAWN_MOVES.to_vec(),
            Rook => STRAIGHTS.into_iter().map(MovePrototype::slide).collect(),
            Bishop => DIAGONALS.into_iter().map(MovePrototype::slide).collect(),
            Queen => all_lines().map(MovePrototype::slide).collect(),
            King => all_lines().map(MovePrototype::step).collect(),
            Knight => KNIGHT_JUMPS
                .into_iter()
                .chain(KNIGHT_JUMPS.into_iter().map(Offset::transpose))
                .map(MovePrototype::step)
                .collect(),
        };
    }
    catalog
});

impl PieceKind {
    /// Movement prototypes for this kind, in the order they are evaluated.
    pub fn prototypes(&self) -> &'static [MovePrototype] {
        &CATALOG[self.to_index()]
    }
}

/// Selects which movement semantics the validator applies.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// Walk sliding prototypes until blocked. When `false` every
    /// prototype is evaluated for a single step only.
    pub sliding: bool,
    /// Allow capture-permitted prototypes to land on a friendly piece.
    ///
    /// This only widens `legal_destinations`. `GameState::cell_tapped`
    /// treats a tap on a friendly piece as a new selection, so such a
    /// destination can be highlighted but never moved to.
    pub friendly_capture: bool,
}

impl Rules {
    pub const STANDARD: Self = Self {
        sliding: true,
        friendly_capture: false,
    };
}

impl Default for Rules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Legal destination cells, in prototype order. Never contains duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destinations(Vec<Coord>);

impl Destinations {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.0.iter()
    }
    pub fn as_slice(&self) -> &[Coord] {
        &self.0
    }
    fn push(&mut self, coord: Coord) {
        debug_assert!(!self.contains(coord));
        self.0.push(coord);
    }
}

impl Index<usize> for Destinations {
    type Output = Coord;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Destinations {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Cells the piece at `from` may move to. An empty cell yields no
/// destinations.
pub fn legal_destinations_from(board: &Board, from: Coord, rules: &Rules) -> Result<Destinations> {
    let mut result = Destinations::default();
    let Some(piece) = board.piece_at(from)? else {
        return Ok(result);
    };
    let team = piece.team();
    for prototype in piece.kind().prototypes() {
        let prototype = if piece.kind().is_directional() {
            prototype.oriented(team)
        } else {
            *prototype
        };
        let repeat = prototype.sliding && rules.sliding;
        let mut to = from + prototype.offset;
        while to.is_inbounds() {
            match board[to] {
                None => {
                    if !prototype.capture.can_move_to_empty() {
                        break;
                    }
                    result.push(to);
                }
                Some(occupant) => {
                    let friendly = occupant.team() == team;
                    if prototype.capture.can_capture() && (!friendly || rules.friendly_capture) {
                        result.push(to);
                    }
                    break;
                }
            }
            if !repeat {
                break;
            }
            to += prototype.offset;
        }
    }
    Ok(result)
}
