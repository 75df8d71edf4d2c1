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

//! Chess rules for a tap-driven board
//!
//! The presentation layer reports which cell was tapped and this crate
//! decides whether that selects a piece, moves the selected piece or
//! drops the selection. It owns the board and whose turn it is but does
//! no rendering and keeps no history.
//!
//! ```
//! use tap_chess::*;
//!
//! let mut state = new_game();
//! cell_tapped(&mut state, Coord::new(6, 4));
//! assert!(legal_destinations(&state).unwrap().contains(Coord::new(5, 4)));
//! cell_tapped(&mut state, Coord::new(5, 4));
//! assert_eq!(state.current_team(), Team::Black);
//! ```

use anyhow::Result;

mod board;
mod game;

pub use board::*;
pub use game::*;

pub fn new_game() -> GameState {
    GameState::new()
}

pub fn cell_tapped(state: &mut GameState, coord: Coord) -> TapOutcome {
    state.cell_tapped(coord)
}

pub fn piece_at(state: &GameState, coord: Coord) -> Result<Option<Piece>> {
    state.piece_at(coord)
}

pub fn occupied_cells(state: &GameState) -> impl Iterator<Item = Coord> + '_ {
    state.occupied_cells()
}

pub fn legal_destinations(state: &GameState) -> Result<Destinations> {
    state.legal_destinations()
}
