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

use crate::board::{
    legal_destinations_from, Board, BoardError, Coord, Destinations, Piece, Rules, Team,
};

/// A completed move, as reported back to the caller of `cell_tapped`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

/// What a tap did to the game.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapOutcome {
    /// One of the current team's pieces is now selected.
    Selected(Coord),
    /// The selected piece moved and the turn passed to the other team.
    Moved(Move),
    /// The tap was not a legal destination; the selection was dropped.
    Cancelled,
    /// Nothing changed.
    Ignored,
}

/// The board plus whose turn it is and which cell, if any, is selected.
///
/// All changes go through `cell_tapped`. Illegal taps are never errors:
/// at most they clear the selection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_team: Team,
    selected: Option<Coord>,
    rules: Rules,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self::from_position(Board::standard(), Team::White, rules)
    }

    /// Starts from an arbitrary position with nothing selected.
    pub fn from_position(board: Board, current_team: Team, rules: Rules) -> Self {
        Self {
            board,
            current_team,
            selected: None,
            rules,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
    #[inline]
    pub fn current_team(&self) -> Team {
        self.current_team
    }
    #[inline]
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }
    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn piece_at(&self, coord: Coord) -> Result<Option<Piece>> {
        self.board.piece_at(coord)
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.board.occupied_cells()
    }

    /// `true` if `coord` holds a piece of the team to move.
    pub fn is_friendly(&self, coord: Coord) -> bool {
        coord.is_inbounds()
            && matches!(self.board[coord], Some(piece) if piece.team() == self.current_team)
    }

    /// `true` if `coord` holds a piece of the team not to move.
    pub fn is_enemy(&self, coord: Coord) -> bool {
        coord.is_inbounds()
            && matches!(self.board[coord], Some(piece) if piece.team() != self.current_team)
    }

    /// Destinations for the selected piece. Fails with
    /// `BoardError::InvalidState` when nothing is selected.
    pub fn legal_destinations(&self) -> Result<Destinations> {
        let from = self.selected.ok_or(BoardError::InvalidState)?;
        legal_destinations_from(&self.board, from, &self.rules)
    }

    /// Used to highlight cells; `false` when nothing is selected.
    pub fn is_legal_destination(&self, coord: Coord) -> bool {
        self.legal_destinations()
            .map(|destinations| destinations.contains(coord))
            .unwrap_or(false)
    }

    pub fn cell_tapped(&mut self, coord: Coord) -> TapOutcome {
        let team = self.current_team;
        if !coord.is_inbounds() {
            tracing::debug!(%team, %coord, "ignored tap off the board");
            return TapOutcome::Ignored;
        }
        if self.is_friendly(coord) {
            self.selected = Some(coord);
            tracing::debug!(%team, %coord, "selected piece");
            return TapOutcome::Selected(coord);
        }
        let Some(from) = self.selected else {
            tracing::debug!(%team, %coord, "ignored tap with nothing selected");
            return TapOutcome::Ignored;
        };
        let destinations = self.legal_destinations().unwrap_or_default();
        self.selected = None;
        // A restored snapshot may carry a selection that is off the board.
        let piece = match self.board.piece_at(from).ok().flatten() {
            Some(piece) if piece.team() == team && destinations.contains(coord) => piece,
            _ => {
                tracing::debug!(%team, %from, to = %coord, "cancelled selection");
                return TapOutcome::Cancelled;
            }
        };
        let captured = self.board.move_piece(from, coord);
        self.current_team = !team;
        tracing::debug!(%team, %from, to = %coord, ?captured, "moved piece");
        // No win or draw detection: play continues until the caller stops.
        TapOutcome::Moved(Move {
            from,
            to: coord,
            piece,
            captured,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.current_team(), Team::White);
        assert_eq!(state.selected(), None);
        assert_eq!(state.board(), &Board::standard());
        assert_eq!(state.rules(), &Rules::STANDARD);
    }
    #[test]
    fn test_select_own_piece() {
        let mut state = GameState::new();
        let outcome = state.cell_tapped(Coord::new(6, 4));
        assert_eq!(outcome, TapOutcome::Selected(Coord::new(6, 4)));
        assert_eq!(state.selected(), Some(Coord::new(6, 4)));
    }
    #[test]
    fn test_cannot_select_enemy_piece() {
        let mut state = GameState::new();
        assert_eq!(state.cell_tapped(Coord::new(1, 4)), TapOutcome::Ignored);
        assert_eq!(state.selected(), None);
    }
    #[test]
    fn test_tap_empty_without_selection() {
        let mut state = GameState::new();
        assert_eq!(state.cell_tapped(Coord::new(4, 4)), TapOutcome::Ignored);
        assert_eq!(state, GameState::new());
    }
    #[test]
    fn test_reselect_replaces_selection() {
        let mut state = GameState::new();
        state.cell_tapped(Coord::new(6, 4));
        let outcome = state.cell_tapped(Coord::new(7, 1));
        assert_eq!(outcome, TapOutcome::Selected(Coord::new(7, 1)));
        assert_eq!(state.selected(), Some(Coord::new(7, 1)));
        assert_eq!(state.board(), &Board::standard());
        assert_eq!(state.current_team(), Team::White);
    }
    #[test]
    fn test_legal_destinations_of_selection() {
        let mut state = GameState::new();
        state.cell_tapped(Coord::new(6, 4));
        let destinations = state.legal_destinations().unwrap();
        assert_eq!(destinations.as_slice(), [Coord::new(5, 4)]);
        assert!(state.is_legal_destination(Coord::new(5, 4)));
        assert!(!state.is_legal_destination(Coord::new(5, 3)));
    }
    #[test]
    fn test_legal_destinations_without_selection() {
        let state = GameState::new();
        let err = state.legal_destinations().unwrap_err();
        assert_eq!(err.downcast_ref::<BoardError>(), Some(&BoardError::InvalidState));
        assert!(!state.is_legal_destination(Coord::new(5, 4)));
    }
    #[test]
    fn test_move_flips_turn() {
        let mut state = GameState::new();
        state.cell_tapped(Coord::new(6, 4));
        let outcome = state.cell_tapped(Coord::new(5, 4));
        assert_eq!(
            outcome,
            TapOutcome::Moved(Move {
                from: Coord::new(6, 4),
                to: Coord::new(5, 4),
                piece: Piece::WP,
                captured: None,
            })
        );
        assert_eq!(state.piece_at(Coord::new(6, 4)).unwrap(), None);
        assert_eq!(state.piece_at(Coord::new(5, 4)).unwrap(), Some(Piece::WP));
        assert_eq!(state.current_team(), Team::Black);
        assert_eq!(state.selected(), None);
    }
    #[test]
    fn test_illegal_destination_cancels() {
        let mut state = GameState::new();
        state.cell_tapped(Coord::new(6, 4));
        assert_eq!(state.cell_tapped(Coord::new(3, 4)), TapOutcome::Cancelled);
        assert_eq!(state.selected(), None);
        assert_eq!(state.board(), &Board::standard());
        assert_eq!(state.current_team(), Team::White);
    }
    #[test]
    fn test_enemy_piece_not_in_reach_cancels() {
        let mut state = GameState::new();
        state.cell_tapped(Coord::new(6, 4));
        assert_eq!(state.cell_tapped(Coord::new(1, 4)), TapOutcome::Cancelled);
        assert_eq!(state.board(), &Board::standard());
    }
    #[test]
    fn test_off_board_tap_is_ignored() {
        let mut state = GameState::new();
        state.cell_tapped(Coord::new(6, 4));
        assert_eq!(state.cell_tapped(Coord::new(8, 4)), TapOutcome::Ignored);
        assert_eq!(state.selected(), Some(Coord::new(6, 4)));
    }
    #[test]
    fn test_black_cannot_move_first() {
        let mut state = GameState::new();
        state.cell_tapped(Coord::new(1, 4));
        state.cell_tapped(Coord::new(2, 4));
        assert_eq!(state.board(), &Board::standard());
        assert_eq!(state.current_team(), Team::White);
    }
    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new();
        let taps: [((isize, isize), (isize, isize)); 4] = [
            ((6, 4), (5, 4)),
            ((1, 3), (2, 3)),
            ((7, 3), (3, 7)),
            ((0, 6), (2, 5)),
        ];
        let mut expected = Team::White;
        for (from, to) in taps {
            assert_eq!(state.current_team(), expected);
            state.cell_tapped(from.into());
            assert!(matches!(state.cell_tapped(to.into()), TapOutcome::Moved(_)));
            expected = !expected;
        }
        assert_eq!(state.current_team(), Team::White);
        assert_eq!(state.piece_at(Coord::new(3, 7)).unwrap(), Some(Piece::WQ));
        assert_eq!(state.piece_at(Coord::new(2, 5)).unwrap(), Some(Piece::BN));
    }
    #[test]
    fn test_capture() {
        let board = Board::empty()
            .set_contents(Coord::new(4, 0), Some(Piece::WR))
            .set_contents(Coord::new(4, 6), Some(Piece::BB));
        let mut state = GameState::from_position(board, Team::White, Rules::default());
        state.cell_tapped(Coord::new(4, 0));
        let outcome = state.cell_tapped(Coord::new(4, 6));
        assert_eq!(
            outcome,
            TapOutcome::Moved(Move {
                from: Coord::new(4, 0),
                to: Coord::new(4, 6),
                piece: Piece::WR,
                captured: Some(Piece::BB),
            })
        );
        assert_eq!(state.occupied_cells().collect::<Vec<_>>(), [Coord::new(4, 6)]);
    }
    #[test]
    fn test_friendly_and_enemy() {
        let state = GameState::new();
        assert!(state.is_friendly(Coord::new(7, 0)));
        assert!(!state.is_friendly(Coord::new(0, 0)));
        assert!(state.is_enemy(Coord::new(0, 0)));
        assert!(!state.is_enemy(Coord::new(4, 4)));
        assert!(!state.is_friendly(Coord::new(9, 9)));
    }
    #[test]
    fn test_step_only_rules_limit_sliding() {
        let board = Board::empty().set_contents(Coord::new(7, 0), Some(Piece::WR));
        let rules = Rules {
            sliding: false,
            ..Rules::default()
        };
        let mut state = GameState::from_position(board, Team::White, rules);
        state.cell_tapped(Coord::new(7, 0));
        assert_eq!(state.cell_tapped(Coord::new(4, 0)), TapOutcome::Cancelled);
        state.cell_tapped(Coord::new(7, 0));
        assert!(matches!(state.cell_tapped(Coord::new(6, 0)), TapOutcome::Moved(_)));
    }
    #[test]
    fn test_snapshot_round_trip() {
        let mut state = GameState::new();
        state.cell_tapped(Coord::new(6, 4));
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
    #[test]
    fn test_friendly_capture_destination_reselects() {
        let rules = Rules {
            friendly_capture: true,
            ..Rules::default()
        };
        let mut state = GameState::with_rules(rules);
        state.cell_tapped(Coord::new(7, 4));
        assert!(state.is_legal_destination(Coord::new(6, 4)));
        let outcome = state.cell_tapped(Coord::new(6, 4));
        assert_eq!(outcome, TapOutcome::Selected(Coord::new(6, 4)));
        assert_eq!(state.board(), &Board::standard());
        assert_eq!(state.current_team(), Team::White);
    }
    #[test]
    fn test_off_board_selection_in_snapshot_cancels() {
        let mut state = GameState::new();
        state.cell_tapped(Coord::new(6, 4));
        let mut json = serde_json::to_value(&state).unwrap();
        json["selected"] = serde_json::json!({"row": 9, "col": 4});
        let mut restored: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(restored.selected(), Some(Coord::new(9, 4)));
        assert_eq!(restored.cell_tapped(Coord::new(4, 4)), TapOutcome::Cancelled);
        assert_eq!(restored.selected(), None);
        assert_eq!(restored.board(), &Board::standard());
        assert_eq!(restored.current_team(), Team::White);
    }
    #[test]
    fn test_rules_defaults_when_fields_missing() {
        let rules: Rules = serde_json::from_str(r#"{"sliding": false}"#).unwrap();
        assert!(!rules.sliding);
        assert!(!rules.friendly_capture);
        assert!(serde_json::from_str::<Rules>(r#"{"slide": true}"#).is_err());
    }
}
