//! Turn and selection state machine.
//!
//! The controller is the only active component: it interprets a tapped
//! square against the board, decides between selecting, moving, or doing
//! nothing, applies moves through `Board::apply_move`, and flips the turn.
//! The current selection is held as a board location, never as a copy of the
//! piece, so the board stays the single source of truth for piece data.

use log::{debug, trace};

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_TURN;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::reach::can_reach;

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selecting(BoardLocation),
}

/// Why a tap left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Nothing selected and the tapped square is not the mover's piece.
    NotMoversPiece,
    /// The selected piece cannot reach the tapped square.
    Unreachable,
}

/// What a single tap did. Informational only; an ignored tap is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected(BoardLocation),
    SelectionSwitched {
        from: BoardLocation,
        to: BoardLocation,
    },
    Moved {
        from: BoardLocation,
        to: BoardLocation,
        captured: Option<PieceKind>,
    },
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnController {
    turn: Color,
    selected: Option<BoardLocation>,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    pub fn new() -> Self {
        Self {
            turn: STARTING_TURN,
            selected: None,
        }
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selected(&self) -> Option<BoardLocation> {
        self.selected
    }

    pub fn state(&self) -> SelectionState {
        match self.selected {
            Some(location) => SelectionState::Selecting(location),
            None => SelectionState::Idle,
        }
    }

    /// Processes one tap on `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when `(row, col)` is off the board.
    pub fn handle_selection(
        &mut self,
        board: &mut Board,
        row: usize,
        col: usize,
    ) -> SelectionOutcome {
        let target = board.piece_at(row, col);

        if target.color == self.turn {
            return self.select(board, (row, col), target.kind);
        }

        let Some(from) = self.selected else {
            trace!(
                "tap ({row}, {col}) ignored: nothing selected and not {}'s piece",
                self.turn.name()
            );
            return SelectionOutcome::Ignored(IgnoreReason::NotMoversPiece);
        };

        let mover = board.piece_at(from.0, from.1);
        if !can_reach(mover.kind, mover.position, target.position) {
            trace!(
                "tap ({row}, {col}) ignored: {:?} at {:?} cannot reach it",
                mover.kind,
                mover.position
            );
            return SelectionOutcome::Ignored(IgnoreReason::Unreachable);
        }

        let captured = (!target.is_empty()).then_some(target.kind);
        let mut moving = mover;
        moving.selected = false;
        board.apply_move(from, target.position, moving);
        self.selected = None;

        debug!(
            "{} {:?} {:?} -> {:?}{}",
            self.turn.name(),
            mover.kind,
            from,
            target.position,
            captured.map(|kind| format!(" captures {kind:?}")).unwrap_or_default()
        );
        self.turn = self.turn.opposite();

        SelectionOutcome::Moved {
            from,
            to: target.position,
            captured,
        }
    }

    /// Selects the mover's own piece at `location`, replacing any previous
    /// selection so that at most one cell carries the flag.
    fn select(
        &mut self,
        board: &mut Board,
        location: BoardLocation,
        kind: PieceKind,
    ) -> SelectionOutcome {
        if kind == PieceKind::Empty {
            return SelectionOutcome::Ignored(IgnoreReason::NotMoversPiece);
        }

        let previous = self.selected.take();
        if let Some(prev) = previous {
            board.piece_at_mut(prev.0, prev.1).selected = false;
        }
        board.piece_at_mut(location.0, location.1).selected = true;
        self.selected = Some(location);

        match previous {
            Some(prev) if prev != location => {
                debug!("{} switches selection {prev:?} -> {location:?}", self.turn.name());
                SelectionOutcome::SelectionSwitched {
                    from: prev,
                    to: location,
                }
            }
            _ => {
                debug!("{} selects {kind:?} at {location:?}", self.turn.name());
                SelectionOutcome::Selected(location)
            }
        }
    }
}
