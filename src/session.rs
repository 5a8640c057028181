//! One game session: a board paired with its turn controller.
//!
//! `GameSession` is the surface the presentation layer talks to. It takes a
//! single input event (a tapped square) and offers two read models: a board
//! snapshot and the side to move. Sessions share nothing with each other;
//! `SharedGameSession` serializes access when a session must cross threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::info;

use crate::board_location::BoardLocation;
use crate::game_state::board::{Board, BoardSnapshot};
use crate::game_state::chess_types::Color;
use crate::turn_controller::{SelectionOutcome, TurnController};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    controller: TurnController,
}

impl GameSession {
    pub fn new() -> Self {
        info!("new session, {} to move", TurnController::new().current_turn().name());
        Self {
            board: Board::setup(),
            controller: TurnController::new(),
        }
    }

    /// Feeds one tap into the controller.
    ///
    /// # Panics
    ///
    /// Panics when `(row, col)` is off the board.
    pub fn select_square(&mut self, row: usize, col: usize) -> SelectionOutcome {
        self.controller.handle_selection(&mut self.board, row, col)
    }

    pub fn current_board(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.controller.current_turn()
    }

    #[inline]
    pub fn selected_square(&self) -> Option<BoardLocation> {
        self.controller.selected()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Back to the starting layout with Black to move.
    pub fn reset(&mut self) {
        info!("session reset");
        self.board = Board::setup();
        self.controller = TurnController::new();
    }
}

/// Cloneable handle that serializes access to one session.
#[derive(Debug, Clone, Default)]
pub struct SharedGameSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedGameSession {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(GameSession::new())),
        }
    }

    pub fn select_square(&self, row: usize, col: usize) -> SelectionOutcome {
        self.lock().select_square(row, col)
    }

    pub fn current_board(&self) -> BoardSnapshot {
        self.lock().current_board()
    }

    pub fn current_turn(&self) -> Color {
        self.lock().current_turn()
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Runs `f` with exclusive access, so a read-decide-tap sequence is atomic.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        f(&mut *self.lock())
    }

    // A panic mid-tap (out-of-range square) cannot leave a half-applied move:
    // the bounds check runs before any mutation, so a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::{GameSession, SharedGameSession};
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::turn_controller::SelectionOutcome;
    use std::thread;

    #[test]
    fn turn_alternates_after_each_move() {
        let mut session = GameSession::new();
        assert_eq!(session.current_turn(), Color::Black);

        session.select_square(1, 0);
        session.select_square(2, 0);
        assert_eq!(session.current_turn(), Color::White);

        session.select_square(6, 7);
        session.select_square(5, 7);
        assert_eq!(session.current_turn(), Color::Black);
    }

    #[test]
    fn same_color_destination_never_moves() {
        let mut session = GameSession::new();
        session.select_square(0, 0);
        let before = session.board().clone();
        session.select_square(1, 0);

        for row in 0..8 {
            for col in 0..8 {
                let (a, b) = (before.piece_at(row, col), session.board().piece_at(row, col));
                assert_eq!((a.kind, a.color, a.position), (b.kind, b.color, b.position));
            }
        }
        assert_eq!(session.selected_square(), Some((1, 0)));
        assert_eq!(session.current_turn(), Color::Black);
    }

    #[test]
    fn snapshot_shows_selection_highlight() {
        let mut session = GameSession::new();
        session.select_square(0, 4);
        let snapshot = session.current_board();
        assert!(snapshot.cell(0, 4).selected);
        assert_eq!(snapshot.cell(0, 4).kind, PieceKind::Queen);
        assert_eq!(snapshot.selected_location(), Some((0, 4)));
    }

    #[test]
    fn reset_restores_starting_layout() {
        let mut session = GameSession::new();
        session.select_square(1, 0);
        session.select_square(2, 0);
        session.reset();
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn shared_sessions_are_isolated() {
        let first = SharedGameSession::new();
        let second = SharedGameSession::new();

        first.select_square(1, 0);
        first.select_square(2, 0);

        assert_eq!(first.current_turn(), Color::White);
        assert_eq!(second.current_turn(), Color::Black);
        assert_eq!(second.current_board().cell(1, 0).kind, PieceKind::Pawn);

        second.select_square(1, 5);
        first.reset();
        assert_eq!(first.current_turn(), Color::Black);
        assert_eq!(first.current_board(), GameSession::new().current_board());
        assert_eq!(second.current_board().selected_location(), Some((1, 5)));
    }

    #[test]
    fn shared_session_serializes_taps_across_threads() {
        let shared = SharedGameSession::new();
        let handles: Vec<_> = (0..4usize)
            .map(|col| {
                let handle = shared.clone();
                thread::spawn(move || {
                    handle.with_session(|session| {
                        let (from_row, to_row) = match session.current_turn() {
                            Color::Black => (1, 2),
                            _ => (6, 5),
                        };
                        session.select_square(from_row, col);
                        session.select_square(to_row, col)
                    })
                })
            })
            .collect();

        let moved = handles
            .into_iter()
            .map(|h| h.join().expect("tap thread should not panic"))
            .filter(|outcome| matches!(outcome, SelectionOutcome::Moved { .. }))
            .count();

        assert_eq!(moved, 4);
        assert_eq!(shared.current_turn(), Color::Black);
        assert_eq!(shared.current_board().selected_location(), None);
    }
}
