//! Seeded random tap generator.
//!
//! Stands in for a user poking at the board. Taps are biased towards useful
//! squares (the mover's own pieces while idle, the selected piece's reach
//! while selecting) so a run actually plays moves, with a share of uniformly
//! random taps mixed in to exercise the ignore paths.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board_location::BoardLocation;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::moves::reach::reach_mask;
use crate::session::GameSession;
use crate::turn_controller::SelectionOutcome;

const FOCUSED_TAP_PROBABILITY: f64 = 0.8;

/// Tally of what a batch of taps did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TapStats {
    pub taps: u32,
    pub selections: u32,
    pub moves: u32,
    pub captures: u32,
    pub ignored: u32,
}

impl TapStats {
    pub fn report(&self) -> String {
        format!(
            "taps={} selections={} moves={} captures={} ignored={}",
            self.taps, self.selections, self.moves, self.captures, self.ignored
        )
    }

    fn record(&mut self, outcome: &SelectionOutcome) {
        self.taps += 1;
        match outcome {
            SelectionOutcome::Selected(_) | SelectionOutcome::SelectionSwitched { .. } => {
                self.selections += 1
            }
            SelectionOutcome::Moved { captured, .. } => {
                self.moves += 1;
                if captured.is_some() {
                    self.captures += 1;
                }
            }
            SelectionOutcome::Ignored(_) => self.ignored += 1,
        }
    }
}

pub struct RandomTapper {
    rng: StdRng,
}

impl RandomTapper {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks the next square to tap given the session's current state.
    pub fn next_tap(&mut self, session: &GameSession) -> BoardLocation {
        if self.rng.random_bool(FOCUSED_TAP_PROBABILITY) {
            let candidates = match session.selected_square() {
                Some(from) => {
                    let kind = session.board().piece_at(from.0, from.1).kind;
                    mask_locations(reach_mask(kind, from))
                }
                None => session
                    .board()
                    .pieces()
                    .filter(|piece| piece.color == session.current_turn())
                    .map(|piece| piece.position)
                    .collect(),
            };

            if !candidates.is_empty() {
                return candidates[self.rng.random_range(0..candidates.len())];
            }
        }

        (
            self.rng.random_range(0..BOARD_SIZE),
            self.rng.random_range(0..BOARD_SIZE),
        )
    }

    /// Feeds `taps` generated taps into `session`.
    pub fn drive(&mut self, session: &mut GameSession, taps: u32) -> TapStats {
        let mut stats = TapStats::default();
        for _ in 0..taps {
            let (row, col) = self.next_tap(session);
            let outcome = session.select_square(row, col);
            stats.record(&outcome);
        }
        stats
    }
}

fn mask_locations(mask: u64) -> Vec<BoardLocation> {
    (0..BOARD_SIZE * BOARD_SIZE)
        .filter(|square| (mask >> square) & 1 == 1)
        .map(|square| (square / BOARD_SIZE, square % BOARD_SIZE))
        .collect()
}
