//! Board coordinates shared by the board model, reach tables, and tap input.
//!
//! A location is a `(row, col)` pair with both components in `0..8`. Row 0 is
//! Black's home rank and row 7 is White's.

use crate::game_state::chess_rules::BOARD_SIZE;

pub type BoardLocation = (usize, usize);

/// Returns true when both components fall inside the 8x8 grid.
#[inline]
pub const fn is_on_board(location: BoardLocation) -> bool {
    location.0 < BOARD_SIZE && location.1 < BOARD_SIZE
}

/// Flattens a location into a `0..64` square index (`row * 8 + col`).
///
/// This is the bit position used by the reach tables in `moves`.
#[inline]
pub const fn square_index(location: BoardLocation) -> usize {
    location.0 * BOARD_SIZE + location.1
}

/// Inverse of `square_index`.
#[inline]
pub const fn location_of(square: usize) -> BoardLocation {
    (square / BOARD_SIZE, square % BOARD_SIZE)
}

/// Signed `(d_row, d_col)` offset travelled from `from` to `to`.
#[inline]
pub const fn location_delta(from: BoardLocation, to: BoardLocation) -> (i32, i32) {
    (to.0 as i32 - from.0 as i32, to.1 as i32 - from.1 as i32)
}
