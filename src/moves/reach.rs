//! Kind-dispatched reachability.
//!
//! Each piece kind owns a precomputed 64-entry table of destination masks
//! (bit `row * 8 + col`). Tables are purely geometric: they ignore every
//! other piece on the board, so they do not distinguish moves from captures
//! and never account for blocking.

use crate::board_location::{is_on_board, square_index, BoardLocation};
use crate::game_state::chess_types::PieceKind;
use crate::moves::bishop_moves::{bishop_can_reach, BISHOP_REACH};
use crate::moves::king_moves::{king_can_reach, KING_REACH};
use crate::moves::knight_moves::{knight_can_reach, KNIGHT_REACH};
use crate::moves::pawn_moves::{pawn_can_reach, PAWN_REACH};
use crate::moves::queen_moves::{queen_can_reach, QUEEN_REACH};
use crate::moves::rook_moves::{rook_can_reach, ROOK_REACH};

/// Whether a piece of `kind` standing on `from` may land on `to`.
///
/// `Empty` is never the source of a move.
#[inline]
pub fn can_reach(kind: PieceKind, from: BoardLocation, to: BoardLocation) -> bool {
    match kind {
        PieceKind::Pawn => pawn_can_reach(from, to),
        PieceKind::Rook => rook_can_reach(from, to),
        PieceKind::Bishop => bishop_can_reach(from, to),
        PieceKind::Knight => knight_can_reach(from, to),
        PieceKind::King => king_can_reach(from, to),
        PieceKind::Queen => queen_can_reach(from, to),
        PieceKind::Empty => false,
    }
}

/// Reach tables in `PieceKind::index` order; `Empty` maps to an all-zero table.
pub const REACH_TABLES: [[u64; 64]; 7] = [
    PAWN_REACH,
    ROOK_REACH,
    BISHOP_REACH,
    KNIGHT_REACH,
    KING_REACH,
    QUEEN_REACH,
    [0u64; 64],
];

/// Full destination mask for `kind` from `from`.
#[inline]
pub fn reach_mask(kind: PieceKind, from: BoardLocation) -> u64 {
    REACH_TABLES[kind.index()][square_index(from)]
}

/// Tests the `to` bit of a reach table entry for `from`.
#[inline]
pub(crate) fn table_contains(table: &[u64; 64], from: BoardLocation, to: BoardLocation) -> bool {
    debug_assert!(is_on_board(from) && is_on_board(to));
    (table[square_index(from)] & location_mask(to)) != 0
}

#[inline]
pub(crate) const fn location_mask(location: BoardLocation) -> u64 {
    1u64 << square_index(location)
}

/// Single-bit mask for `(row, col)`, or zero when it falls off the board.
pub(crate) const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (col as usize);
    1u64 << square
}

/// Every on-board square walked from `square` in steps of `(row_step, col_step)`.
pub(crate) const fn trace_ray_const(square: i32, row_step: i32, col_step: i32) -> u64 {
    let mut row = (square / 8) + row_step;
    let mut col = (square % 8) + col_step;
    let mut reach = 0u64;

    while row >= 0 && row < 8 && col >= 0 && col < 8 {
        reach |= 1u64 << (row * 8 + col) as usize;
        row += row_step;
        col += col_step;
    }

    reach
}
