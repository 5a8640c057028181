//! Pawn reach table.
//!
//! A pawn steps exactly one row up or down within its column. Direction is
//! not tied to color and there is no diagonal capture.

use crate::board_location::BoardLocation;
use crate::moves::reach::{set_if_valid, table_contains};

pub const PAWN_REACH: [u64; 64] = generate_pawn_reach();

#[inline]
pub const fn pawn_reach(square: u8) -> u64 {
    PAWN_REACH[square as usize]
}

#[inline]
pub fn pawn_can_reach(from: BoardLocation, to: BoardLocation) -> bool {
    table_contains(&PAWN_REACH, from, to)
}

const fn generate_pawn_reach() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;

        table[sq] = set_if_valid(row + 1, col) | set_if_valid(row - 1, col);
        sq += 1;
    }

    table
}
