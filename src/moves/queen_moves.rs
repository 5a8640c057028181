//! Queen reach table: union of rook and bishop reach.

use crate::board_location::BoardLocation;
use crate::moves::bishop_moves::BISHOP_REACH;
use crate::moves::reach::table_contains;
use crate::moves::rook_moves::ROOK_REACH;

pub const QUEEN_REACH: [u64; 64] = generate_queen_reach();

#[inline]
pub const fn queen_reach(square: u8) -> u64 {
    QUEEN_REACH[square as usize]
}

#[inline]
pub fn queen_can_reach(from: BoardLocation, to: BoardLocation) -> bool {
    table_contains(&QUEEN_REACH, from, to)
}

const fn generate_queen_reach() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = BISHOP_REACH[sq] | ROOK_REACH[sq];
        sq += 1;
    }

    table
}
