//! Knight reach table.
//!
//! Only the wide L is reachable: one row and two columns away. The tall L
//! (two rows, one column) is deliberately absent.

use crate::board_location::{location_delta, location_of, BoardLocation};
use crate::moves::reach::table_contains;

pub const KNIGHT_REACH: [u64; 64] = generate_knight_reach();

#[inline]
pub const fn knight_reach(square: u8) -> u64 {
    KNIGHT_REACH[square as usize]
}

#[inline]
pub fn knight_can_reach(from: BoardLocation, to: BoardLocation) -> bool {
    table_contains(&KNIGHT_REACH, from, to)
}

const fn generate_knight_reach() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut reach = 0u64;
        let mut target = 0usize;

        while target < 64 {
            let (d_row, d_col) = location_delta(location_of(sq), location_of(target));
            if d_row.abs() == 1 && d_col.abs() == 2 {
                reach |= 1u64 << target;
            }
            target += 1;
        }

        table[sq] = reach;
        sq += 1;
    }

    table
}
