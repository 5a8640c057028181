//! Rook reach table: any other square on the same row or the same column.

use crate::board_location::BoardLocation;
use crate::moves::reach::{table_contains, trace_ray_const};

pub const ROOK_REACH: [u64; 64] = generate_rook_reach();

#[inline]
pub const fn rook_reach(square: u8) -> u64 {
    ROOK_REACH[square as usize]
}

#[inline]
pub fn rook_can_reach(from: BoardLocation, to: BoardLocation) -> bool {
    table_contains(&ROOK_REACH, from, to)
}

const fn generate_rook_reach() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 0, 1);
        rays |= trace_ray_const(sq_i, 0, -1);
        rays |= trace_ray_const(sq_i, 1, 0);
        rays |= trace_ray_const(sq_i, -1, 0);

        table[sq] = rays;
        sq += 1;
    }

    table
}
