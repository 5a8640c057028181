//! Bishop reach table: any square sharing a diagonal, i.e. `|d_col| == |d_row|`
//! with `d_row != 0`.

use crate::board_location::BoardLocation;
use crate::moves::reach::{table_contains, trace_ray_const};

pub const BISHOP_REACH: [u64; 64] = generate_bishop_reach();

#[inline]
pub const fn bishop_reach(square: u8) -> u64 {
    BISHOP_REACH[square as usize]
}

#[inline]
pub fn bishop_can_reach(from: BoardLocation, to: BoardLocation) -> bool {
    table_contains(&BISHOP_REACH, from, to)
}

const fn generate_bishop_reach() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 1, 1);
        rays |= trace_ray_const(sq_i, -1, 1);
        rays |= trace_ray_const(sq_i, 1, -1);
        rays |= trace_ray_const(sq_i, -1, -1);

        table[sq] = rays;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{bishop_can_reach, bishop_reach};

    #[test]
    fn bishop_reach_from_center_and_corner() {
        // (3,3) sees 13 diagonal squares, (0,0) sees the 7 on the long diagonal.
        assert_eq!(bishop_reach(27).count_ones(), 13);
        assert_eq!(bishop_reach(0).count_ones(), 7);
    }

    #[test]
    fn bishop_moves_along_both_diagonals() {
        assert!(bishop_can_reach((7, 2), (2, 7)));
        assert!(bishop_can_reach((7, 2), (5, 0)));
        assert!(bishop_can_reach((0, 1), (6, 7)));
    }

    #[test]
    fn bishop_rejects_straight_lines() {
        assert!(!bishop_can_reach((7, 2), (6, 2)));
        assert!(!bishop_can_reach((7, 2), (7, 5)));
        assert!(!bishop_can_reach((7, 2), (5, 3)));
    }
}
