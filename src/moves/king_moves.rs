//! King reach table.
//!
//! Built from three separate conditions: one row away in the same column,
//! one column away in the same row, or one row and one column away.

use crate::board_location::{location_delta, location_of, BoardLocation};
use crate::moves::reach::table_contains;

pub const KING_REACH: [u64; 64] = generate_king_reach();

#[inline]
pub const fn king_reach(square: u8) -> u64 {
    KING_REACH[square as usize]
}

#[inline]
pub fn king_can_reach(from: BoardLocation, to: BoardLocation) -> bool {
    table_contains(&KING_REACH, from, to)
}

const fn generate_king_reach() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut reach = 0u64;
        let mut target = 0usize;

        while target < 64 {
            let (d_row, d_col) = location_delta(location_of(sq), location_of(target));

            let vertical = d_row.abs() == 1 && d_col == 0;
            let horizontal = d_col.abs() == 1 && d_row == 0;
            let diagonal = d_col.abs() == 1 && d_row.abs() == 1;

            if vertical || horizontal || diagonal {
                reach |= 1u64 << target;
            }
            target += 1;
        }

        table[sq] = reach;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{king_can_reach, king_reach};

    #[test]
    fn king_reach_counts() {
        assert_eq!(king_reach(0).count_ones(), 3);
        assert_eq!(king_reach(27).count_ones(), 8);
        assert_eq!(king_reach(3).count_ones(), 5);
    }

    #[test]
    fn king_steps_one_square_any_direction() {
        assert!(king_can_reach((0, 3), (1, 3)));
        assert!(king_can_reach((0, 3), (0, 2)));
        assert!(king_can_reach((0, 3), (1, 4)));
    }

    #[test]
    fn king_rejects_two_square_steps() {
        assert!(!king_can_reach((0, 3), (2, 3)));
        assert!(!king_can_reach((0, 3), (0, 5)));
        assert!(!king_can_reach((0, 3), (2, 4)));
    }
}
