//! Terminal-oriented Unicode board renderer.
//!
//! Turns a `BoardSnapshot` into text for the interactive loop and the demo
//! command. Row 0 (Black's home rank) is printed first.

use crate::game_state::board::BoardSnapshot;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, PieceKind};

/// Shade of a board tile; `(row + col)` even is light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileShade {
    Light,
    Dark,
}

#[inline]
pub const fn tile_shade(row: usize, col: usize) -> TileShade {
    if (row + col) % 2 == 0 {
        TileShade::Light
    } else {
        TileShade::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_coordinates: bool,
    /// Drawn on both sides of the selected cell.
    pub highlight: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_coordinates: true,
            highlight: '*',
        }
    }
}

/// Render the board to a Unicode string, three columns per cell.
///
/// Empty light tiles show `·`, empty dark tiles show `:`.
pub fn render_board(snapshot: &BoardSnapshot, options: &RenderOptions) -> String {
    let mut out = String::new();

    if options.show_coordinates {
        out.push_str("  ");
        for col in 0..BOARD_SIZE {
            out.push(' ');
            out.push(char::from(b'0' + col as u8));
            out.push(' ');
        }
        out.push('\n');
    }

    for row in 0..BOARD_SIZE {
        if options.show_coordinates {
            out.push(char::from(b'0' + row as u8));
            out.push(' ');
        }

        for col in 0..BOARD_SIZE {
            let cell = snapshot.cell(row, col);
            let glyph = match cell.kind {
                PieceKind::Empty => match tile_shade(row, col) {
                    TileShade::Light => '·',
                    TileShade::Dark => ':',
                },
                kind => kind.symbol(cell.color),
            };
            let edge = if cell.selected { options.highlight } else { ' ' };

            out.push(edge);
            out.push(glyph);
            out.push(edge);
        }

        out.push('\n');
    }

    out
}

/// One-line turn indicator.
pub fn render_turn(turn: Color) -> String {
    format!("{} to move", turn.name())
}
