//! Rule constants for the starting layout and turn order.

use crate::game_state::chess_types::{Color, PieceKind};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 8;

/// Back-rank order, column 0 through 7, used for both sides' home rows.
pub const BACK_RANK_ORDER: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
];

pub const BLACK_BACK_RANK_ROW: usize = 0;
pub const BLACK_PAWN_ROW: usize = 1;
pub const WHITE_PAWN_ROW: usize = 6;
pub const WHITE_BACK_RANK_ROW: usize = 7;

/// Black moves first.
pub const STARTING_TURN: Color = Color::Black;

/// Pieces per side in the starting layout.
pub const PIECES_PER_SIDE: usize = 2 * BOARD_SIZE;
