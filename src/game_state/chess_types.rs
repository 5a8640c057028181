//! Core value types for the board model.
//!
//! Every board cell holds exactly one `Piece`. Unoccupied cells hold a piece
//! of kind `Empty` with color `None`; occupied cells always carry `White` or
//! `Black`.

use crate::board_location::BoardLocation;

/// Side a piece belongs to. `None` is reserved for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
    None,
}

impl Color {
    /// The other side. `None` has no opposite and maps to itself.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::None => Color::None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
            Color::None => "None",
        }
    }
}

/// Piece kind, including the first-class `Empty` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Bishop,
    Knight,
    King,
    Queen,
    Empty,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Bishop => 2,
            PieceKind::Knight => 3,
            PieceKind::King => 4,
            PieceKind::Queen => 5,
            PieceKind::Empty => 6,
        }
    }

    /// Unicode chess glyph for this kind on the given side.
    ///
    /// Empty cells (and any kind paired with `Color::None`) render as a space.
    pub const fn symbol(self, color: Color) -> char {
        match (self, color) {
            (PieceKind::Pawn, Color::Black) => '♟',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::King, Color::Black) => '♚',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::Queen, Color::White) => '♕',
            _ => ' ',
        }
    }
}

/// A board cell's occupant.
///
/// `position` always matches the cell holding the piece; `Board::apply_move`
/// keeps it in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: BoardLocation,
    pub selected: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, position: BoardLocation) -> Self {
        Self {
            kind,
            color,
            position,
            selected: false,
        }
    }

    #[inline]
    pub const fn empty(position: BoardLocation) -> Self {
        Self::new(PieceKind::Empty, Color::None, position)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    #[inline]
    pub const fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }
}
