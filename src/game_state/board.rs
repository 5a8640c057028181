//! The 8x8 board model.
//!
//! `Board` is a passive data holder: it builds the starting layout, answers
//! lookups, and overwrites cells when told to move a piece. It never checks
//! legality; callers (the turn controller) validate first.

use crate::board_location::BoardLocation;
use crate::game_state::chess_rules::{
    BACK_RANK_ORDER, BLACK_BACK_RANK_ROW, BLACK_PAWN_ROW, BOARD_SIZE, WHITE_BACK_RANK_ROW,
    WHITE_PAWN_ROW,
};
use crate::game_state::chess_types::{Color, Piece, PieceKind};

/// Read-only view of one cell, as consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    pub kind: PieceKind,
    pub color: Color,
    pub selected: bool,
}

/// Detached copy of the whole grid for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub cells: [[SquareView; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardSnapshot {
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> SquareView {
        self.cells[row][col]
    }

    /// Location of the highlighted cell, if any.
    pub fn selected_location(&self) -> Option<BoardLocation> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .find(|&(row, col)| self.cells[row][col].selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Piece; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::setup()
    }
}

impl Board {
    /// Deterministic starting layout: Black home rows 0-1, four empty rows,
    /// White home rows 6-7.
    pub fn setup() -> Self {
        let squares = [
            generate_back_rank(Color::Black, BLACK_BACK_RANK_ROW),
            generate_pawn_row(Color::Black, BLACK_PAWN_ROW),
            generate_empty_row(2),
            generate_empty_row(3),
            generate_empty_row(4),
            generate_empty_row(5),
            generate_pawn_row(Color::White, WHITE_PAWN_ROW),
            generate_back_rank(Color::White, WHITE_BACK_RANK_ROW),
        ];
        Self { squares }
    }

    /// Returns the piece stored at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is outside `0..8`; callers only emit
    /// in-range taps.
    #[inline]
    pub fn piece_at(&self, row: usize, col: usize) -> Piece {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "board coordinate ({row}, {col}) out of range"
        );
        self.squares[row][col]
    }

    /// Mutable access to a cell, used to toggle the selection flag.
    #[inline]
    pub(crate) fn piece_at_mut(&mut self, row: usize, col: usize) -> &mut Piece {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "board coordinate ({row}, {col}) out of range"
        );
        &mut self.squares[row][col]
    }

    /// Unconditionally moves `moving_piece` to `to` and leaves an empty cell
    /// at `from`. Whatever occupied `to` is discarded.
    pub fn apply_move(&mut self, from: BoardLocation, to: BoardLocation, moving_piece: Piece) {
        let mut placed = moving_piece;
        placed.position = to;
        *self.piece_at_mut(to.0, to.1) = placed;
        *self.piece_at_mut(from.0, from.1) = Piece::empty(from);
    }

    /// Number of cells occupied by `color`.
    pub fn count_color(&self, color: Color) -> usize {
        self.pieces().filter(|piece| piece.color == color).count()
    }

    /// Iterates all 64 cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flat_map(|row| row.iter())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut cells = [[SquareView {
            kind: PieceKind::Empty,
            color: Color::None,
            selected: false,
        }; BOARD_SIZE]; BOARD_SIZE];

        for (row, rank) in self.squares.iter().enumerate() {
            for (col, piece) in rank.iter().enumerate() {
                cells[row][col] = SquareView {
                    kind: piece.kind,
                    color: piece.color,
                    selected: piece.selected,
                };
            }
        }

        BoardSnapshot { cells }
    }
}

/// Home row of major pieces in `BACK_RANK_ORDER`.
pub fn generate_back_rank(color: Color, row: usize) -> [Piece; BOARD_SIZE] {
    let mut pieces = [Piece::empty((row, 0)); BOARD_SIZE];
    for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
        pieces[col] = Piece::new(*kind, color, (row, col));
    }
    pieces
}

pub fn generate_pawn_row(color: Color, row: usize) -> [Piece; BOARD_SIZE] {
    let mut pieces = [Piece::empty((row, 0)); BOARD_SIZE];
    for (col, piece) in pieces.iter_mut().enumerate() {
        *piece = Piece::new(PieceKind::Pawn, color, (row, col));
    }
    pieces
}

pub fn generate_empty_row(row: usize) -> [Piece; BOARD_SIZE] {
    let mut pieces = [Piece::empty((row, 0)); BOARD_SIZE];
    for (col, piece) in pieces.iter_mut().enumerate() {
        *piece = Piece::empty((row, col));
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_rules::{BACK_RANK_ORDER, PIECES_PER_SIDE};
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn setup_has_sixteen_pieces_per_side() {
        let board = Board::setup();
        assert_eq!(board.count_color(Color::Black), PIECES_PER_SIDE);
        assert_eq!(board.count_color(Color::White), PIECES_PER_SIDE);
        assert_eq!(board.count_color(Color::None), 32);
        assert_eq!(board.pieces().count(), 64);
    }

    #[test]
    fn setup_back_ranks_follow_fixed_order() {
        let board = Board::setup();
        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            assert_eq!(board.piece_at(0, col).kind, *kind);
            assert_eq!(board.piece_at(0, col).color, Color::Black);
            assert_eq!(board.piece_at(7, col).kind, *kind);
            assert_eq!(board.piece_at(7, col).color, Color::White);
        }
        assert_eq!(board.piece_at(0, 3).kind, PieceKind::King);
        assert_eq!(board.piece_at(0, 4).kind, PieceKind::Queen);
    }

    #[test]
    fn setup_middle_rows_are_empty() {
        let board = Board::setup();
        for row in 2..6 {
            for col in 0..8 {
                let piece = board.piece_at(row, col);
                assert_eq!(piece.kind, PieceKind::Empty);
                assert_eq!(piece.color, Color::None);
            }
        }
    }

    #[test]
    fn setup_positions_match_cells_and_nothing_is_selected() {
        let board = Board::setup();
        for row in 0..8 {
            for col in 0..8 {
                let piece = board.piece_at(row, col);
                assert_eq!(piece.position, (row, col));
                assert!(!piece.selected);
            }
        }
    }

    #[test]
    fn setup_is_idempotent() {
        assert_eq!(Board::setup(), Board::setup());
    }

    #[test]
    fn apply_move_relocates_and_empties_origin() {
        let mut board = Board::setup();
        let pawn = board.piece_at(6, 0);
        board.apply_move((6, 0), (5, 0), pawn);

        let moved = board.piece_at(5, 0);
        assert_eq!(moved.kind, PieceKind::Pawn);
        assert_eq!(moved.color, Color::White);
        assert_eq!(moved.position, (5, 0));
        assert_eq!(board.piece_at(6, 0), Piece::empty((6, 0)));
    }

    #[test]
    fn apply_move_discards_destination_occupant() {
        let mut board = Board::setup();
        let rook = board.piece_at(7, 0);
        board.apply_move((7, 0), (1, 0), rook);

        assert_eq!(board.piece_at(1, 0).kind, PieceKind::Rook);
        assert_eq!(board.piece_at(1, 0).color, Color::White);
        assert_eq!(board.count_color(Color::Black), 15);
        assert_eq!(board.count_color(Color::White), 16);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn piece_at_rejects_out_of_range_rows() {
        Board::setup().piece_at(8, 0);
    }

    #[test]
    fn snapshot_mirrors_cells() {
        let board = Board::setup();
        let snapshot = board.snapshot();
        assert_eq!(snapshot.cell(0, 0).kind, PieceKind::Rook);
        assert_eq!(snapshot.cell(6, 3).color, Color::White);
        assert_eq!(snapshot.cell(4, 4).kind, PieceKind::Empty);
        assert_eq!(snapshot.selected_location(), None);
    }
}
