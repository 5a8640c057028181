//! Parsing of typed taps such as `6 0` or `6,0` into board locations.
//!
//! This is the validation step the presentation layer owes the engine: only
//! in-range squares get through to `GameSession::select_square`.

use crate::board_location::{is_on_board, BoardLocation};
use crate::chess_errors::{ChessErrors, ChessResult};

/// Parse `"<row> <col>"`, `"<row>,<col>"` or `"<row>, <col>"`.
pub fn parse_tap(input: &str) -> ChessResult<BoardLocation> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ChessErrors::InvalidTapString(input.trim().to_owned()));
    };

    let row = row
        .parse::<i64>()
        .map_err(|_| ChessErrors::InvalidTapString(input.trim().to_owned()))?;
    let col = col
        .parse::<i64>()
        .map_err(|_| ChessErrors::InvalidTapString(input.trim().to_owned()))?;

    if row < 0 || col < 0 || !is_on_board((row as usize, col as usize)) {
        return Err(ChessErrors::TapOutOfRange((row, col)));
    }

    Ok((row as usize, col as usize))
}
