//! Square and move conversions for algebraic coordinates.
//!
//! Row 0 is rank 8 and column 0 is file a, so the mapping is a fixed pair of
//! lookup tables rather than arithmetic on a square index.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Board, Square};
use crate::moves::chess_move::Move;

/// Rank character for each row, top row first.
const ROWS_TO_RANKS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// File character for each column.
const COLS_TO_FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

#[inline]
fn rank_to_row(rank: char) -> ChessResult<u8> {
    ROWS_TO_RANKS
        .iter()
        .position(|&r| r == rank)
        .map(|row| row as u8)
        .ok_or(ChessError::InvalidAlgebraicChar(rank))
}

#[inline]
fn file_to_col(file: char) -> ChessResult<u8> {
    COLS_TO_FILES
        .iter()
        .position(|&f| f == file)
        .map(|col| col as u8)
        .ok_or(ChessError::InvalidAlgebraicChar(file))
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    };
    Ok(Square::new(rank_to_row(rank)?, file_to_col(file)?))
}

/// Convert a square to algebraic notation (for example: "e4").
///
/// The square must be on the board.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(COLS_TO_FILES[square.col as usize]);
    out.push(ROWS_TO_RANKS[square.row as usize]);
    out
}

/// Read two-square notation (for example: "g1f3") against `board`, filling in
/// the moved and captured pieces from the current position.
pub fn notation_to_move(notation: &str, board: &Board) -> ChessResult<Move> {
    if !notation.is_ascii() || notation.len() != 4 {
        return Err(ChessError::InvalidAlgebraicString(notation.to_owned()));
    }
    let from = algebraic_to_square(&notation[..2])?;
    let to = algebraic_to_square(&notation[2..])?;
    Move::new(from, to, board).ok_or_else(|| ChessError::InvalidAlgebraicString(notation.to_owned()))
}
