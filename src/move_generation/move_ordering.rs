//! Capture-first move ordering.
//!
//! Moves are stably sorted by the value of the piece they capture, highest
//! first. Quiet moves keep their generation order behind all captures, so the
//! ordering only changes traversal order and never which moves exist.

use crate::moves::chess_move::Move;
use crate::search::board_scoring::piece_value;

#[inline]
pub fn capture_value(mv: &Move) -> i32 {
    mv.piece_captured.map_or(0, |piece| piece_value(piece.kind))
}

pub fn order_by_capture_value(moves: &mut [Move]) {
    moves.sort_by_key(|mv| std::cmp::Reverse(capture_value(mv)));
}
