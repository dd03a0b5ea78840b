use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::moves::move_shared::push_offset_moves;

/// The eight neighbouring cells, also used by king-safety scoring.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_offset_moves(board, from, piece, &KING_OFFSETS, out);
}
