use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::chess_move::Move;
use crate::moves::move_shared::push_ray_moves;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Rook rays first, then bishop rays.
pub fn generate_queen_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(board, from, piece, &ROOK_DIRECTIONS, out);
    push_ray_moves(board, from, piece, &BISHOP_DIRECTIONS, out);
}
