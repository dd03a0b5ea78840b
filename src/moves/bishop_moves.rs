use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::moves::move_shared::push_ray_moves;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn generate_bishop_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(board, from, piece, &BISHOP_DIRECTIONS, out);
}
