//! Stepping and ray-casting helpers shared by the per-piece generators.

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Push one move per offset that lands on the board on an empty or enemy cell.
pub fn push_offset_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        let target = board.piece_at(to);
        if target.is_none_or(|other| other.color != piece.color) {
            out.push(Move::with_pieces(from, to, piece, target));
        }
    }
}

/// Walk each direction until the edge, stopping before a friendly piece and
/// on (including) an enemy piece.
pub fn push_ray_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => out.push(Move::with_pieces(from, to, piece, None)),
                Some(other) if other.color != piece.color => {
                    out.push(Move::with_pieces(from, to, piece, Some(other)));
                    break;
                }
                Some(_) => break,
            }
            current = to;
        }
    }
}
