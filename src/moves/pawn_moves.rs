//! Pawn pushes.
//!
//! Only forward steps are generated: one step onto an empty cell, and a double
//! step from the starting row when both cells ahead are empty. Diagonal
//! captures, en-passant and promotion are not modelled.

use crate::game_state::chess_rules::{pawn_forward, pawn_start_row};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let forward = pawn_forward(piece.color);

    let Some(one_step) = from.offset(forward, 0) else {
        return;
    };
    if board.piece_at(one_step).is_some() {
        return;
    }
    out.push(Move::with_pieces(from, one_step, piece, None));

    if from.row != pawn_start_row(piece.color) {
        return;
    }
    if let Some(two_step) = from.offset(2 * forward, 0) {
        if board.piece_at(two_step).is_none() {
            out.push(Move::with_pieces(from, two_step, piece, None));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn pawn_targets(board: &Board, square: &str) -> Vec<String> {
        let from = algebraic_to_square(square).expect("square should parse");
        let pawn = board.piece_at(from).expect("pawn on square");
        let mut out = Vec::new();
        generate_pawn_moves(board, from, pawn, &mut out);
        out.iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn pawns_on_start_rows_step_once_or_twice() {
        let board = Board::new_game();
        assert_eq!(pawn_targets(&board, "e2"), vec!["e2e3", "e2e4"]);
        assert_eq!(pawn_targets(&board, "d7"), vec!["d7d6", "d7d5"]);
    }

    #[test]
    fn blocked_pawn_does_not_move_or_capture() {
        let mut board = Board::new_game();
        let e3 = algebraic_to_square("e3").expect("e3 should parse");
        let d3 = algebraic_to_square("d3").expect("d3 should parse");
        board.set_piece(e3, Some(Piece::new(Color::Black, PieceKind::Knight)));
        board.set_piece(d3, Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(pawn_targets(&board, "e2").is_empty());
    }

    #[test]
    fn double_step_needs_both_cells_empty() {
        let mut board = Board::new_game();
        let e4 = algebraic_to_square("e4").expect("e4 should parse");
        board.set_piece(e4, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(pawn_targets(&board, "e2"), vec!["e2e3"]);
    }

    #[test]
    fn pawn_on_last_row_has_no_moves() {
        let mut board = Board::new_empty();
        let e8 = algebraic_to_square("e8").expect("e8 should parse");
        board.set_piece(e8, Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(pawn_targets(&board, "e8").is_empty());
    }
}
