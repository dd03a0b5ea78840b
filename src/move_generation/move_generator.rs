//! Pseudo-legal move generation for the side to move.
//!
//! Moves obey each piece's movement pattern and never land on a friendly
//! piece, but leaving one's own king in check is not filtered out. Output
//! order is row-major over the board (a8 first), then the per-piece direction
//! order, so identical positions always yield identical move lists.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

pub trait MoveGenerator: Send + Sync {
    /// All candidate moves for `board.side_to_move`. An empty list means the
    /// position is terminal.
    fn generate_moves(&self, board: &Board) -> Vec<Move>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, board: &Board) -> Vec<Move> {
        let mut out = Vec::with_capacity(48);
        generate_pseudo_legal_moves(board, &mut out);
        out
    }
}

/// Append every pseudo-legal move for the side to move to `out`.
pub fn generate_pseudo_legal_moves(board: &Board, out: &mut Vec<Move>) {
    let side = board.side_to_move;
    for (from, piece) in board.pieces() {
        if piece.color == side {
            generate_piece_moves(board, from, piece, out);
        }
    }
}

#[inline]
fn generate_piece_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, out),
        PieceKind::King => generate_king_moves(board, from, piece, out),
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveGenerator, PseudoLegalMoveGenerator};
    use crate::game_state::chess_types::*;
    use crate::utils::layout_parser::parse_fen;

    #[test]
    fn starting_position_has_twenty_moves_for_each_side() {
        let mut board = Board::new_game();
        let gen = PseudoLegalMoveGenerator;

        let white = gen.generate_moves(&board);
        assert_eq!(white.len(), 20);
        assert!(white
            .iter()
            .all(|mv| matches!(mv.piece_moved.kind, PieceKind::Pawn | PieceKind::Knight)));

        board.side_to_move = Color::Black;
        assert_eq!(gen.generate_moves(&board).len(), 20);
    }

    #[test]
    fn generation_is_row_major_from_the_top() {
        let board = Board::new_game();
        let moves = PseudoLegalMoveGenerator.generate_moves(&board);
        let names: Vec<String> = moves.iter().take(4).map(|mv| mv.to_string()).collect();
        assert_eq!(names, vec!["a2a3", "a2a4", "b2b3", "b2b4"]);
        assert_eq!(moves.last().map(|mv| mv.to_string()), Some("g1h3".to_owned()));
    }

    #[test]
    fn no_moves_for_side_without_pieces() {
        let board = parse_fen("8/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert!(PseudoLegalMoveGenerator.generate_moves(&board).is_empty());
    }

    #[test]
    fn captures_record_the_captured_piece() {
        let board = parse_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        let moves = PseudoLegalMoveGenerator.generate_moves(&board);
        let capture = moves
            .iter()
            .find(|mv| mv.is_capture())
            .expect("rook should capture the queen");
        assert_eq!(capture.to_string(), "d1d5");
        assert_eq!(
            capture.piece_captured,
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }
}
