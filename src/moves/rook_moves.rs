use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::moves::move_shared::push_ray_moves;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_rook_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(board, from, piece, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let mut board = Board::new_empty();
        let d4 = algebraic_to_square("d4").expect("d4 should parse");
        let rook = Piece::new(Color::White, PieceKind::Rook);
        board.set_piece(d4, Some(rook));

        let mut out = Vec::new();
        generate_rook_moves(&board, d4, rook, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::new_empty();
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        let a4 = algebraic_to_square("a4").expect("a4 should parse");
        let c1 = algebraic_to_square("c1").expect("c1 should parse");
        let rook = Piece::new(Color::White, PieceKind::Rook);
        board.set_piece(a1, Some(rook));
        board.set_piece(a4, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.set_piece(c1, Some(Piece::new(Color::White, PieceKind::Bishop)));

        let mut out = Vec::new();
        generate_rook_moves(&board, a1, rook, &mut out);
        let targets: Vec<String> = out.iter().map(|mv| mv.to_string()).collect();
        // Up the a-file to the capture on a4, then b1 before the own bishop.
        assert_eq!(targets, vec!["a1a2", "a1a3", "a1a4", "a1b1"]);
        assert!(out[2].is_capture());
    }
}
