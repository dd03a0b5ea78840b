use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::moves::move_shared::push_offset_moves;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_offset_moves(board, from, piece, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn knight_in_centre_has_eight_targets() {
        let mut board = Board::new_empty();
        let d4 = algebraic_to_square("d4").expect("d4 should parse");
        let knight = Piece::new(Color::White, PieceKind::Knight);
        board.set_piece(d4, Some(knight));

        let mut out = Vec::new();
        generate_knight_moves(&board, d4, knight, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_on_b1_skips_own_pawn_on_d2() {
        let board = Board::new_game();
        let b1 = algebraic_to_square("b1").expect("b1 should parse");
        let knight = board.piece_at(b1).expect("knight on b1");

        let mut out = Vec::new();
        generate_knight_moves(&board, b1, knight, &mut out);
        let targets: Vec<String> = out.iter().map(|mv| mv.to_string()).collect();
        assert_eq!(targets, vec!["b1a3", "b1c3"]);
    }
}
