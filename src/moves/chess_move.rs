//! Single-ply move value.
//!
//! A `Move` records the start and end squares together with the piece that
//! moved and whatever stood on the destination beforehand, which is exactly
//! what `Board::undo` needs to restore the position.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Cell,
}

impl Move {
    /// Build a move by reading both squares from `board`. Returns `None` when
    /// the start square is empty.
    #[inline]
    pub fn new(from: Square, to: Square, board: &Board) -> Option<Self> {
        let piece_moved = board.piece_at(from)?;
        Some(Self::with_pieces(from, to, piece_moved, board.piece_at(to)))
    }

    #[inline]
    pub const fn with_pieces(from: Square, to: Square, piece_moved: Piece, piece_captured: Cell) -> Self {
        Self {
            from,
            to,
            piece_moved,
            piece_captured,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Two-square notation such as `e2e4`.
    pub fn notation(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn notation_uses_file_and_rank() {
        let board = Board::new_game();
        let e2 = algebraic_to_square("e2").expect("e2 should parse");
        let e4 = algebraic_to_square("e4").expect("e4 should parse");
        let mv = Move::new(e2, e4, &board).expect("e2 is occupied");

        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(mv.piece_moved, Piece::new(Color::White, PieceKind::Pawn));
        assert!(!mv.is_capture());
    }

    #[test]
    fn new_from_empty_square_is_none() {
        let board = Board::new_game();
        let e4 = algebraic_to_square("e4").expect("e4 should parse");
        let e5 = algebraic_to_square("e5").expect("e5 should parse");
        assert_eq!(Move::new(e4, e5, &board), None);
    }
}
