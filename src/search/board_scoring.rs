//! Static position evaluation.
//!
//! Scores are centipawns from white's point of view: positive favours white,
//! negative favours black. Scorers are pure functions of the board, including
//! its side-to-move flag, and never mutate it.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::king_moves::KING_OFFSETS;

/// Centipawn score, positive favours white.
pub type Score = i32;

/// Window bound and checkmate sentinel. Dominates any reachable material
/// total and negates without overflow.
pub const SCORE_INFINITY: Score = 1_000_000_000;

/// Piece values indexed by `PieceKind::index()`.
const PIECE_VALUES: [Score; 6] = [
    100,     // pawn
    330,     // knight
    350,     // bishop
    500,     // rook
    900,     // queen
    100_000, // king, never traded
];

#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.index()]
}

pub trait BoardScorer: Send + Sync {
    /// Score from white's point of view.
    fn score(&self, board: &Board) -> Score;

    /// Score from `perspective`'s point of view.
    #[inline]
    fn score_for(&self, board: &Board, perspective: Color) -> Score {
        perspective.sign() * self.score(board)
    }
}

/// Sum of piece values, white minus black.
pub fn material_balance(board: &Board) -> Score {
    board
        .pieces()
        .map(|(_, piece)| piece.color.sign() * piece_value(piece.kind))
        .sum()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> Score {
        material_balance(board)
    }
}

/// Tunable weights for the positional terms, in centipawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub mobility_per_move: Score,
    pub king_shield_bonus: Score,
    pub king_exposure_penalty: Score,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            mobility_per_move: 10,
            king_shield_bonus: 10,
            king_exposure_penalty: 5,
        }
    }
}

/// Material plus side-to-move mobility plus king safety for both kings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer {
    pub weights: ScoreWeights,
}

impl PositionalScorer {
    pub const fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Move count of the side to move, signed by that side.
    pub fn mobility(&self, board: &Board) -> Score {
        let mut moves = Vec::with_capacity(48);
        generate_pseudo_legal_moves(board, &mut moves);
        board.side_to_move.sign() * moves.len() as Score * self.weights.mobility_per_move
    }

    /// Shield bonus minus exposure penalty around `color`'s king, unsigned.
    /// A missing king contributes nothing.
    pub fn king_safety(&self, board: &Board, color: Color) -> Score {
        let Some(king) = board.find_king(color) else {
            return 0;
        };

        KING_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| king.offset(d_row, d_col))
            .map(|sq| match board.piece_at(sq) {
                None => -self.weights.king_exposure_penalty,
                Some(piece) if piece.color == color => self.weights.king_shield_bonus,
                Some(_) => 0,
            })
            .sum()
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board) -> Score {
        material_balance(board)
            + self.mobility(board)
            + self.king_safety(board, Color::White)
            - self.king_safety(board, Color::Black)
    }
}
