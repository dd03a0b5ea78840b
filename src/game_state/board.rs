//! Mutable 8x8 board with make/unmake history.
//!
//! A single `Board` is owned by the caller and mutated in place for the whole
//! search. `apply` and `undo` are O(1) and form a strict stack: every applied
//! move is pushed to `history`, and `undo` pops the most recent one and
//! restores both touched cells and the side to move.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STANDARD_LAYOUT;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::layout_parser::parse_layout;

/// Terminal status that a caller may attach to a position.
///
/// Pseudo-legal generation cannot tell checkmate from stalemate, so the search
/// only reads this flag when the side to move has no moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalFlag {
    #[default]
    Ongoing,
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub side_to_move: Color,
    pub terminal: TerminalFlag,
    history: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            side_to_move: Color::White,
            terminal: TerminalFlag::Ongoing,
            history: Vec::new(),
        }
    }
}

impl Board {
    /// Empty board, white to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position, white to move.
    #[inline]
    pub fn new_game() -> Self {
        parse_layout(&STANDARD_LAYOUT, Color::White).expect("standard layout should always parse")
    }

    #[inline]
    pub fn from_layout(rows: &[&str], side_to_move: Color) -> ChessResult<Self> {
        parse_layout(rows, side_to_move)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Cell {
        self.grid[square.row as usize][square.col as usize]
    }

    /// Overwrite a cell. Used for hand-built positions; does not touch history.
    #[inline]
    pub fn set_piece(&mut self, square: Square, cell: Cell) {
        self.grid[square.row as usize][square.col as usize] = cell;
    }

    /// Applied moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Play `mv` without any legality check. The move must have been produced
    /// for this exact position by the move generator.
    pub fn apply(&mut self, mv: Move) {
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(mv.piece_moved));
        self.history.push(mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Take back the most recent move, returning it.
    pub fn undo(&mut self) -> ChessResult<Move> {
        let mv = self.history.pop().ok_or(ChessError::NothingToUndo)?;
        self.set_piece(mv.from, Some(mv.piece_moved));
        self.set_piece(mv.to, mv.piece_captured);
        self.side_to_move = self.side_to_move.opposite();
        Ok(mv)
    }

    /// Linear scan for the king of `color`.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| *piece == Piece::new(color, PieceKind::King))
            .map(|(sq, _)| sq)
    }
}
