//! Errors used throughout the search core.
//!
//! `ChessError` is the single error type shared by board manipulation,
//! notation and layout parsing, and engine configuration. Conditions that are
//! part of ordinary play (no move available at the root, a missing king during
//! evaluation) are modelled with `Option` instead and never surface here.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// `Board::undo` was called with an empty move history.
    #[error("nothing to undo: move history is empty")]
    NothingToUndo,

    /// A square or move string could not be read as algebraic notation.
    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// A single file or rank character was out of range.
    #[error("invalid algebraic character: {0}")]
    InvalidAlgebraicChar(char),

    /// A board layout did not describe an 8x8 grid.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// A cell code such as `wQ` or a FEN piece letter was not recognised.
    #[error("invalid piece code: {0}")]
    InvalidPieceCode(String),

    /// Side-to-move token was neither white nor black.
    #[error("invalid side to move: {0}")]
    InvalidSideToMove(String),

    /// `Engine::set_option` received a name the engine does not know.
    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    /// `Engine::set_option` received a value it could not parse.
    #[error("invalid value {value:?} for option {name}")]
    InvalidOptionValue { name: String, value: String },
}

/// Result alias for fallible operations in this crate.
pub type ChessResult<T> = Result<T, ChessError>;
