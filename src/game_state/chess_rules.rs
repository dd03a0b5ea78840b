//! Canonical rule constants.
//!
//! Starting layouts are stored as eight rows of two-character cell codes
//! (`wR`, `bp`, `--`), top row first, so they can be read by
//! `utils::layout_parser::parse_layout` and compared against board dumps.

use crate::game_state::chess_types::Color;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Standard starting layout, white to move.
pub const STANDARD_LAYOUT: [&str; 8] = [
    "bR bN bB bQ bK bB bN bR",
    "bp bp bp bp bp bp bp bp",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "wp wp wp wp wp wp wp wp",
    "wR wN wB wQ wK wB wN wR",
];

/// Mid-opening position the analysis driver uses as its demonstration board.
pub const ORIGINAL_DEMO_LAYOUT: [&str; 8] = [
    "bR -- bB bQ bK -- bN bR",
    "bp bp bp -- -- bp bp bp",
    "-- -- -- -- -- -- -- --",
    "-- -- bN -- -- -- -- --",
    "-- -- -- wp -- -- -- --",
    "-- -- wN -- -- -- -- --",
    "wp wp wp -- -- wp wp wp",
    "wR -- wB wQ wK -- wN wR",
];

/// Row from which a pawn of `color` may make its double step.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row delta of a single pawn step for `color`.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}
