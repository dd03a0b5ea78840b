//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be driven through a single trait.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Board;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::Score;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
    pub max_nodes: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub score: Option<Score>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn set_option(&mut self, name: &str, _value: &str) -> ChessResult<()> {
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    /// Choose a move for `board.side_to_move`. The board is borrowed for the
    /// duration of the call and is returned unchanged.
    fn choose_move(&mut self, board: &mut Board, params: &GoParams) -> EngineOutput;
}

/// Parse an option value, mapping failures to `InvalidOptionValue`.
pub(crate) fn parse_option<T: std::str::FromStr>(name: &str, value: &str) -> ChessResult<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ChessError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        })
}
