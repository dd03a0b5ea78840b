//! Alpha-beta minimax engine.
//!
//! Wraps a `Searcher` over the pseudo-legal generator and the positional
//! scorer, with search limits configurable through engine options and
//! per-call `GoParams`.

use crate::engines::engine_trait::{parse_option, Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Board;
use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
use crate::search::alpha_beta::{SearchConfig, Searcher};
use crate::search::board_scoring::PositionalScorer;

pub struct MinimaxEngine {
    searcher: Searcher<PseudoLegalMoveGenerator, PositionalScorer>,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(PseudoLegalMoveGenerator, PositionalScorer::default(), config),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Mailbox Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let config = self.searcher.config_mut();
        match name.to_ascii_lowercase().as_str() {
            "depth" => {
                let depth: u8 = parse_option(name, value)?;
                if depth == 0 {
                    return Err(ChessError::InvalidOptionValue {
                        name: name.to_owned(),
                        value: value.to_owned(),
                    });
                }
                config.max_depth = depth;
            }
            "moveordering" => config.order_moves = parse_option(name, value)?,
            "pruning" => config.use_pruning = parse_option(name, value)?,
            "maxnodes" => config.max_nodes = Some(parse_option(name, value)?),
            "movetime" => config.movetime_ms = Some(parse_option(name, value)?),
            _ => return Err(ChessError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }

    fn choose_move(&mut self, board: &mut Board, params: &GoParams) -> EngineOutput {
        let saved = self.searcher.config().clone();
        {
            let config = self.searcher.config_mut();
            if let Some(ms) = params.movetime_ms {
                config.movetime_ms = Some(ms);
            }
            if let Some(nodes) = params.max_nodes {
                config.max_nodes = Some(nodes);
            }
        }

        let depth = params.depth.unwrap_or(saved.max_depth);
        let result = self.searcher.get_best_move(board, depth);
        *self.searcher.config_mut() = saved;

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {} cutoffs {}",
            result.depth, result.best_score, result.nodes, result.cutoffs
        ));
        if result.aborted {
            out.info_lines
                .push("info string minimax_engine search aborted".to_owned());
        }
        out
    }
}
