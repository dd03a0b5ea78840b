//! Random-move baseline engine.
//!
//! Picks uniformly among pseudo-legal moves. Seedable so that matches against
//! it are reproducible in tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Board;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

pub struct RandomEngine {
    move_generator: PseudoLegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: PseudoLegalMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: PseudoLegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mailbox Random"
    }

    fn choose_move(&mut self, board: &mut Board, _params: &GoParams) -> EngineOutput {
        let moves = self.move_generator.generate_moves(board);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine moves {}", moves.len()));
        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        out
    }
}
