//! Crate root module declarations for the Mailbox Chess search core.
//!
//! The crate is organised leaf to root: game state (board, pieces, apply/undo),
//! per-piece move rules, pseudo-legal move generation, static scoring, the
//! alpha-beta search, and thin engine wrappers. Text utilities handle
//! algebraic notation, board layouts and board dumps.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod move_ordering;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod layout_parser;
    pub mod render_game_state;
}
