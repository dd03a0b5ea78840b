//! Depth-limited minimax with alpha-beta pruning over one shared board.
//!
//! The searcher borrows the caller's board mutably for the whole search and
//! walks the tree with `apply`/`undo` pairs that nest like the call stack.
//! Scores are white-positive: white is the maximizing side and black the
//! minimizing side.
//!
//! Cancellation (stop flag, node cap, move-time deadline) is only checked
//! after a child has been undone and before the next sibling is tried, so an
//! aborted search always leaves the board exactly as it found it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::move_ordering::order_by_capture_value;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, Score, SCORE_INFINITY};

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Search captures of valuable pieces first.
    pub order_moves: bool,
    /// When false, every node examines all of its children.
    pub use_pruning: bool,
    pub max_nodes: Option<u64>,
    pub movetime_ms: Option<u64>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            order_moves: true,
            use_pruning: true,
            max_nodes: None,
            movetime_ms: None,
            stop_flag: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no moves, or when depth 0 was requested.
    pub best_move: Option<Move>,
    pub best_score: Score,
    pub depth: u8,
    pub nodes: u64,
    pub cutoffs: u64,
    pub aborted: bool,
}

pub struct Searcher<G: MoveGenerator, S: BoardScorer> {
    generator: G,
    scorer: S,
    config: SearchConfig,
    nodes: u64,
    cutoffs: u64,
    deadline: Option<Instant>,
    aborted: bool,
}

impl<G: MoveGenerator, S: BoardScorer> Searcher<G, S> {
    pub fn new(generator: G, scorer: S, config: SearchConfig) -> Self {
        Self {
            generator,
            scorer,
            config,
            nodes: 0,
            cutoffs: 0,
            deadline: None,
            aborted: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    #[inline]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Nodes visited since the last top-level call.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search to the configured depth.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.get_best_move(board, self.config.max_depth)
    }

    /// Pick the best move for the side to move, searching `depth` plies.
    ///
    /// Ties keep the first move in search order. Depth 0 evaluates the
    /// current position and returns no move.
    pub fn get_best_move(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.begin();
        let maximizing = board.side_to_move == Color::White;

        if depth == 0 {
            self.nodes += 1;
            return self.finish(None, self.scorer.score(board), depth);
        }

        let moves = self.candidate_moves(board);
        if moves.is_empty() {
            self.nodes += 1;
            return self.finish(None, terminal_score(board, maximizing), depth);
        }

        let mut alpha = -SCORE_INFINITY;
        let mut beta = SCORE_INFINITY;
        let mut best: Option<(Move, Score)> = None;

        for &mv in &moves {
            board.apply(mv);
            let value = self.minimax(board, depth - 1, alpha, beta, !maximizing);
            board.undo().expect("undo paired with apply");

            if self.aborted {
                break;
            }
            debug!("root move {mv} scored {value} at depth {depth}");

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => value > best_score,
                Some((_, best_score)) => value < best_score,
            };
            if improves {
                best = Some((mv, value));
            }
            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }

            if self.should_abort() {
                break;
            }
        }

        match best {
            Some((mv, score)) => self.finish(Some(mv), score, depth),
            None => {
                // Aborted before any root move finished; fall back to the first candidate.
                let score = self.scorer.score(board);
                self.finish(moves.first().copied(), score, depth)
            }
        }
    }

    /// Minimax value of `board` searched `depth` plies deep within `(alpha, beta)`.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.nodes += 1;

        let mut moves = self.generator.generate_moves(board);
        if moves.is_empty() {
            return terminal_score(board, maximizing);
        }
        if depth == 0 {
            return self.scorer.score(board);
        }
        if self.config.order_moves {
            order_by_capture_value(&mut moves);
        }

        let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };

        for mv in moves {
            board.apply(mv);
            let value = self.minimax(board, depth - 1, alpha, beta, !maximizing);
            board.undo().expect("undo paired with apply");

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            if self.config.use_pruning && beta <= alpha {
                self.cutoffs += 1;
                trace!("cutoff after {mv} at depth {depth} (alpha {alpha}, beta {beta})");
                break;
            }
            if self.should_abort() {
                break;
            }
        }

        best
    }

    /// Score every root move with a full window, in search order.
    pub fn analyze_root_moves(&mut self, board: &mut Board, depth: u8) -> Vec<(Move, Score)> {
        self.begin();
        let maximizing = board.side_to_move == Color::White;
        let moves = self.candidate_moves(board);
        let mut out = Vec::with_capacity(moves.len());

        for mv in moves {
            board.apply(mv);
            let value = self.minimax(
                board,
                depth.saturating_sub(1),
                -SCORE_INFINITY,
                SCORE_INFINITY,
                !maximizing,
            );
            board.undo().expect("undo paired with apply");

            if self.aborted {
                break;
            }
            debug!("analysis {mv}: {value}");
            out.push((mv, value));

            if self.should_abort() {
                break;
            }
        }

        out
    }

    fn candidate_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = self.generator.generate_moves(board);
        if self.config.order_moves {
            order_by_capture_value(&mut moves);
        }
        moves
    }

    fn begin(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
        self.aborted = false;
        self.deadline = self
            .config
            .movetime_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));
    }

    fn finish(&self, best_move: Option<Move>, best_score: Score, depth: u8) -> SearchResult {
        let result = SearchResult {
            best_move,
            best_score,
            depth,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
            aborted: self.aborted,
        };

        if result.aborted {
            warn!(
                "search aborted at depth {depth} after {} nodes",
                result.nodes
            );
        }
        match best_move {
            Some(mv) => info!(
                "depth {depth} best {mv} score {best_score} nodes {} cutoffs {}",
                result.nodes, result.cutoffs
            ),
            None => info!("depth {depth} no move, score {best_score}"),
        }

        result
    }

    fn should_abort(&mut self) -> bool {
        if self.aborted {
            return true;
        }

        let node_cap_hit = self.config.max_nodes.is_some_and(|cap| self.nodes >= cap);
        let time_up = self.deadline.is_some_and(|limit| Instant::now() >= limit);
        let stopped = self
            .config
            .stop_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed));

        self.aborted = node_cap_hit || time_up || stopped;
        self.aborted
    }
}

/// Best `n` analysed root moves for `mover`, highest first. Equal scores keep
/// their search order.
pub fn top_moves(mut analysis: Vec<(Move, Score)>, mover: Color, n: usize) -> Vec<(Move, Score)> {
    analysis.sort_by_key(|&(_, score)| std::cmp::Reverse(mover.sign() * score));
    analysis.truncate(n);
    analysis
}

/// Score of a position whose side to move has no moves.
///
/// A caller-flagged checkmate favours the side not to move; anything else
/// scores as a draw.
pub fn terminal_score(board: &Board, maximizing: bool) -> Score {
    match board.terminal {
        TerminalFlag::Checkmate if maximizing => -SCORE_INFINITY,
        TerminalFlag::Checkmate => SCORE_INFINITY,
        TerminalFlag::Stalemate | TerminalFlag::Ongoing => 0,
    }
}
