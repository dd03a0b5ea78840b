//! Perft node counting over the shared board.
//!
//! Walks the pseudo-legal move tree with `apply`/`undo` instead of cloning, so
//! it doubles as a check that make/unmake leaves the board untouched.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    /// Interior positions where the side to move had no moves.
    pub terminal_positions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.terminal_positions += rhs.terminal_positions;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, board: &mut Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = generator.generate_moves(board);
    if moves.is_empty() {
        return PerftCounts {
            terminal_positions: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in moves {
        if depth == 1 && mv.is_capture() {
            total.captures += 1;
        }
        board.apply(mv);
        let sub = perft(generator, board, depth - 1);
        board.undo().expect("undo paired with apply");
        total.merge(sub);
    }

    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(generator: &G, board: &mut Board, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = generator.generate_moves(board);
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        board.apply(mv);
        let nodes = perft(generator, board, depth - 1).nodes;
        board.undo().expect("undo paired with apply");
        out.push((mv.to_string(), nodes));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::chess_types::*;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;

    #[test]
    fn starting_position_node_counts() {
        let mut board = Board::new_game();
        let before = board.clone();
        let gen = PseudoLegalMoveGenerator;

        assert_eq!(perft(&gen, &mut board, 0).nodes, 1);
        assert_eq!(perft(&gen, &mut board, 1).nodes, 20);
        assert_eq!(perft(&gen, &mut board, 2).nodes, 400);
        assert_eq!(board, before);
    }

    #[test]
    fn perft_leaves_board_unchanged_at_depth_three() {
        let mut board = Board::new_game();
        let before = board.clone();
        let counts = perft(&PseudoLegalMoveGenerator, &mut board, 3);
        assert!(counts.nodes > 400);
        assert_eq!(board, before);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::new_game();
        let gen = PseudoLegalMoveGenerator;
        let divided = perft_divide(&gen, &mut board, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        let total: u64 = divided.iter().map(|(_, nodes)| nodes).sum();
        assert_eq!(total, perft(&gen, &mut board, 2).nodes);
    }
}
