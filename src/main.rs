//! Root-move analysis driver.
//!
//! Usage:
//! `cargo run --release -- --depth 3 --top 3`
//! `cargo run --release -- --demo`
//! `cargo run --release -- --layout "bR -- ... / ... / wR -- ..." --side b`
//! `cargo run --release -- --fen "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1" --unicode`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use log::info;

use mailbox_chess::errors::ChessResult;
use mailbox_chess::game_state::chess_rules::ORIGINAL_DEMO_LAYOUT;
use mailbox_chess::game_state::chess_types::{Board, Color};
use mailbox_chess::move_generation::move_generator::PseudoLegalMoveGenerator;
use mailbox_chess::search::alpha_beta::{top_moves, SearchConfig, Searcher};
use mailbox_chess::search::board_scoring::{PositionalScorer, Score};
use mailbox_chess::utils::layout_parser::{parse_fen, parse_layout_text, parse_side_to_move};
use mailbox_chess::utils::render_game_state::{render_codes, render_unicode};

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn parse_arg_u8(args: &[String], flag: &str, default: u8) -> u8 {
    arg_value(args, flag)
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(default)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Requested search depth; at least one ply so analysis and the final search agree.
fn search_depth(args: &[String], default: u8) -> u8 {
    parse_arg_u8(args, "--depth", default).max(1)
}

fn load_board(args: &[String]) -> ChessResult<Board> {
    if let Some(layout) = arg_value(args, "--layout") {
        let side = arg_value(args, "--side")
            .map_or(Ok(Color::White), |side| parse_side_to_move(&side))?;
        parse_layout_text(&layout, side)
    } else if let Some(fen) = arg_value(args, "--fen") {
        parse_fen(&fen)
    } else if has_flag(args, "--demo") {
        Board::from_layout(&ORIGINAL_DEMO_LAYOUT, Color::White)
    } else {
        Ok(Board::new_game())
    }
}

fn render(board: &Board, unicode: bool) -> String {
    if unicode {
        render_unicode(board)
    } else {
        render_codes(board)
    }
}

fn pawns(score: Score) -> f64 {
    f64::from(score) / 100.0
}

fn main() -> ChessResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let defaults = SearchConfig::default();
    let depth = search_depth(&args, defaults.max_depth);
    let top = usize::from(parse_arg_u8(&args, "--top", 3));
    let unicode = has_flag(&args, "--unicode");

    let mut board = load_board(&args)?;

    let config = SearchConfig {
        max_depth: depth,
        order_moves: !has_flag(&args, "--no-ordering"),
        ..defaults
    };
    info!("analysing at depth {depth} (move ordering {})", config.order_moves);
    let mut searcher = Searcher::new(PseudoLegalMoveGenerator, PositionalScorer::default(), config);

    println!("Initial board:");
    println!("{}", render(&board, unicode));

    let analysis = searcher.analyze_root_moves(&mut board, depth);
    if analysis.is_empty() {
        println!("No moves available.");
        return Ok(());
    }
    for (mv, score) in &analysis {
        println!("Move {mv}: Evaluation = {:.2}", pawns(*score));
    }

    let mover = board.side_to_move;
    println!();
    println!("Top {top} moves:");
    for (idx, (mv, score)) in top_moves(analysis, mover, top).into_iter().enumerate() {
        println!("Move {}: {mv} (Evaluation = {:.2})", idx + 1, pawns(score));
        board.apply(mv);
        println!("Board after move:");
        println!("{}", render(&board, unicode));
        board.undo()?;
    }

    let result = searcher.search(&mut board);
    if let Some(best) = result.best_move {
        println!(
            "Best move: {best} (Evaluation = {:.2}, nodes {}, cutoffs {})",
            pawns(result.best_score),
            result.nodes,
            result.cutoffs
        );
    }

    Ok(())
}
