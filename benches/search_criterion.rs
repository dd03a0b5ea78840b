use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mailbox_chess::game_state::chess_types::Board;
use mailbox_chess::move_generation::move_generator::PseudoLegalMoveGenerator;
use mailbox_chess::move_generation::perft::perft;
use mailbox_chess::search::alpha_beta::{SearchConfig, Searcher};
use mailbox_chess::search::board_scoring::PositionalScorer;
use mailbox_chess::utils::layout_parser::parse_fen;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
    },
    BenchCase {
        name: "demo",
        fen: "r1bqk1nr/ppp2ppp/8/2n5/3P4/2N5/PPP2PPP/R1BQK1NR w - - 0 1",
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    let mut board = Board::new_game();
    for depth in 1..=3u8 {
        let nodes = perft(&PseudoLegalMoveGenerator, &mut board, depth).nodes;
        group.throughput(Throughput::Elements(nodes));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let counts = perft(&PseudoLegalMoveGenerator, black_box(&mut board), black_box(depth));
                assert_eq!(counts.nodes, nodes);
                black_box(counts.nodes)
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in CASES {
        let board = parse_fen(case.fen).expect("benchmark FEN should parse");

        for order_moves in [false, true] {
            let bench_name = format!(
                "{}_d3_{}",
                case.name,
                if order_moves { "ordered" } else { "unordered" }
            );
            let mut bench_board = board.clone();
            let mut searcher = Searcher::new(
                PseudoLegalMoveGenerator,
                PositionalScorer::default(),
                SearchConfig {
                    max_depth: 3,
                    order_moves,
                    ..SearchConfig::default()
                },
            );

            group.bench_function(BenchmarkId::from_parameter(bench_name), |b| {
                b.iter(|| black_box(searcher.search(black_box(&mut bench_board))));
            });
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_perft, bench_search);
criterion_main!(search_benches);
