//! Benchmarks for the backtracking solver.
//!
//! Measures end-to-end solving of a classic puzzle under both
//! re-validation scopes, plus completion of an empty board.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridlock_core::Board;
use gridlock_solver::{BacktrackingSolver, Revalidation};

fn classic_puzzle() -> Board {
    Board::from_lines(&[
        "530070000",
        "600195000",
        "098000060",
        "800060003",
        "400803001",
        "700020006",
        "060000280",
        "000419005",
        "000080079",
    ])
    .unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    let modes = [
        ("whole_board", Revalidation::WholeBoard),
        ("affected", Revalidation::Affected),
    ];

    for (param, revalidation) in modes {
        let solver = BacktrackingSolver::with_revalidation(revalidation);

        group.bench_with_input(
            BenchmarkId::new("classic_puzzle", param),
            &solver,
            |b, solver| {
                b.iter(|| {
                    let mut board = hint::black_box(classic_puzzle());
                    let solved = solver.solve(&mut board);
                    hint::black_box((solved, board))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("empty_board", param),
            &solver,
            |b, solver| {
                b.iter(|| {
                    let mut board = hint::black_box(Board::empty());
                    let solved = solver.solve(&mut board);
                    hint::black_box((solved, board))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
