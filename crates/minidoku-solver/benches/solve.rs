//! Benchmarks for propagation passes and full solves.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solve
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use minidoku_core::{CandidateGrid, DigitGrid, Position};
use minidoku_solver::propagate;

const DEFAULT_PUZZLE: &str =
    "000000000000000012003045000000000036000000400570008000000100000000900020706000500";

const EASY_PUZZLE: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

fn candidate_grid(input: &str) -> CandidateGrid {
    let values: DigitGrid = input.parse().unwrap();
    let mut grid = CandidateGrid::new();
    for pos in Position::ALL {
        if let Some(digit) = values[pos] {
            grid.assign(pos, digit);
        }
    }
    grid
}

fn bench_naked_singles(c: &mut Criterion) {
    let grids = [
        ("easy", candidate_grid(EASY_PUZZLE)),
        ("empty", CandidateGrid::new()),
    ];

    for (param, grid) in grids {
        c.bench_with_input(BenchmarkId::new("naked_singles", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let changed = propagate::naked_singles(grid);
                    hint::black_box(changed)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_hidden_singles(c: &mut Criterion) {
    let grids = [
        ("easy", candidate_grid(EASY_PUZZLE)),
        ("empty", CandidateGrid::new()),
    ];

    for (param, grid) in grids {
        c.bench_with_input(
            BenchmarkId::new("hidden_singles", param),
            &grid,
            |b, grid| {
                b.iter_batched_ref(
                    || hint::black_box(grid.clone()),
                    |grid| {
                        let changed = propagate::hidden_singles(grid);
                        hint::black_box(changed)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [("easy", EASY_PUZZLE), ("default", DEFAULT_PUZZLE)];

    for (param, input) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &input, |b, input| {
            b.iter(|| {
                let solution = minidoku_solver::solve(hint::black_box(input)).unwrap();
                hint::black_box(solution)
            });
        });
    }
}

criterion_group!(benches, bench_naked_singles, bench_hidden_singles, bench_solve);
criterion_main!(benches);
