//! Benchmarks for the 8-puzzle search engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use slider::board::Board;
use slider::fringe::successors;
use slider::index::StateIndex;
use slider::{Puzzle, Strategy};

/// Benchmark enumerating and indexing the full 9! state space.
fn bench_index_build(c: &mut Criterion) {
    c.bench_function("index_build", |b| b.iter(StateIndex::build));
}

/// Benchmark rank lookup against the prebuilt index.
fn bench_rank(c: &mut Criterion) {
    let index = StateIndex::build();
    let id = Board::GOAL.id();

    c.bench_function("rank", |b| b.iter(|| index.rank(black_box(id))));
}

/// Benchmark successor generation from a center-blank state.
fn bench_successors(c: &mut Criterion) {
    let id = Board::new([1, 2, 3, 4, 0, 5, 6, 7, 8]).id();

    c.bench_function("successors", |b| b.iter(|| successors(black_box(id))));
}

/// Benchmark BFS on a state a few moves from the goal.
fn bench_bfs_near_goal(c: &mut Criterion) {
    let index = StateIndex::build();
    let puzzle = Puzzle::new(Board::new([1, 2, 3, 4, 5, 6, 0, 7, 8]));

    c.bench_function("bfs_near_goal", |b| {
        b.iter(|| black_box(&puzzle).solution(Strategy::Bfs, &index))
    });
}

/// Benchmark UCS on the same near-goal state.
fn bench_ucs_near_goal(c: &mut Criterion) {
    let index = StateIndex::build();
    let puzzle = Puzzle::new(Board::new([1, 2, 3, 4, 5, 6, 0, 7, 8]));

    let mut group = c.benchmark_group("ucs");
    group.sample_size(10);
    group.bench_function("near_goal", |b| {
        b.iter(|| black_box(&puzzle).solution(Strategy::Ucs, &index))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_index_build,
    bench_rank,
    bench_successors,
    bench_bfs_near_goal,
    bench_ucs_near_goal
);
criterion_main!(benches);
