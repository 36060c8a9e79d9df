//! Solver benchmarks over the built-in and random mazes.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use maze_pathfinding::mazes::{self, Maze};
use maze_pathfinding::{AStarSolver, MazeSolver, PathFinder};

fn bench_builtin_mazes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs_builtin");
    for maze in Maze::all_builtin() {
        let world = maze.world();
        group.bench_with_input(BenchmarkId::from_parameter(&maze.name), &world, |b, world| {
            let finder = PathFinder::new();
            b.iter(|| finder.search(black_box(world), black_box(maze.goal)))
        });
    }
    group.finish();
}

fn bench_bfs_vs_a_star(c: &mut Criterion) {
    let maze = mazes::random(60, 60, 0.25, Some(42));
    let world = maze.world();
    let mut group = c.benchmark_group("random_60x60");

    group.bench_function("bfs", |b| {
        let mut solver = PathFinder::new();
        b.iter(|| solver.solve(black_box(&world), black_box(maze.goal)))
    });
    group.bench_function("a_star", |b| {
        let mut solver = AStarSolver::new();
        b.iter(|| solver.solve(black_box(&world), black_box(maze.goal)))
    });
    group.finish();
}

criterion_group!(benches, bench_builtin_mazes, bench_bfs_vs_a_star);
criterion_main!(benches);
