use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use maze_pathfinding::config::Config;
use maze_pathfinding::simulation::Simulation;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("maze_pathfinding=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::parse();

    if !config.quiet {
        println!("Starting maze solver...");
        println!("Algorithm: {:?}", config.algorithm);
        if config.visualize() {
            println!("Visualization enabled with {}ms delay", config.delay_ms);
        } else {
            println!("Visualization disabled - running in fast mode");
        }
        if config.bench_runs > 0 {
            println!("Timing {} runs per solver", config.bench_runs);
        }
        println!();
    }

    let simulation = Simulation::new(config.clone()).context("failed to set up the maze")?;
    if !config.quiet {
        let maze = simulation.maze();
        println!(
            "Maze: {} | Rows: {} | Walls: {} | Start: {} | Goal: {}",
            maze.name,
            maze.grid.rows(),
            maze.grid.count_walls(),
            maze.start,
            maze.goal
        );
    }
    let results = simulation.run().with_context(|| {
        format!(
            "failed to solve {} from {} to {}",
            simulation.maze().name,
            simulation.maze().start,
            simulation.maze().goal
        )
    })?;

    println!("\n=== FINAL RESULTS ===");
    Simulation::print_results(&results);
    if results.len() > 1 {
        Simulation::print_comparison_results(&results);
    }

    Ok(())
}
