use crate::algorithms::common::SearchLimits;
use crate::algorithms::Algorithm;
use crate::grid::Position;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_MAZE: &str = "classic";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Shortest routes through grid mazes", long_about = None)]
pub struct Config {
    /// Built-in maze: classic, pocket, serpent, ladder or open_field [default: classic]
    #[arg(long, conflicts_with_all = ["maze_file", "random"])]
    pub maze: Option<String>,

    /// Load the maze from a text file ('X' = wall, ' ' = open)
    #[arg(long, conflicts_with = "random")]
    pub maze_file: Option<PathBuf>,

    /// Generate a random maze instead
    #[arg(long, default_value_t = false)]
    pub random: bool,

    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    #[arg(long, default_value_t = 20)]
    pub cols: usize,

    /// Chance that an interior cell of a random maze is a wall, 0 to 1
    #[arg(long, default_value_t = 0.25, value_parser = parse_density)]
    pub wall_density: f64,

    /// Seed for --random; omitted means a fresh maze every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start position as row,col (defaults to the maze's own)
    #[arg(long)]
    pub start: Option<Position>,

    /// Goal position as row,col (defaults to the maze's own)
    #[arg(long)]
    pub goal: Option<Position>,

    #[arg(long, value_enum, default_value_t = Algorithm::Bfs)]
    pub algorithm: Algorithm,

    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Repeat each solve this many times and report timings
    #[arg(long, default_value_t = 0)]
    pub bench_runs: usize,

    /// Give up after this many BFS expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("wall density must be between 0 and 1, got {s}"))
    }
}

impl Config {
    pub fn maze_name(&self) -> &str {
        self.maze.as_deref().unwrap_or(DEFAULT_MAZE)
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_expansions: self.max_expansions,
        }
    }

    pub fn visualize(&self) -> bool {
        !self.no_visualization && !self.quiet
    }
}
