use crate::algorithms::common::{MazeSolver, SearchOutcome};
use crate::config::Config;
use crate::direction::{route_string, Direction};
use crate::error::{SearchError, SetupError};
use crate::grid::{Grid, GridWorld, Position};
use crate::mazes::{self, Maze, BUILTIN_NAMES};
use crate::statistics::{Statistics, TimingData};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub statistics: Statistics,
    pub route: Option<Vec<Direction>>,
    pub timing: Option<TimingData>,
}

pub struct Simulation {
    maze: Maze,
    world: GridWorld,
    config: Config,
}

impl Simulation {
    /// Resolves the maze named by the configuration and applies any
    /// start/goal overrides.
    pub fn new(config: Config) -> Result<Self, SetupError> {
        let mut maze = Self::load_maze(&config)?;
        if let Some(start) = config.start {
            maze.start = start;
        }
        if let Some(goal) = config.goal {
            maze.goal = goal;
        }
        Ok(Self::with_maze(config, maze))
    }

    pub fn with_maze(config: Config, maze: Maze) -> Self {
        let world = maze.world();
        Simulation {
            maze,
            world,
            config,
        }
    }

    fn load_maze(config: &Config) -> Result<Maze, SetupError> {
        if config.random {
            return Ok(mazes::random(
                config.rows,
                config.cols,
                config.wall_density,
                config.seed,
            ));
        }

        if let Some(path) = &config.maze_file {
            let text = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
                path: path.clone(),
                source,
            })?;
            let grid: Grid = text.parse().map_err(|source| SetupError::Parse {
                path: path.clone(),
                source,
            })?;
            // Files carry no endpoints; fall back to the first and last open cells.
            let start = grid.open_cells().next().unwrap_or(Position::new(0, 0));
            let goal = grid.open_cells().last().unwrap_or(start);
            return Ok(Maze {
                name: path.display().to_string(),
                grid,
                start,
                goal,
            });
        }

        let name = config.maze_name();
        Maze::builtin(name).ok_or_else(|| SetupError::UnknownMaze {
            name: name.to_string(),
            available: BUILTIN_NAMES.join(", "),
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    /// Solves once and records timing and exploration figures.
    pub fn solve_once(
        &self,
        solver: &mut dyn MazeSolver,
    ) -> Result<(SearchOutcome, Statistics), SearchError> {
        let started = Instant::now();
        let outcome = solver.solve(&self.world, self.maze.goal)?;
        let solve_time = started.elapsed();

        let statistics = Statistics {
            algorithm: solver.name().to_string(),
            maze: self.maze.name.clone(),
            path_length: outcome.route().map(<[Direction]>::len),
            explored_nodes: solver.explored_count(),
            open_cells: self.maze.grid.open_cells().count(),
            solve_time,
        };
        Ok((outcome, statistics))
    }

    /// Times `runs` consecutive solves.
    pub fn benchmark(
        &self,
        solver: &mut dyn MazeSolver,
        runs: usize,
    ) -> Result<TimingData, SearchError> {
        let mut timing = TimingData::new();
        for _ in 0..runs {
            let started = Instant::now();
            solver.solve(&self.world, self.maze.goal)?;
            timing.record(started.elapsed());
        }
        Ok(timing)
    }

    /// Every cursor state along `route`, starting with the start position.
    pub fn replay(&self, route: &[Direction]) -> Vec<GridWorld> {
        let mut frames = Vec::with_capacity(route.len() + 1);
        let mut current = self.world.clone();
        frames.push(current.clone());
        for &direction in route {
            current = current.neighbor(direction);
            frames.push(current.clone());
        }
        frames
    }

    /// Draws each step of `route` on the console with a pause between frames.
    pub fn animate(&self, route: &[Direction]) {
        let delay = Duration::from_millis(self.config.delay_ms);
        let frames = self.replay(route);
        let total = frames.len().saturating_sub(1);
        for (step, frame) in frames.iter().enumerate() {
            self.clear_screen();
            println!("=== MAZE: {} ===", self.maze.name);
            println!(
                "Step: {}/{} | Position: {} | Goal: {}",
                step,
                total,
                frame.location(),
                self.maze.goal
            );
            println!("{}", frame);
            if step < total {
                thread::sleep(delay);
            }
        }
    }

    /// Runs every solver the configuration selects.
    ///
    /// The first solver's route is animated when visualization is on, and
    /// timings are collected when `bench_runs` is non-zero.
    pub fn run(&self) -> Result<Vec<AlgorithmResult>, SearchError> {
        info!(
            maze = %self.maze.name,
            start = %self.maze.start,
            goal = %self.maze.goal,
            "solving"
        );

        let mut results = Vec::new();
        for mut solver in self.config.algorithm.solvers(self.config.limits()) {
            let (outcome, statistics) = self.solve_once(solver.as_mut())?;
            match &outcome {
                SearchOutcome::Found(route) => {
                    info!(algorithm = solver.name(), moves = route.len(), "route found")
                }
                SearchOutcome::Unreachable => {
                    warn!(algorithm = solver.name(), "goal is unreachable")
                }
            }

            let timing = if self.config.bench_runs > 0 {
                Some(self.benchmark(solver.as_mut(), self.config.bench_runs)?)
            } else {
                None
            };

            results.push(AlgorithmResult {
                statistics,
                route: outcome.route().map(<[Direction]>::to_vec),
                timing,
            });
        }

        if self.config.visualize() {
            if let Some(route) = results.first().and_then(|r| r.route.as_deref()) {
                self.animate(route);
            } else {
                println!("{}", self.world);
            }
        }

        Ok(results)
    }

    /// Print results in a table, one row per solver.
    pub fn print_comparison_results(results: &[AlgorithmResult]) {
        println!();
        println!("=== ALGORITHM COMPARISON RESULTS ===");
        println!(
            "{:<10} {:<8} {:<8} {:<10} {:<10} {:<14} {:<14}",
            "Algorithm", "Solved", "Moves", "Explored", "Coverage", "Solve Time", "Avg (bench)"
        );
        println!("{}", "-".repeat(80));

        for result in results {
            let stats = &result.statistics;
            let solved = if stats.solved() { "✓" } else { "✗" };
            let moves = stats
                .path_length
                .map_or_else(|| "-".to_string(), |len| len.to_string());
            let bench = result.timing.as_ref().map_or_else(
                || "-".to_string(),
                |timing| format!("{:.2?}", timing.average_solve_time()),
            );
            println!(
                "{:<10} {:<8} {:<8} {:<10} {:<10} {:<14} {:<14}",
                stats.algorithm,
                solved,
                moves,
                stats.explored_nodes,
                format!("{:.1}%", stats.coverage() * 100.0),
                format!("{:.2?}", stats.solve_time),
                bench
            );
        }

        let lengths: Vec<usize> = results
            .iter()
            .filter_map(|r| r.statistics.path_length)
            .collect();
        if let (Some(min), Some(max)) = (lengths.iter().min(), lengths.iter().max()) {
            if min != max {
                println!("⚠ Solvers disagree on the shortest route length ({} vs {})", min, max);
            }
        }
        println!();
    }

    /// Prints the route and statistics for each result.
    pub fn print_results(results: &[AlgorithmResult]) {
        for result in results {
            println!();
            print!("{}", result.statistics);
            if let Some(route) = &result.route {
                println!("Route: {}", route_string(route));
            }
            if let Some(timing) = &result.timing {
                print!("{}", timing);
            }
        }
    }

    fn clear_screen(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }
}
