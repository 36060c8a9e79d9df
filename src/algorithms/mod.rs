pub mod a_star;
pub mod bfs;
pub mod common;

use clap::ValueEnum;

/// Solver selection for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Bfs,
    #[value(name = "a_star")]
    AStar,
    /// Run every solver on the same maze and compare.
    All,
}

impl Algorithm {
    /// Solvers this selection expands to, in display order.
    /// The expansion budget only applies to BFS.
    pub fn solvers(self, limits: common::SearchLimits) -> Vec<Box<dyn common::MazeSolver>> {
        match self {
            Algorithm::Bfs => vec![Box::new(bfs::PathFinder::with_limits(limits))],
            Algorithm::AStar => vec![Box::new(a_star::AStarSolver::new())],
            Algorithm::All => vec![
                Box::new(bfs::PathFinder::with_limits(limits)),
                Box::new(a_star::AStarSolver::new()),
            ],
        }
    }
}
