//! Shortest routes through static grid mazes.
//!
//! A [`GridWorld`] answers which cardinal moves are legal from a cell, and a
//! [`PathFinder`] runs breadth-first search over it to produce the shortest
//! sequence of [`Direction`]s from the world's cursor to a goal:
//!
//! ```
//! use maze_pathfinding::{Direction, Grid, GridWorld, PathFinder, Position, SearchOutcome};
//!
//! let grid = Grid::from_rows(&["XXXXX", "X   X", "XXXXX"]).unwrap();
//! let world = GridWorld::new(grid, Position::new(1, 1));
//! let report = PathFinder::new().search(&world, Position::new(1, 3)).unwrap();
//! assert_eq!(report.outcome, SearchOutcome::Found(vec![Direction::East, Direction::East]));
//! assert_eq!(report.explored_count(), 3);
//! ```

pub mod algorithms;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod mazes;
pub mod simulation;
pub mod statistics;

pub use algorithms::a_star::AStarSolver;
pub use algorithms::bfs::{PathFinder, SearchReport};
pub use algorithms::common::{MazeSolver, SearchLimits, SearchOutcome};
pub use direction::Direction;
pub use error::{GridParseError, SearchError};
pub use grid::{Cell, Grid, GridWorld, Position};
