use crate::direction::Direction;
use crate::error::{Endpoint, PositionFault, SearchError};
use crate::grid::{Cell, GridWorld, Position};
use rustc_hash::FxHashSet;

/// Result of a search that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Moves from start to goal, in order. Empty when start equals goal.
    Found(Vec<Direction>),
    /// No sequence of moves connects start and goal.
    Unreachable,
}

impl SearchOutcome {
    pub fn route(&self) -> Option<&[Direction]> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::Unreachable => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Upper bounds a caller may place on one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of frontier entries to expand. `None` is unlimited.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(max_expansions: usize) -> Self {
        SearchLimits {
            max_expansions: Some(max_expansions),
        }
    }

    pub(crate) fn check(&self, expanded: usize) -> Result<(), SearchError> {
        match self.max_expansions {
            Some(limit) if expanded >= limit => Err(SearchError::ExpansionLimit { limit }),
            _ => Ok(()),
        }
    }
}

pub trait MazeSolver {
    fn name(&self) -> &'static str;

    /// Finds a shortest route from the world's cursor to `goal`.
    fn solve(&mut self, world: &GridWorld, goal: Position) -> Result<SearchOutcome, SearchError>;

    /// Number of positions discovered by the most recent `solve`.
    fn explored_count(&self) -> usize;

    /// Positions discovered by the most recent `solve`.
    fn visited_positions(&self) -> &FxHashSet<Position>;
}

/// Rejects endpoints that are outside the grid or on a wall.
pub(crate) fn validate_endpoint(
    world: &GridWorld,
    role: Endpoint,
    position: Position,
) -> Result<(), SearchError> {
    let reason = match world.grid().cell(position) {
        Some(Cell::Open) => return Ok(()),
        Some(Cell::Wall) => PositionFault::Wall,
        None => PositionFault::OutOfBounds,
    };
    Err(SearchError::InvalidPosition {
        role,
        position,
        reason,
    })
}

/// Translates consecutive adjacent positions into moves.
pub(crate) fn positions_to_directions(path: &[Position]) -> Result<Vec<Direction>, SearchError> {
    path.windows(2)
        .map(|step| {
            let (from, to) = (step[0], step[1]);
            Direction::from_delta((to.row - from.row, to.col - from.col))
                .ok_or(SearchError::NonAdjacentStep { from, to })
        })
        .collect()
}
