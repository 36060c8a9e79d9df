use crate::algorithms::common::{
    positions_to_directions, validate_endpoint, MazeSolver, SearchOutcome,
};
use crate::error::{Endpoint, SearchError};
use crate::grid::{GridWorld, Position};
use pathfinding::prelude::astar;
use rustc_hash::FxHashSet;
use tracing::debug;

/// A* over the same move rule as the BFS solver, backed by the `pathfinding`
/// crate. Serves as a comparison point and an independent cross-check.
#[derive(Debug, Default)]
pub struct AStarSolver {
    last_visited: FxHashSet<Position>,
}

impl AStarSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MazeSolver for AStarSolver {
    fn name(&self) -> &'static str {
        "a_star"
    }

    /// Finds a route using Manhattan distance as the heuristic.
    ///
    /// The visited snapshot holds the start plus every successor the crate
    /// asked about, which is the A* equivalent of "discovered".
    fn solve(&mut self, world: &GridWorld, goal: Position) -> Result<SearchOutcome, SearchError> {
        self.last_visited.clear();
        let start = world.location();
        validate_endpoint(world, Endpoint::Start, start)?;
        validate_endpoint(world, Endpoint::Goal, goal)?;

        let mut discovered = FxHashSet::default();
        discovered.insert(start);
        let result = astar(
            &start,
            |p| {
                let successors: Vec<(Position, usize)> = world
                    .legal_moves(*p)
                    .into_iter()
                    .map(|direction| (world.apply_move(*p, direction), 1))
                    .collect();
                discovered.extend(successors.iter().map(|(next, _)| *next));
                successors
            },
            |p| p.manhattan(&goal),
            |p| *p == goal,
        );
        self.last_visited = discovered;

        let outcome = match result {
            Some((path, _cost)) => SearchOutcome::Found(positions_to_directions(&path)?),
            None => SearchOutcome::Unreachable,
        };
        debug!(
            found = outcome.is_found(),
            explored = self.last_visited.len(),
            "a_star search finished"
        );
        Ok(outcome)
    }

    fn explored_count(&self) -> usize {
        self.last_visited.len()
    }

    fn visited_positions(&self) -> &FxHashSet<Position> {
        &self.last_visited
    }
}
