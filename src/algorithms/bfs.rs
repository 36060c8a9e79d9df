//! Breadth-first search over a [`GridWorld`].
//!
//! Every call builds its own visited set, frontier and node arena, so a
//! `PathFinder` can be reused for any number of searches and nothing is
//! shared between them. The only thing kept after a call is a snapshot of
//! the visited set for diagnostics.

use crate::algorithms::common::{
    positions_to_directions, validate_endpoint, MazeSolver, SearchLimits, SearchOutcome,
};
use crate::error::{Endpoint, SearchError};
use crate::grid::{GridWorld, Position};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Handle of a node inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One discovered position and the node that discovered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub position: Position,
    pub parent: Option<NodeId>,
}

/// Append-only arena of search nodes. Parents are stored as handles, so the
/// whole tree is dropped at once with the arena.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn with_root(position: Position) -> (Self, NodeId) {
        let tree = SearchTree {
            nodes: vec![SearchNode {
                position,
                parent: None,
            }],
        };
        (tree, NodeId(0))
    }

    pub fn add_child(&mut self, parent: NodeId, position: Position) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            position,
            parent: Some(parent),
        });
        id
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Positions from the root down to `id`.
    pub fn path_to(&self, id: NodeId) -> Vec<Position> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            path.push(node.position);
            current = node.parent;
        }
        path.reverse();
        path
    }
}

/// Progress of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Frontier non-empty, goal not yet dequeued.
    Running,
    /// Goal dequeued; the id is its node.
    Found(NodeId),
    /// Frontier emptied without reaching the goal.
    Exhausted,
}

/// Call-scoped BFS state.
struct Bfs<'w> {
    world: &'w GridWorld,
    goal: Position,
    limits: SearchLimits,
    tree: SearchTree,
    frontier: VecDeque<(NodeId, Position)>,
    visited: FxHashSet<Position>,
    expanded: usize,
}

impl<'w> Bfs<'w> {
    fn new(world: &'w GridWorld, goal: Position, limits: SearchLimits) -> Self {
        let start = world.location();
        let (tree, root) = SearchTree::with_root(start);
        let mut visited = FxHashSet::default();
        visited.insert(start);
        let mut frontier = VecDeque::new();
        frontier.push_back((root, start));
        Bfs {
            world,
            goal,
            limits,
            tree,
            frontier,
            visited,
            expanded: 0,
        }
    }

    /// Dequeues and expands one frontier entry.
    fn step(&mut self) -> Result<SearchState, SearchError> {
        if self.frontier.is_empty() {
            return Ok(SearchState::Exhausted);
        }
        self.limits.check(self.expanded)?;

        let Some((node, position)) = self.frontier.pop_front() else {
            return Ok(SearchState::Exhausted);
        };
        self.expanded += 1;

        if position == self.goal {
            return Ok(SearchState::Found(node));
        }

        trace!(%position, frontier = self.frontier.len(), "expanding");
        for direction in self.world.legal_moves(position) {
            let next = self.world.apply_move(position, direction);
            if !self.visited.insert(next) {
                continue;
            }
            let child = self.tree.add_child(node, next);
            self.frontier.push_back((child, next));
        }
        Ok(SearchState::Running)
    }

    fn run(mut self) -> Result<SearchReport, SearchError> {
        let terminal = loop {
            match self.step()? {
                SearchState::Running => continue,
                SearchState::Found(node) => break Some(node),
                SearchState::Exhausted => break None,
            }
        };

        let outcome = match terminal {
            Some(node) => {
                let path = self.tree.path_to(node);
                SearchOutcome::Found(positions_to_directions(&path)?)
            }
            None => SearchOutcome::Unreachable,
        };

        Ok(SearchReport {
            outcome,
            visited: self.visited,
            expanded: self.expanded,
        })
    }
}

/// Everything one search produced.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Every position that was ever enqueued, start included.
    pub visited: FxHashSet<Position>,
    /// Number of frontier entries dequeued.
    pub expanded: usize,
}

impl SearchReport {
    pub fn explored_count(&self) -> usize {
        self.visited.len()
    }
}

/// Shortest-route solver using breadth-first search.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    limits: SearchLimits,
    last_visited: FxHashSet<Position>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        PathFinder {
            limits,
            last_visited: FxHashSet::default(),
        }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Runs one search from the world's cursor to `goal`.
    ///
    /// Returns `Ok` with [`SearchOutcome::Unreachable`] when no route exists;
    /// errors are reserved for invalid endpoints, an exhausted expansion
    /// budget, and internal faults.
    pub fn search(&self, world: &GridWorld, goal: Position) -> Result<SearchReport, SearchError> {
        let start = world.location();
        validate_endpoint(world, Endpoint::Start, start)?;
        validate_endpoint(world, Endpoint::Goal, goal)?;

        debug!(%start, %goal, "bfs search started");
        let report = Bfs::new(world, goal, self.limits).run()?;
        debug!(
            found = report.outcome.is_found(),
            explored = report.explored_count(),
            expanded = report.expanded,
            "bfs search finished"
        );
        Ok(report)
    }
}

impl MazeSolver for PathFinder {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn solve(&mut self, world: &GridWorld, goal: Position) -> Result<SearchOutcome, SearchError> {
        self.last_visited.clear();
        let report = self.search(world, goal)?;
        self.last_visited = report.visited;
        Ok(report.outcome)
    }

    fn explored_count(&self) -> usize {
        self.last_visited.len()
    }

    fn visited_positions(&self) -> &FxHashSet<Position> {
        &self.last_visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::error::PositionFault;
    use crate::grid::Grid;

    fn world(rows: &[&str], start: (isize, isize)) -> GridWorld {
        GridWorld::new(
            Grid::from_rows(rows).unwrap(),
            Position::new(start.0, start.1),
        )
    }

    #[test]
    fn start_equal_to_goal_is_an_empty_route() {
        let w = world(&["XXX", "X X", "XXX"], (1, 1));
        let mut finder = PathFinder::new();
        let outcome = finder.solve(&w, Position::new(1, 1)).unwrap();
        assert_eq!(outcome, SearchOutcome::Found(vec![]));
        assert_eq!(finder.explored_count(), 1);
    }

    #[test]
    fn corridor_route_goes_east_twice() {
        let w = world(&["XXXXX", "X   X", "XXXXX"], (1, 1));
        let outcome = PathFinder::new().solve(&w, Position::new(1, 3)).unwrap();
        assert_eq!(outcome, SearchOutcome::Found(vec![Direction::East, Direction::East]));
    }

    #[test]
    fn walled_off_goal_is_unreachable() {
        let w = world(&["XXX", "X X", "XXX", "X X", "XXX"], (1, 1));
        let mut finder = PathFinder::new();
        let outcome = finder.solve(&w, Position::new(3, 1)).unwrap();
        assert_eq!(outcome, SearchOutcome::Unreachable);
        assert_eq!(finder.explored_count(), 1);
    }

    #[test]
    fn unreachable_search_explores_the_whole_component() {
        let w = world(&["XXXXXX", "X  X X", "X  X X", "XXXXXX"], (1, 1));
        let mut finder = PathFinder::new();
        let outcome = finder.solve(&w, Position::new(1, 4)).unwrap();
        assert_eq!(outcome, SearchOutcome::Unreachable);
        assert_eq!(finder.explored_count(), 4);
        let expected: FxHashSet<Position> = [(1, 1), (1, 2), (2, 1), (2, 2)]
            .into_iter()
            .map(|(r, c)| Position::new(r, c))
            .collect();
        assert_eq!(finder.visited_positions(), &expected);
    }

    #[test]
    fn ties_are_broken_north_south_east_west() {
        // Two equally short routes around the pillar; South is tried before East.
        let w = world(&["XXXX", "X  X", "X  X", "XXXX"], (1, 1));
        let outcome = PathFinder::new().solve(&w, Position::new(2, 2)).unwrap();
        assert_eq!(outcome, SearchOutcome::Found(vec![Direction::South, Direction::East]));
    }

    #[test]
    fn follows_the_only_winding_route() {
        let w = world(
            &[
                "XXXXXXX",
                "X     X",
                "X XXX X",
                "X X   X",
                "X XXXXX",
                "X     X",
                "XXXXXXX",
            ],
            (3, 3),
        );
        let outcome = PathFinder::new().solve(&w, Position::new(5, 5)).unwrap();
        let route = outcome.route().unwrap();
        // East x2, North x2, West x4, South x4, East x4.
        assert_eq!(route.len(), 16);
    }

    #[test]
    fn visited_counts_enqueued_not_just_expanded() {
        // East is enqueued before West, so (1, 3) is expanded before the goal.
        let w = world(&["XXXXX", "X   X", "XXXXX"], (1, 2));
        let finder = PathFinder::new();
        let report = finder.search(&w, Position::new(1, 1)).unwrap();
        assert_eq!(report.outcome, SearchOutcome::Found(vec![Direction::West]));
        assert_eq!(report.explored_count(), 3);
        assert_eq!(report.expanded, 3);
    }

    #[test]
    fn rejects_wall_and_out_of_bounds_endpoints() {
        let w = world(&["XXX", "X X", "XXX"], (1, 1));
        let finder = PathFinder::new();
        assert_eq!(
            finder.search(&w, Position::new(0, 1)).unwrap_err(),
            SearchError::InvalidPosition {
                role: Endpoint::Goal,
                position: Position::new(0, 1),
                reason: PositionFault::Wall,
            }
        );
        assert_eq!(
            finder.search(&w, Position::new(-1, 1)).unwrap_err(),
            SearchError::InvalidPosition {
                role: Endpoint::Goal,
                position: Position::new(-1, 1),
                reason: PositionFault::OutOfBounds,
            }
        );

        let bad_start = w.with_location(Position::new(7, 7));
        assert!(matches!(
            finder.search(&bad_start, Position::new(1, 1)),
            Err(SearchError::InvalidPosition {
                role: Endpoint::Start,
                reason: PositionFault::OutOfBounds,
                ..
            })
        ));
    }

    #[test]
    fn failed_solve_clears_the_previous_snapshot() {
        let w = world(&["XXXXX", "X   X", "XXXXX"], (1, 1));
        let mut finder = PathFinder::new();
        finder.solve(&w, Position::new(1, 3)).unwrap();
        assert_eq!(finder.explored_count(), 3);
        assert!(finder.solve(&w, Position::new(0, 0)).is_err());
        assert_eq!(finder.explored_count(), 0);
    }

    #[test]
    fn expansion_budget_stops_the_search() {
        let w = world(&["XXXXXXX", "X     X", "XXXXXXX"], (1, 1));
        let finder = PathFinder::with_limits(SearchLimits::with_max_expansions(2));
        assert_eq!(
            finder.search(&w, Position::new(1, 5)).unwrap_err(),
            SearchError::ExpansionLimit { limit: 2 }
        );

        let roomy = PathFinder::with_limits(SearchLimits::with_max_expansions(5));
        let report = roomy.search(&w, Position::new(1, 5)).unwrap();
        assert_eq!(report.outcome.route().map(<[Direction]>::len), Some(4));
    }

    #[test]
    fn budget_does_not_mask_exhaustion() {
        // One open cell: the frontier empties after a single expansion.
        let w = world(&["XXX", "X X", "XXX", "X X", "XXX"], (1, 1));
        let finder = PathFinder::with_limits(SearchLimits::with_max_expansions(1));
        let report = finder.search(&w, Position::new(3, 1)).unwrap();
        assert_eq!(report.outcome, SearchOutcome::Unreachable);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let w = world(&["XXXXXX", "X    X", "X XX X", "X    X", "XXXXXX"], (1, 1));
        let mut finder = PathFinder::new();
        let first = finder.solve(&w, Position::new(3, 4)).unwrap();
        let first_visited = finder.visited_positions().clone();
        let second = finder.solve(&w, Position::new(3, 4)).unwrap();
        assert_eq!(first, second);
        assert_eq!(&first_visited, finder.visited_positions());
    }

    #[test]
    fn tree_reconstruction_walks_parents_to_the_root() {
        let (mut tree, root) = SearchTree::with_root(Position::new(0, 0));
        let a = tree.add_child(root, Position::new(0, 1));
        let b = tree.add_child(a, Position::new(1, 1));
        let _sibling = tree.add_child(root, Position::new(1, 0));
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.node(root).parent, None);
        assert_eq!(
            tree.path_to(b),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
        assert_eq!(tree.path_to(root), vec![Position::new(0, 0)]);
    }
}
