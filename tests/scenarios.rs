use maze_pathfinding::mazes::{self, Maze};
use maze_pathfinding::{
    Direction, Grid, GridWorld, MazeSolver, PathFinder, Position, SearchError, SearchLimits,
    SearchOutcome,
};
use pathfinding::prelude::bfs;

fn world(rows: &[&str], start: Position) -> GridWorld {
    GridWorld::new(Grid::from_rows(rows).unwrap(), start)
}

fn oracle_length(maze: &Maze) -> Option<usize> {
    let grid = &maze.grid;
    bfs(
        &maze.start,
        |p| {
            Direction::ALL
                .into_iter()
                .map(|d| {
                    let (dr, dc) = d.delta();
                    Position::new(p.row + dr, p.col + dc)
                })
                .filter(|n| grid.is_open(*n))
                .collect::<Vec<_>>()
        },
        |p| *p == maze.goal,
    )
    .map(|path| path.len() - 1)
}

#[test]
fn single_open_cell_solves_to_nothing() {
    let w = world(&["XXX", "X X", "XXX"], Position::new(1, 1));
    let mut finder = PathFinder::new();
    assert_eq!(finder.solve(&w, Position::new(1, 1)).unwrap(), SearchOutcome::Found(vec![]));
    assert_eq!(finder.explored_count(), 1);
    assert!(finder.visited_positions().contains(&Position::new(1, 1)));
}

#[test]
fn straight_corridor() {
    let w = world(&["XXXXX", "X   X", "XXXXX"], Position::new(1, 1));
    assert_eq!(
        PathFinder::new().solve(&w, Position::new(1, 3)).unwrap(),
        SearchOutcome::Found(vec![Direction::East, Direction::East])
    );
}

#[test]
fn wall_between_two_pockets() {
    let w = world(&["XXX", "X X", "XXX", "X X", "XXX"], Position::new(1, 1));
    assert_eq!(
        PathFinder::new().solve(&w, Position::new(3, 1)).unwrap(),
        SearchOutcome::Unreachable
    );
}

#[test]
fn adjacent_open_cells_are_connected() {
    let w = world(&["XXX", "X X", "X X", "XXX"], Position::new(1, 1));
    assert_eq!(
        PathFinder::new().solve(&w, Position::new(2, 1)).unwrap(),
        SearchOutcome::Found(vec![Direction::South])
    );
}

#[test]
fn ragged_maze_never_steps_past_a_short_row() {
    // Row 2 is short: (2, 3) does not exist, so the route must go around.
    let w = world(&["XXXXX", "X   X", "X X", "X   X", "XXXXX"], Position::new(1, 3));
    let outcome = PathFinder::new().solve(&w, Position::new(3, 3)).unwrap();
    assert_eq!(
        outcome,
        SearchOutcome::Found(vec![
            Direction::West,
            Direction::West,
            Direction::South,
            Direction::South,
            Direction::East,
            Direction::East,
        ])
    );
}

#[test]
fn builtin_mazes_match_the_oracle() {
    for maze in Maze::all_builtin() {
        let mut finder = PathFinder::new();
        let outcome = finder.solve(&maze.world(), maze.goal).unwrap();
        assert_eq!(
            outcome.route().map(<[Direction]>::len),
            oracle_length(&maze),
            "{}",
            maze.name
        );
        assert!(outcome.is_found(), "{} should be solvable", maze.name);
    }
}

#[test]
fn classic_maze_route_replays_to_the_exit() {
    let maze = Maze::builtin("classic").unwrap();
    let start = maze.world();
    let route = PathFinder::new()
        .search(&start, maze.goal)
        .unwrap()
        .outcome
        .route()
        .map(<[Direction]>::to_vec)
        .unwrap();
    let end = route.iter().fold(start, |w, d| w.neighbor(*d));
    assert_eq!(end.location(), Position::new(19, 18));
}

#[test]
fn seeded_random_mazes_match_the_oracle() {
    for seed in 0..25 {
        let maze = mazes::random(15, 21, 0.3, Some(seed));
        let outcome = PathFinder::new().solve(&maze.world(), maze.goal).unwrap();
        assert_eq!(
            outcome.route().map(<[Direction]>::len),
            oracle_length(&maze),
            "seed {}",
            seed
        );
    }
}

#[test]
fn expansion_budget_is_reported_separately_from_unreachable() {
    let maze = Maze::builtin("open_field").unwrap();
    let finder = PathFinder::with_limits(SearchLimits::with_max_expansions(100));
    assert_eq!(
        finder.search(&maze.world(), maze.goal).unwrap_err(),
        SearchError::ExpansionLimit { limit: 100 }
    );
}

#[test]
fn searches_share_nothing_between_instances() {
    let pocket = Maze::builtin("pocket").unwrap();
    let ladder = Maze::builtin("ladder").unwrap();
    let mut a = PathFinder::new();
    let mut b = PathFinder::new();
    a.solve(&pocket.world(), pocket.goal).unwrap();
    let pocket_explored = a.explored_count();
    b.solve(&ladder.world(), ladder.goal).unwrap();
    assert_eq!(a.explored_count(), pocket_explored);
    assert_ne!(a.visited_positions(), b.visited_positions());
}

#[test]
fn grid_can_be_shared_across_threads() {
    let maze = Maze::builtin("serpent").unwrap();
    let world = maze.world();
    let goal = maze.goal;
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let world = world.clone();
            std::thread::spawn(move || PathFinder::new().search(&world, goal).unwrap().outcome)
        })
        .collect();
    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outcomes.windows(2).all(|w| w[0] == w[1]));
}
