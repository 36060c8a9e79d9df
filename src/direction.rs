use std::fmt;

/// A cardinal move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// Canonical move table: enumeration order and `(row, col)` delta.
/// Both lookups below are derived from this list, and the order of entries
/// matches the declaration order of `Direction`.
pub const MOVES: [(Direction, (isize, isize)); 4] = [
    (Direction::North, (-1, 0)),
    (Direction::South, (1, 0)),
    (Direction::East, (0, 1)),
    (Direction::West, (0, -1)),
];

impl Direction {
    /// All directions in canonical move order.
    pub const ALL: [Direction; 4] = [
        MOVES[0].0,
        MOVES[1].0,
        MOVES[2].0,
        MOVES[3].0,
    ];

    /// Row/column delta of a single step in this direction.
    pub fn delta(self) -> (isize, isize) {
        MOVES[self as usize].1
    }

    /// Reverse lookup: the direction whose delta is exactly `delta`.
    pub fn from_delta(delta: (isize, isize)) -> Option<Direction> {
        MOVES
            .iter()
            .find(|(_, d)| *d == delta)
            .map(|(direction, _)| *direction)
    }

    /// Single-letter label used when printing routes.
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Formats a route as a compact letter string, e.g. `EESW`.
pub fn route_string(route: &[Direction]) -> String {
    route.iter().map(|d| d.letter()).collect()
}
