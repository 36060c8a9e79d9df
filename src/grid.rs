use crate::direction::Direction;
use crate::error::{GridParseError, PositionParseError};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Text marker for a wall cell.
pub const WALL_MARKER: char = 'X';
/// Text marker for an open cell.
pub const OPEN_MARKER: char = ' ';

const CURSOR_HIGHLIGHT: &str = "\x1b[96m*\x1b[0m";

/// A `(row, col)` coordinate. Only meaningful relative to a particular grid;
/// nothing is checked at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub const fn new(row: isize, col: isize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance, used as the A* heuristic.
    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Parses `"row,col"`, tolerating surrounding whitespace and parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PositionParseError {
            input: s.to_string(),
        };
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Position { row, col })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    pub fn marker(self) -> char {
        match self {
            Cell::Open => OPEN_MARKER,
            Cell::Wall => WALL_MARKER,
        }
    }
}

/// Immutable occupancy grid. Rows may have different lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(cells: Vec<Vec<Cell>>) -> Self {
        Grid { cells }
    }

    /// Builds a grid from text rows, one string per row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridParseError> {
        if rows.is_empty() {
            return Err(GridParseError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref().trim_end_matches('\r');
            let parsed = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    WALL_MARKER => Ok(Cell::Wall),
                    OPEN_MARKER => Ok(Cell::Open),
                    _ => Err(GridParseError::UnknownCell { row, col, ch }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            cells.push(parsed);
        }
        Ok(Grid { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Length of one row, or `None` if the row does not exist.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.cells.get(row).map(Vec::len)
    }

    /// The cell at `position`, or `None` when it falls outside the grid.
    /// Column bounds are taken from the position's own row.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cell(position).is_some()
    }

    pub fn is_open(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Open)
    }

    /// Every open cell, row-major.
    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Open)
                .map(move |(c, _)| Position::new(r as isize, c as isize))
        })
    }

    pub fn count_walls(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Wall)
            .count()
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().collect();
        Grid::from_rows(&rows[..])
    }
}

impl fmt::Display for Grid {
    /// Writes the maze back out in its text format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| cell.marker()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A grid together with the agent's current location.
///
/// The grid is shared, so stepping the cursor with [`GridWorld::neighbor`]
/// is cheap and never copies cells.
#[derive(Debug, Clone)]
pub struct GridWorld {
    grid: Arc<Grid>,
    location: Position,
}

impl GridWorld {
    pub fn new(grid: Grid, location: Position) -> Self {
        GridWorld {
            grid: Arc::new(grid),
            location,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shared_grid(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    pub fn location(&self) -> Position {
        self.location
    }

    /// Same grid, different cursor.
    pub fn with_location(&self, location: Position) -> Self {
        GridWorld {
            grid: Arc::clone(&self.grid),
            location,
        }
    }

    /// Legal moves from `position` in canonical order (N, S, E, W).
    /// A step whose coordinates would overflow counts as off the grid.
    pub fn legal_moves(&self, position: Position) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|direction| {
                let (dr, dc) = direction.delta();
                match (position.row.checked_add(dr), position.col.checked_add(dc)) {
                    (Some(row), Some(col)) => self.grid.is_open(Position::new(row, col)),
                    _ => false,
                }
            })
            .collect()
    }

    /// `position` shifted by one step. No bounds check: only call this with a
    /// direction returned by [`GridWorld::legal_moves`] for the same position.
    pub fn apply_move(&self, position: Position, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position::new(position.row + dr, position.col + dc)
    }

    /// A new world with the cursor advanced one step.
    pub fn neighbor(&self, direction: Direction) -> GridWorld {
        self.with_location(self.apply_move(self.location, direction))
    }

    /// Console rendering with a bare `*` at the cursor.
    pub fn render_plain(&self) -> String {
        self.render_with("*")
    }

    fn render_with(&self, cursor: &str) -> String {
        let mut out = String::new();
        for (r, row) in self.grid.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if Position::new(r as isize, c as isize) == self.location {
                    out.push_str(cursor);
                } else {
                    out.push(cell.marker());
                }
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(CURSOR_HIGHLIGHT))
    }
}
