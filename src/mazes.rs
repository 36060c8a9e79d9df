use crate::grid::{Cell, Grid, GridWorld, Position};
use rand::{Rng, SeedableRng};

/// A grid bundled with the endpoints it is usually solved between.
#[derive(Debug, Clone)]
pub struct Maze {
    pub name: String,
    pub grid: Grid,
    pub start: Position,
    pub goal: Position,
}

impl Maze {
    pub fn world(&self) -> GridWorld {
        GridWorld::new(self.grid.clone(), self.start)
    }

    /// Looks up one of the built-in mazes by name.
    pub fn builtin(name: &str) -> Option<Maze> {
        let (rows, start, goal): (&[&str], _, _) = match name {
            "classic" => (&CLASSIC[..], Position::new(1, 1), Position::new(19, 18)),
            "pocket" => (&POCKET[..], Position::new(1, 1), Position::new(3, 3)),
            "serpent" => (&SERPENT[..], Position::new(1, 1), Position::new(9, 3)),
            "ladder" => (&LADDER[..], Position::new(1, 1), Position::new(7, 7)),
            "open_field" => return Some(open_field()),
            _ => return None,
        };
        let grid = Grid::from_rows(rows).ok()?;
        Some(Maze {
            name: name.to_string(),
            grid,
            start,
            goal,
        })
    }

    /// Every built-in maze, in `BUILTIN_NAMES` order.
    pub fn all_builtin() -> Vec<Maze> {
        BUILTIN_NAMES.iter().filter_map(|name| Maze::builtin(name)).collect()
    }
}

pub const BUILTIN_NAMES: [&str; 5] = ["classic", "pocket", "serpent", "ladder", "open_field"];

const CLASSIC: [&str; 20] = [
    "XXXXXXXXXXXXXXXXXXXX",
    "X     X    X       X",
    "X XXXXX XXXX XXX XXX",
    "X       X      X X X",
    "X X XXX XXXXXX X X X",
    "X X   X        X X X",
    "X XXX XXXXXX XXXXX X",
    "X XXX    X X X     X",
    "X    XXX       XXXXX",
    "XXXXX   XXXXXX     X",
    "X   XXX X X    X X X",
    "XXX XXX X X XXXX X X",
    "X     X X   XX X X X",
    "XXXXX     XXXX X XXX",
    "X     X XXX    X   X",
    "X XXXXX X XXXX XXX X",
    "X X     X  X X     X",
    "X X XXXXXX X XXXXX X",
    "X X                X",
    "XXXXXXXXXXXXXXXXXX X",
];

const POCKET: [&str; 6] = ["XXXXXX", "X   XX", "X X XX", "X X XX", "XXXXXX", "XXXXXX"];

const SERPENT: [&str; 12] = [
    "XXXXXX", "X   XX", "X XXXX", "X   XX", "X X XX", "X X XX", "X X XX", "X X XX", "X XXXX",
    "X   XX", "XXXXXX", "XXXXXX",
];

const LADDER: [&str; 10] = [
    "XXXXXXXXXX",
    "X     X XX",
    "X X XXX XX",
    "X X     XX",
    "X XXXXXXXX",
    "X       XX",
    "X XXXXXXXX",
    "X       XX",
    "XXXXXXXXXX",
    "XXXXXXXXXX",
];

const OPEN_FIELD_ROWS: usize = 30;
const OPEN_FIELD_COLS: usize = 80;

/// A walled 30x80 room with an exit gap in the bottom-right corner.
fn open_field() -> Maze {
    let mut cells = vec![vec![Cell::Open; OPEN_FIELD_COLS]; OPEN_FIELD_ROWS];
    for (r, row) in cells.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if r == 0 || r == OPEN_FIELD_ROWS - 1 || c == 0 || c == OPEN_FIELD_COLS - 1 {
                *cell = Cell::Wall;
            }
        }
    }
    let exit = Position::new(OPEN_FIELD_ROWS as isize - 1, OPEN_FIELD_COLS as isize - 2);
    cells[exit.row as usize][exit.col as usize] = Cell::Open;
    Maze {
        name: "open_field".to_string(),
        grid: Grid::new(cells),
        start: Position::new(1, 1),
        goal: exit,
    }
}

/// Random maze with a wall border. Interior cells become walls with
/// probability `wall_density`; start (1, 1) and goal (rows-2, cols-2) are
/// always left open, but nothing guarantees they are connected.
///
/// Dimensions below 3 are raised to 3 so the interior is never empty.
pub fn random(rows: usize, cols: usize, wall_density: f64, seed: Option<u64>) -> Maze {
    let mut rng = match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };
    let rows = rows.max(3);
    let cols = cols.max(3);
    let density = if wall_density.is_nan() {
        0.0
    } else {
        wall_density.clamp(0.0, 1.0)
    };
    let start = Position::new(1, 1);
    let goal = Position::new(rows as isize - 2, cols as isize - 2);

    let mut cells = vec![vec![Cell::Open; cols]; rows];
    for (r, row) in cells.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            let border = r == 0 || r == rows - 1 || c == 0 || c == cols - 1;
            let pos = Position::new(r as isize, c as isize);
            if border || (pos != start && pos != goal && rng.gen_bool(density)) {
                *cell = Cell::Wall;
            }
        }
    }

    Maze {
        name: format!("random {}x{}", rows, cols),
        grid: Grid::new(cells),
        start,
        goal,
    }
}
