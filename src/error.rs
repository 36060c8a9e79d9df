use crate::grid::Position;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which end of a search an invalid position was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Why a position cannot be used as a search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFault {
    OutOfBounds,
    Wall,
}

impl fmt::Display for PositionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFault::OutOfBounds => write!(f, "lies outside the grid"),
            PositionFault::Wall => write!(f, "is a wall"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("{role} position {position} {reason}")]
    InvalidPosition {
        role: Endpoint,
        position: Position,
        reason: PositionFault,
    },

    #[error("search abandoned after {limit} expansions")]
    ExpansionLimit { limit: usize },

    /// Reconstruction produced two consecutive positions that are not one
    /// cardinal step apart. Always a bug in the search, never bad input.
    #[error("internal error: reconstructed step {from} -> {to} is not a cardinal move")]
    NonAdjacentStep { from: Position, to: Position },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridParseError {
    #[error("maze text contains no rows")]
    Empty,

    #[error("unknown cell marker {ch:?} at row {row}, column {col} (expected 'X' or ' ')")]
    UnknownCell { row: usize, col: usize, ch: char },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid position {input:?}: expected \"row,col\"")]
pub struct PositionParseError {
    pub input: String,
}

/// Failures while assembling a maze from the command line.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("unknown maze {name:?} (built-in mazes: {available})")]
    UnknownMaze { name: String, available: String },

    #[error("could not read maze file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse maze file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: GridParseError,
    },
}
