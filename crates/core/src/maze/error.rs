use std::error::Error;
use std::fmt;

use crate::types::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The carve start cell lies outside a non-empty grid.
    StartOutOfBounds { start: Pos, width: usize, depth: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { start, width, depth } => write!(
                f,
                "carve start ({}, {}) is outside the {width}x{depth} grid",
                start.x, start.z
            ),
        }
    }
}

impl Error for MazeError {}
