//! Error taxonomy for grid access, solving and fixture parsing

use thiserror::Error;

use crate::maze::Coord;

/// Result alias used throughout the crate
pub type MazeResult<T> = Result<T, MazeError>;

/// Errors that can occur while working with a maze
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        cell: Coord,
        width: usize,
        height: usize,
    },

    #[error("no path from {origin} to {destination}")]
    NotFound { origin: Coord, destination: Coord },

    #[error("unknown map symbol {symbol:?} at {cell}")]
    InvalidSymbol { symbol: char, cell: Coord },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("a grid needs at least one row and one column")]
    EmptyGrid,

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl MazeError {
    /// Whether this is the expected "no solution" outcome rather than a
    /// contract violation
    pub fn is_not_found(&self) -> bool {
        matches!(self, MazeError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = MazeError::OutOfBounds {
            cell: Coord::new(-1, 3),
            width: 7,
            height: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("(-1, 3)"));
        assert!(msg.contains("7x9"));
    }

    #[test]
    fn test_not_found_is_recoverable() {
        let err = MazeError::NotFound {
            origin: Coord::new(1, 1),
            destination: Coord::new(5, 5),
        };
        assert!(err.is_not_found());
        assert!(!MazeError::EmptyGrid.is_not_found());
    }
}
