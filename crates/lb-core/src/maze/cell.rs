//! Cell kinds and grid coordinates

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{S_COLLECTIBLE, S_ENTRANCE, S_EXIT, S_OPEN, S_WALL};

/// What occupies a grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Wall = 0,
    Open = 1,
    Entrance = 2,
    Exit = 3,
    Collectible = 4,
}

impl CellKind {
    /// Anything but a wall can be walked through
    pub const fn is_traversable(&self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Get the display character for this cell kind
    pub const fn symbol(&self) -> char {
        match self {
            CellKind::Wall => S_WALL,
            CellKind::Open => S_OPEN,
            CellKind::Entrance => S_ENTRANCE,
            CellKind::Exit => S_EXIT,
            CellKind::Collectible => S_COLLECTIBLE,
        }
    }

    /// Inverse of [`CellKind::symbol`]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            S_WALL => Some(CellKind::Wall),
            S_OPEN => Some(CellKind::Open),
            S_ENTRANCE => Some(CellKind::Entrance),
            S_EXIT => Some(CellKind::Exit),
            S_COLLECTIBLE => Some(CellKind::Collectible),
            _ => None,
        }
    }
}

/// Neighbour deltas in search order: up, down, left, right
pub const NEIGHBOR_ORDER: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A (row, column) position. Signed so off-grid neighbours stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by a (row, col) delta
    pub const fn offset(self, delta: (i32, i32)) -> Self {
        Self {
            row: self.row + delta.0,
            col: self.col + delta.1,
        }
    }

    /// Cell halfway between two positions on the same row or column
    pub const fn midpoint(self, other: Coord) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// True when the two cells share an edge
    pub const fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }

    /// The four edge-sharing neighbours in search order
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_ORDER.into_iter().map(move |delta| self.offset(delta))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbols_roundtrip() {
        for kind in CellKind::iter() {
            assert_eq!(CellKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(CellKind::from_symbol('x'), None);
    }

    #[test]
    fn test_only_walls_block() {
        let blocking: Vec<_> = CellKind::iter().filter(|k| !k.is_traversable()).collect();
        assert_eq!(blocking, vec![CellKind::Wall]);
    }

    #[test]
    fn test_neighbors_order() {
        let around: Vec<_> = Coord::new(3, 3).neighbors().collect();
        assert_eq!(
            around,
            vec![
                Coord::new(2, 3),
                Coord::new(4, 3),
                Coord::new(3, 2),
                Coord::new(3, 4)
            ]
        );
        assert!(around.iter().all(|c| c.is_adjacent(Coord::new(3, 3))));
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Coord::new(1, 1).midpoint(Coord::new(1, 3)), Coord::new(1, 2));
        assert_eq!(Coord::new(5, 3).midpoint(Coord::new(3, 3)), Coord::new(4, 3));
    }
}
