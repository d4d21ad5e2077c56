//! Maze system
//!
//! Contains the grid model, the carving generator, the path solver and the
//! render adapter consumed by front ends.

mod cell;
mod generation;
mod grid;
pub mod render;
mod solver;

pub use cell::{CellKind, Coord, NEIGHBOR_ORDER};
pub use generation::{MazeParams, generate, generate_with_rng};
pub use grid::Grid;
pub use render::{Glyph, GlyphSet, PlainGlyphs, Rows, StyleHint};
pub use solver::{solve, solve_between};
