//! lb-core: maze generation and solving for the labyrinth game
//!
//! This crate holds the grid model, the carving generator, the depth-first
//! solver and the player movement rules. It performs no I/O and is designed
//! to be pure and testable; presentation lives in the front-end crates.

pub mod config;
pub mod maze;
pub mod player;

mod consts;
mod error;
mod rng;

pub use config::{Difficulty, MazeConfig};
pub use consts::*;
pub use error::{MazeError, MazeResult};
pub use maze::{
    CellKind, Coord, Glyph, GlyphSet, Grid, MazeParams, PlainGlyphs, Rows, StyleHint, generate,
    generate_with_rng, solve, solve_between,
};
pub use player::{Direction, MoveOutcome, Player, ScoreEvent};
pub use rng::GameRng;
