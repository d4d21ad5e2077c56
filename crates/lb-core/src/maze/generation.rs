//! Maze generation
//!
//! Randomized recursive backtracker over the odd-coordinate lattice. Passages
//! are carved two cells at a time from `(1, 1)`, knocking down the wall in
//! between, so the result is a spanning tree: every carved cell is reachable
//! from every other and there are no loops.

use log::{debug, trace, warn};

use super::{CellKind, Coord, Grid};
use crate::consts::MIN_DIMENSION;
use crate::rng::GameRng;

/// Stride-2 carving directions: up, down, left, right
const CARVE_DIRS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Where carving starts (and where the entrance goes)
const CARVE_START: Coord = Coord::new(1, 1);

/// Clamp a dimension to the minimum and round it up to odd
fn normalize_dimension(n: usize) -> usize {
    let n = n.max(MIN_DIMENSION);
    if n % 2 == 0 { n + 1 } else { n }
}

/// Size and contents requested for a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeParams {
    pub width: usize,
    pub height: usize,
    pub collectibles: usize,
}

impl MazeParams {
    /// Dimensions are clamped to at least 7 and rounded up to odd
    pub fn new(width: usize, height: usize, collectibles: usize) -> Self {
        Self {
            width: normalize_dimension(width),
            height: normalize_dimension(height),
            collectibles,
        }
    }

    /// Number of cells on the odd lattice (carving waypoints)
    pub fn lattice_cells(&self) -> usize {
        ((self.width - 1) / 2) * ((self.height - 1) / 2)
    }
}

/// One pending step of the backtracker: a carved cell and its shuffled
/// stride-2 candidates, consumed front to back.
struct Frame {
    at: Coord,
    candidates: Vec<Coord>,
    next: usize,
}

impl Frame {
    fn enter(at: Coord, grid: &Grid, rng: &mut GameRng) -> Self {
        let mut candidates: Vec<Coord> = CARVE_DIRS
            .iter()
            .map(|&delta| at.offset(delta))
            .filter(|&c| carvable(grid, c))
            .collect();
        rng.shuffle(&mut candidates);
        Self {
            at,
            candidates,
            next: 0,
        }
    }
}

/// Strictly inside the outer border
fn carvable(grid: &Grid, cell: Coord) -> bool {
    cell.row > 0
        && cell.col > 0
        && (cell.row as usize) < grid.height() - 1
        && (cell.col as usize) < grid.width() - 1
}

/// Carve passages from `start` until every reachable lattice cell is open.
/// Returns the number of cells turned from wall to open.
///
/// Uses an explicit stack of frames so large grids cannot exhaust the call
/// stack; the visiting order is the same as the recursive formulation.
fn walkfrom(grid: &mut Grid, start: Coord, rng: &mut GameRng) -> usize {
    grid.put(start, CellKind::Open);
    let mut carved = 1;
    let mut stack = vec![Frame::enter(start, grid, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(&next) = frame.candidates.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let at = frame.at;

        if grid.get(next) != CellKind::Wall {
            continue;
        }

        trace!("carving {} -> {}", at, next);
        grid.put(at.midpoint(next), CellKind::Open);
        grid.put(next, CellKind::Open);
        carved += 2;

        stack.push(Frame::enter(next, grid, rng));
    }

    carved
}

/// Turn up to `count` random open cells into collectibles
fn scatter_collectibles(grid: &mut Grid, count: usize, rng: &mut GameRng) {
    let mut free: Vec<Coord> = grid
        .cells()
        .filter(|&(_, kind)| kind == CellKind::Open)
        .map(|(cell, _)| cell)
        .collect();
    rng.shuffle(&mut free);

    if count > free.len() {
        warn!(
            "requested {} collectibles but only {} free cells; placing {}",
            count,
            free.len(),
            free.len()
        );
    }

    for &cell in free.iter().take(count) {
        grid.put(cell, CellKind::Collectible);
        grid.collectibles.insert(cell);
    }
}

/// Generate a maze using the caller's RNG
pub fn generate_with_rng(params: &MazeParams, rng: &mut GameRng) -> Grid {
    let params = MazeParams::new(params.width, params.height, params.collectibles);
    let mut grid = Grid::new(params.width, params.height);

    let carved = walkfrom(&mut grid, CARVE_START, rng);

    let entrance = CARVE_START;
    let exit = Coord::new(params.height as i32 - 2, params.width as i32 - 2);
    grid.put(entrance, CellKind::Entrance);
    grid.put(exit, CellKind::Exit);
    grid.entrance = entrance;
    grid.exit = exit;

    scatter_collectibles(&mut grid, params.collectibles, rng);

    debug!(
        "generated {}x{} maze from seed {}: {} cells carved, {} collectibles",
        params.width,
        params.height,
        rng.seed(),
        carved,
        grid.collectibles.len()
    );
    grid
}

/// Generate a maze
///
/// `width` and `height` are clamped to at least 7 and rounded up to odd.
/// With a seed the maze is reproducible; without one it is seeded from
/// entropy. `collectibles` is clamped to the open cells left after carving.
pub fn generate(width: usize, height: usize, seed: Option<u64>, collectibles: usize) -> Grid {
    let mut rng = GameRng::from_optional_seed(seed);
    generate_with_rng(&MazeParams::new(width, height, collectibles), &mut rng)
}
