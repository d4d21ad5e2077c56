//! Depth-first path search over a maze grid
//!
//! Neighbours are explored in the fixed order up, down, left, right. A cell
//! enters the visited set the first time it is reached and never leaves it,
//! so the search touches each cell at most once even on grids with loops.

use hashbrown::HashSet;
use log::debug;

use super::{Coord, Grid, NEIGHBOR_ORDER};
use crate::error::{MazeError, MazeResult};

/// Solve the maze from its entrance to its exit
pub fn solve(grid: &Grid) -> MazeResult<Vec<Coord>> {
    solve_between(grid, grid.entrance(), grid.exit())
}

/// Find a path from `origin` to `destination`, both ends inclusive.
///
/// Every non-wall cell is enterable, the entrance included, so the grid is
/// only borrowed and keeps its markers. The origin itself is not checked for
/// traversability. Returns `NotFound` when the destination cannot be reached
/// and `OutOfBounds` when either end lies off the grid.
pub fn solve_between(grid: &Grid, origin: Coord, destination: Coord) -> MazeResult<Vec<Coord>> {
    grid.kind_at(origin)?;
    grid.kind_at(destination)?;

    if origin == destination {
        return Ok(vec![origin]);
    }

    let mut visited: HashSet<Coord> = HashSet::new();
    visited.insert(origin);

    // (cell on the current path, index of the next direction to try)
    let mut stack: Vec<(Coord, usize)> = vec![(origin, 0)];

    while let Some(top) = stack.last_mut() {
        let (at, dir) = *top;
        if dir == NEIGHBOR_ORDER.len() {
            stack.pop();
            continue;
        }
        top.1 += 1;

        let next = at.offset(NEIGHBOR_ORDER[dir]);
        if !grid.is_traversable(next) || !visited.insert(next) {
            continue;
        }

        if next == destination {
            let mut path: Vec<Coord> = stack.iter().map(|&(cell, _)| cell).collect();
            path.push(next);
            debug!(
                "solved {} -> {} in {} steps ({} cells visited)",
                origin,
                destination,
                path.len() - 1,
                visited.len()
            );
            return Ok(path);
        }

        stack.push((next, 0));
    }

    debug!(
        "no path {} -> {} after visiting {} cells",
        origin,
        destination,
        visited.len()
    );
    Err(MazeError::NotFound {
        origin,
        destination,
    })
}
