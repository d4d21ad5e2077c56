//! Player movement and scoring
//!
//! The player is the collaborator that mutates a generated grid: it checks
//! moves against walls and picks up collectibles, keeping the grid's
//! collectible set in step with the cells it clears.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{POINTS_BUMP_WALL, POINTS_COLLECT, POINTS_REACH_EXIT, POINTS_STEP};
use crate::maze::{CellKind, Coord, Grid};

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Get the (row, col) delta for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Map a `wasd` key to a direction
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Things that change the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    Step,
    Collect,
    BumpWall,
    ReachExit,
}

impl ScoreEvent {
    pub const fn points(&self) -> i64 {
        match self {
            ScoreEvent::Step => POINTS_STEP,
            ScoreEvent::Collect => POINTS_COLLECT,
            ScoreEvent::BumpWall => POINTS_BUMP_WALL,
            ScoreEvent::ReachExit => POINTS_REACH_EXIT,
        }
    }
}

/// Result of a single move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Wall or grid edge; position unchanged
    Blocked,
    Moved,
    /// Moved onto a collectible and picked it up
    Collected,
    /// Moved onto the exit
    Escaped,
}

/// Player state: position and score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Coord,
    pub score: i64,
    pub collected: u32,
    pub moves: u32,
}

impl Player {
    /// Place a new player at the maze entrance
    pub fn new(grid: &Grid) -> Self {
        Self::at(grid.entrance())
    }

    pub fn at(pos: Coord) -> Self {
        Self {
            pos,
            score: 0,
            collected: 0,
            moves: 0,
        }
    }

    fn record(&mut self, event: ScoreEvent) {
        self.score += event.points();
        match event {
            ScoreEvent::Step | ScoreEvent::BumpWall => self.moves += 1,
            ScoreEvent::Collect => self.collected += 1,
            ScoreEvent::ReachExit => {}
        }
    }

    /// Try to step one cell. Walls and the grid edge cost a point and leave
    /// the player in place; collectibles are cleared from the grid.
    pub fn try_move(&mut self, grid: &mut Grid, dir: Direction) -> MoveOutcome {
        let target = self.pos.offset(dir.delta());
        let kind = match grid.kind_at(target) {
            Ok(kind) if kind.is_traversable() => kind,
            _ => {
                trace!("bumped into {} moving {}", target, dir);
                self.record(ScoreEvent::BumpWall);
                return MoveOutcome::Blocked;
            }
        };

        self.pos = target;
        self.record(ScoreEvent::Step);

        match kind {
            CellKind::Collectible => {
                grid.put(target, CellKind::Open);
                grid.forget_collectible(target);
                self.record(ScoreEvent::Collect);
                debug!("collected item at {} ({} so far)", target, self.collected);
                MoveOutcome::Collected
            }
            CellKind::Exit => {
                self.record(ScoreEvent::ReachExit);
                debug!("reached exit with score {}", self.score);
                MoveOutcome::Escaped
            }
            _ => MoveOutcome::Moved,
        }
    }

    /// Apply a string of `wasd` keys, stopping at the exit.
    /// Unknown keys are skipped. Returns the outcome of every move made.
    pub fn walk(&mut self, grid: &mut Grid, keys: &str) -> Vec<MoveOutcome> {
        let mut outcomes = Vec::new();
        for dir in keys.chars().filter_map(Direction::from_key) {
            let outcome = self.try_move(grid, dir);
            outcomes.push(outcome);
            if outcome == MoveOutcome::Escaped {
                break;
            }
        }
        outcomes
    }

    /// Step along a path without scoring, as when watching a solution play
    /// back. Entries equal to the current position are skipped; the walk
    /// stops at the first entry that is not an adjacent, traversable cell.
    /// Returns where the player ended up.
    pub fn follow(&mut self, grid: &Grid, path: &[Coord]) -> Coord {
        for &next in path {
            if next == self.pos {
                continue;
            }
            if !self.pos.is_adjacent(next) || !grid.is_traversable(next) {
                debug!("path breaks at {} after {}", next, self.pos);
                break;
            }
            self.pos = next;
        }
        self.pos
    }
}
