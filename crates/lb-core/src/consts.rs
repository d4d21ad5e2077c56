//! Core maze constants

/// Smallest width or height a generated maze may have
pub const MIN_DIMENSION: usize = 7;

/// Collectibles scattered per round when nothing else is requested
pub const DEFAULT_COLLECTIBLES: usize = 5;

/// Map symbols
pub const S_WALL: char = '#';
pub const S_OPEN: char = ' ';
pub const S_ENTRANCE: char = 'E';
pub const S_EXIT: char = 'S';
pub const S_COLLECTIBLE: char = '*';
pub const S_PLAYER: char = '@';
pub const S_TRAIL: char = '.';

/// Points awarded (or taken) per player event
pub const POINTS_STEP: i64 = 1;
pub const POINTS_COLLECT: i64 = 10;
pub const POINTS_BUMP_WALL: i64 = -1;
pub const POINTS_REACH_EXIT: i64 = 50;
