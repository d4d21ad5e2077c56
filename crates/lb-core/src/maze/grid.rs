//! Grid model: the rectangular cell matrix a maze lives in

use std::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::{CellKind, Coord};
use crate::error::{MazeError, MazeResult};

/// Largest index along an axis of `len` cells, zero for an empty axis
fn last_index(len: usize) -> i32 {
    len.saturating_sub(1) as i32
}

/// Create a row-major matrix filled with walls
fn wall_cells(width: usize, height: usize) -> Vec<Vec<CellKind>> {
    vec![vec![CellKind::Wall; width]; height]
}

/// Rectangular maze grid
///
/// Cells are stored row-major (`cells[row][col]`). The grid only tracks the
/// collectible set; keeping it in step with pickups is up to the caller
/// (see [`crate::player::Player::try_move`]).
///
/// Deserializing goes through the same shape checks as [`Grid::from_rows`],
/// so a decoded grid never indexes outside its cell matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellKind>>,
    pub(crate) entrance: Coord,
    pub(crate) exit: Coord,
    pub(crate) collectibles: HashSet<Coord>,
}

impl Grid {
    /// A solid block of walls. Entrance and exit sit at the carving corners
    /// `(1, 1)` and `(height - 2, width - 2)` until changed, pulled back onto
    /// the grid when it is too small to hold them.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: wall_cells(width, height),
            entrance: Coord::new(last_index(height).min(1), last_index(width).min(1)),
            exit: Coord::new((height as i32 - 2).max(0), (width as i32 - 2).max(0)),
            collectibles: HashSet::new(),
        }
    }

    /// Build a grid from text rows using the map vocabulary
    /// (`#` wall, space open, `E` entrance, `S` exit, `*` collectible).
    ///
    /// The first `E` and `S` found become the entrance and exit; without
    /// them the defaults of [`Grid::new`] apply.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> MazeResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut grid = Grid::new(width, height);
        let mut entrance = None;
        let mut exit = None;

        for (r, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRows {
                    row: r,
                    expected: width,
                    found,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = Coord::new(r as i32, c as i32);
                let kind =
                    CellKind::from_symbol(ch).ok_or(MazeError::InvalidSymbol { symbol: ch, cell })?;
                match kind {
                    CellKind::Entrance if entrance.is_none() => entrance = Some(cell),
                    CellKind::Exit if exit.is_none() => exit = Some(cell),
                    CellKind::Collectible => {
                        grid.collectibles.insert(cell);
                    }
                    _ => {}
                }
                grid.cells[r][c] = kind;
            }
        }

        if let Some(cell) = entrance {
            grid.entrance = cell;
        }
        if let Some(cell) = exit {
            grid.exit = cell;
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn entrance(&self) -> Coord {
        self.entrance
    }

    pub fn exit(&self) -> Coord {
        self.exit
    }

    /// Cells currently holding a collectible
    pub fn collectibles(&self) -> &HashSet<Coord> {
        &self.collectibles
    }

    /// Drop a cell from the collectible set without touching its kind.
    /// Returns whether it was present.
    pub fn forget_collectible(&mut self, cell: Coord) -> bool {
        self.collectibles.remove(&cell)
    }

    /// Check if a coordinate lies inside the grid
    pub fn in_bounds(&self, cell: Coord) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height
            && (cell.col as usize) < self.width
    }

    fn index(&self, cell: Coord) -> MazeResult<(usize, usize)> {
        if self.in_bounds(cell) {
            Ok((cell.row as usize, cell.col as usize))
        } else {
            Err(MazeError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Kind of the cell at `cell`
    pub fn kind_at(&self, cell: Coord) -> MazeResult<CellKind> {
        let (r, c) = self.index(cell)?;
        Ok(self.cells[r][c])
    }

    /// Overwrite the kind of one cell. Transition legality is the caller's
    /// concern; only bounds are checked.
    pub fn set_kind(&mut self, cell: Coord, kind: CellKind) -> MazeResult<()> {
        let (r, c) = self.index(cell)?;
        self.cells[r][c] = kind;
        Ok(())
    }

    /// Unchecked read for callers that only address in-bounds cells
    pub(crate) fn get(&self, cell: Coord) -> CellKind {
        self.cells[cell.row as usize][cell.col as usize]
    }

    /// Unchecked write for callers that only address in-bounds cells
    pub(crate) fn put(&mut self, cell: Coord, kind: CellKind) {
        self.cells[cell.row as usize][cell.col as usize] = kind;
    }

    /// In bounds and not a wall
    pub fn is_traversable(&self, cell: Coord) -> bool {
        self.kind_at(cell).is_ok_and(|kind| kind.is_traversable())
    }

    /// Rows of cell kinds, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Every cell with its position, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &kind)| (Coord::new(r as i32, c as i32), kind))
        })
    }

    /// Number of cells of the given kind
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells().filter(|&(_, k)| k == kind).count()
    }
}

/// Wire shape of [`Grid`], checked before it becomes one
#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellKind>>,
    entrance: Coord,
    exit: Coord,
    collectibles: HashSet<Coord>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = MazeError;

    fn try_from(raw: RawGrid) -> MazeResult<Self> {
        if raw.width == 0 || raw.height == 0 {
            return Err(MazeError::EmptyGrid);
        }
        if raw.cells.len() != raw.height {
            return Err(MazeError::RowCount {
                expected: raw.height,
                found: raw.cells.len(),
            });
        }
        if let Some((row, cells)) = raw
            .cells
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != raw.width)
        {
            return Err(MazeError::RaggedRows {
                row,
                expected: raw.width,
                found: cells.len(),
            });
        }

        let grid = Grid {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
            entrance: raw.entrance,
            exit: raw.exit,
            collectibles: HashSet::new(),
        };
        grid.index(grid.entrance)?;
        grid.index(grid.exit)?;
        for &cell in &raw.collectibles {
            grid.index(cell)?;
        }
        Ok(Grid {
            collectibles: raw.collectibles,
            ..grid
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(CellKind::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&[
            "#######", //
            "#E  * #", //
            "### # #", //
            "#    S#", //
            "#######",
        ])
        .unwrap()
    }

    #[test]
    fn test_new_is_all_walls() {
        let grid = Grid::new(7, 9);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 9);
        assert_eq!(grid.count(CellKind::Wall), 63);
        assert_eq!(grid.exit(), Coord::new(7, 5));
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(7, 9);
        assert!(grid.in_bounds(Coord::new(0, 0)));
        assert!(grid.in_bounds(Coord::new(8, 6)));
        assert!(!grid.in_bounds(Coord::new(9, 0)));
        assert!(!grid.in_bounds(Coord::new(0, 7)));
        assert!(!grid.in_bounds(Coord::new(-1, 0)));
        assert!(!grid.in_bounds(Coord::new(0, -1)));
    }

    #[test]
    fn test_kind_at_out_of_bounds() {
        let grid = Grid::new(7, 7);
        let err = grid.kind_at(Coord::new(7, 0)).unwrap_err();
        assert_eq!(
            err,
            MazeError::OutOfBounds {
                cell: Coord::new(7, 0),
                width: 7,
                height: 7
            }
        );
    }

    #[test]
    fn test_set_kind() {
        let mut grid = Grid::new(7, 7);
        grid.set_kind(Coord::new(3, 3), CellKind::Open).unwrap();
        assert_eq!(grid.kind_at(Coord::new(3, 3)), Ok(CellKind::Open));
        assert_eq!(grid.count(CellKind::Open), 1);
        assert!(grid.set_kind(Coord::new(3, -1), CellKind::Open).is_err());
    }

    #[test]
    fn test_kind_at_is_idempotent() {
        let grid = sample();
        let cell = Coord::new(1, 4);
        let first = grid.kind_at(cell).unwrap();
        for _ in 0..10 {
            assert_eq!(grid.kind_at(cell).unwrap(), first);
        }
        assert_eq!(first, CellKind::Collectible);
    }

    #[test]
    fn test_from_rows_picks_up_markers() {
        let grid = sample();
        assert_eq!(grid.entrance(), Coord::new(1, 1));
        assert_eq!(grid.exit(), Coord::new(3, 5));
        assert_eq!(grid.collectibles().len(), 1);
        assert!(grid.collectibles().contains(&Coord::new(1, 4)));
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(Grid::from_rows::<&str>(&[]), Err(MazeError::EmptyGrid));
        assert_eq!(
            Grid::from_rows(&["###", "##"]),
            Err(MazeError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert!(matches!(
            Grid::from_rows(&["#x#"]),
            Err(MazeError::InvalidSymbol { symbol: 'x', .. })
        ));
    }

    #[test]
    fn test_display_roundtrips_text() {
        let grid = sample();
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(Grid::from_rows(&lines).unwrap(), grid);
    }

    #[test]
    fn test_tiny_grid_defaults_stay_on_the_grid() {
        let grid = Grid::from_rows(&["E"]).unwrap();
        assert_eq!(grid.entrance(), Coord::new(0, 0));
        assert_eq!(grid.exit(), Coord::new(0, 0));

        let grid = Grid::from_rows(&["  "]).unwrap();
        assert_eq!(grid.entrance(), Coord::new(0, 1));
        assert_eq!(grid.exit(), Coord::new(0, 0));
        assert!(grid.in_bounds(grid.entrance()));

        let grid = Grid::new(3, 3);
        assert_eq!(grid.entrance(), Coord::new(1, 1));
        assert_eq!(grid.exit(), Coord::new(1, 1));
    }

    #[test]
    fn test_json_roundtrip() {
        let grid = sample();
        let body = serde_json::to_string(&grid).unwrap();
        let decoded: Grid = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded, grid);
    }

    #[test]
    fn test_json_rejects_malformed_grids() {
        let decode = |body: &str| serde_json::from_str::<Grid>(body);
        let ends = r#""entrance":{"row":1,"col":1},"exit":{"row":5,"col":5},"collectibles":[]"#;

        let err = decode(&format!(r#"{{"width":7,"height":7,"cells":[],{ends}}}"#)).unwrap_err();
        assert!(err.to_string().contains("expected 7"), "{}", err);

        let row = r#"["Wall","Wall"]"#;
        let body = format!(r#"{{"width":3,"height":1,"cells":[{row}],{ends}}}"#);
        assert!(decode(&body).is_err());

        let row = r#"["Wall"]"#;
        let body = format!(
            r#"{{"width":1,"height":1,"cells":[{row}],"entrance":{{"row":0,"col":0}},"exit":{{"row":5,"col":5}},"collectibles":[]}}"#
        );
        assert!(decode(&body).unwrap_err().to_string().contains("outside"));

        let body = format!(r#"{{"width":0,"height":0,"cells":[],{ends}}}"#);
        assert!(decode(&body).is_err());
    }

    #[test]
    fn test_forget_collectible_leaves_kind() {
        let mut grid = sample();
        assert!(grid.forget_collectible(Coord::new(1, 4)));
        assert!(!grid.forget_collectible(Coord::new(1, 4)));
        assert_eq!(grid.kind_at(Coord::new(1, 4)), Ok(CellKind::Collectible));
    }
}
