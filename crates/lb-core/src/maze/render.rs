//! Render adapter
//!
//! Turns a grid into display rows of `(char, StyleHint)` glyphs. Styling is
//! left to the front end; this module only decides what each cell shows and
//! which hint to attach. Characters come from a [`GlyphSet`] so front ends
//! with richer symbol sets can swap them in. [`PlainGlyphs`] is the default.

use hashbrown::HashSet;

use super::{CellKind, Coord, Grid};
use crate::consts::{S_PLAYER, S_TRAIL};

/// What a glyph represents, for front ends that apply styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleHint {
    Wall,
    Passage,
    Entrance,
    Exit,
    Collectible,
    /// The highlighted cell (usually the player)
    Highlight,
    /// A cell on an overlaid path
    Trail,
}

impl From<CellKind> for StyleHint {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Wall => StyleHint::Wall,
            CellKind::Open => StyleHint::Passage,
            CellKind::Entrance => StyleHint::Entrance,
            CellKind::Exit => StyleHint::Exit,
            CellKind::Collectible => StyleHint::Collectible,
        }
    }
}

/// One displayed cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub hint: StyleHint,
}

/// Source of display characters
pub trait GlyphSet {
    fn glyph(&self, hint: StyleHint) -> char;
}

/// The map vocabulary: `#`, space, `E`, `S`, `*`, `@` and `.`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainGlyphs;

impl GlyphSet for PlainGlyphs {
    fn glyph(&self, hint: StyleHint) -> char {
        match hint {
            StyleHint::Wall => CellKind::Wall.symbol(),
            StyleHint::Passage => CellKind::Open.symbol(),
            StyleHint::Entrance => CellKind::Entrance.symbol(),
            StyleHint::Exit => CellKind::Exit.symbol(),
            StyleHint::Collectible => CellKind::Collectible.symbol(),
            StyleHint::Highlight => S_PLAYER,
            StyleHint::Trail => S_TRAIL,
        }
    }
}

/// Lazy row-by-row rendering of a grid
///
/// Yields exactly `grid.height()` rows, top to bottom. Clone it to render
/// the same state again.
#[derive(Debug, Clone)]
pub struct Rows<'a, G = PlainGlyphs> {
    grid: &'a Grid,
    highlight: Option<Coord>,
    trail: HashSet<Coord>,
    glyphs: G,
    row: usize,
}

/// Render with the plain glyph set
pub fn rows(grid: &Grid, highlight: Option<Coord>) -> Rows<'_> {
    Rows::with_glyphs(grid, highlight, PlainGlyphs)
}

impl<'a, G: GlyphSet> Rows<'a, G> {
    pub fn with_glyphs(grid: &'a Grid, highlight: Option<Coord>, glyphs: G) -> Self {
        Self {
            grid,
            highlight,
            trail: HashSet::new(),
            glyphs,
            row: 0,
        }
    }

    /// Overlay a path. Entrance, exit and collectibles keep their own glyph.
    pub fn with_trail(mut self, trail: &[Coord]) -> Self {
        self.trail = trail.iter().copied().collect();
        self
    }

    fn cell_display(&self, cell: Coord, kind: CellKind) -> Glyph {
        let hint = if self.highlight == Some(cell) {
            StyleHint::Highlight
        } else if kind == CellKind::Open && self.trail.contains(&cell) {
            StyleHint::Trail
        } else {
            StyleHint::from(kind)
        };
        Glyph {
            ch: self.glyphs.glyph(hint),
            hint,
        }
    }
}

impl<G: GlyphSet> Iterator for Rows<'_, G> {
    type Item = Vec<Glyph>;

    fn next(&mut self) -> Option<Self::Item> {
        let kinds = self.grid.rows().nth(self.row)?;
        let r = self.row as i32;
        let line = kinds
            .iter()
            .enumerate()
            .map(|(c, &kind)| self.cell_display(Coord::new(r, c as i32), kind))
            .collect();
        self.row += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.height().saturating_sub(self.row);
        (left, Some(left))
    }
}

impl<G: GlyphSet> ExactSizeIterator for Rows<'_, G> {}

/// Flatten rendered rows into plain strings
pub fn to_lines<I>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = Vec<Glyph>>,
{
    rows.into_iter()
        .map(|row| row.iter().map(|g| g.ch).collect())
        .collect()
}
