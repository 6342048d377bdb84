//! The [`Grid`] type — an immutable snapshot of which cells are blocked.
//!
//! A `Grid` is built once from dimensions and a blocked set and never changes
//! afterwards. Editing happens on a [`Board`](crate::Board), which hands out a
//! fresh snapshot for every search.

use std::borrow::Borrow;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Coord, Dims};

/// A rectangular grid of [`Cell`]s stored row-major.
///
/// Serializes as its dimensions plus the blocked coordinates, and is rebuilt
/// through [`build_grid`] on the way back in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "GridRepr", try_from = "GridRepr")
)]
pub struct Grid {
    dims: Dims,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    dims: Dims,
    blocked: Vec<Coord>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        let blocked = g.iter().filter(|c| c.blocked).map(|c| c.coord).collect();
        Self {
            dims: g.dims,
            blocked,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self, GridError> {
        build_grid(r.dims.rows, r.dims.cols, r.blocked)
    }
}

/// Build a grid of `rows` x `cols` with the given cells blocked.
///
/// Blocked coordinates outside the grid are skipped. Fails if either
/// dimension is below 1.
pub fn build_grid<I>(rows: i32, cols: i32, blocked: I) -> Result<Grid, GridError>
where
    I: IntoIterator,
    I::Item: Borrow<Coord>,
{
    let dims = Dims::new(rows, cols);
    if dims.is_empty() {
        return Err(GridError::EmptyDimensions { rows, cols });
    }
    Ok(Grid::with_blocked(dims, blocked))
}

/// Like [`build_grid`], but from `"row,col"` string keys.
pub fn build_grid_from_keys<I>(rows: i32, cols: i32, keys: I) -> Result<Grid, GridError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let blocked = keys
        .into_iter()
        .map(|k| k.as_ref().parse::<Coord>())
        .collect::<Result<Vec<_>, _>>()?;
    build_grid(rows, cols, blocked)
}

impl Grid {
    /// Caller guarantees `dims` is non-empty.
    pub(crate) fn with_blocked<I>(dims: Dims, blocked: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Coord>,
    {
        let mut cells: Vec<Cell> = dims.iter().map(Cell::open).collect();
        for c in blocked {
            let c = *c.borrow();
            match dims.index(c) {
                Some(i) => cells[i].blocked = true,
                None => log::debug!("ignoring blocked cell {c} outside {dims} grid"),
            }
        }
        Self { dims, cells }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and not blocked.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        self.at(c).is_some_and(|cell| !cell.blocked)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.blocked).count()
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = build_grid(3, 2, [Coord::new(2, 1)]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
        assert_eq!(json, r#"{"dims":{"rows":3,"cols":2},"blocked":[{"row":2,"col":1}]}"#);
    }

    #[test]
    fn grid_rebuilt_from_dims_and_blocks() {
        let g: Grid = serde_json::from_str(r#"{"dims":{"rows":3,"cols":3},"blocked":[]}"#).unwrap();
        assert_eq!(g.cells().len(), 9);
        assert!(g.is_open(Coord::new(2, 2)));

        let bad = serde_json::from_str::<Grid>(r#"{"dims":{"rows":0,"cols":3},"blocked":[]}"#);
        assert!(bad.is_err());
        let old_shape = serde_json::from_str::<Grid>(r#"{"dims":{"rows":3,"cols":3},"cells":[]}"#);
        assert!(old_shape.is_err());
    }
}
