//! Geometry primitives: [`Coord`] and [`Dims`].
//!
//! Coordinates are `(row, col)` pairs, rows growing down and columns growing
//! right. Everything that walks a grid does so in row-major order.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell coordinate on a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in the order up, down, left, right.
    ///
    /// Searches expand neighbours in exactly this order, so it decides which
    /// of several equally short paths gets returned.
    #[inline]
    pub const fn neighbors_4(self) -> [Coord; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

/// Formats as a `row,col` key.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Parses a `row,col` key, tolerating whitespace around either number.
impl FromStr for Coord {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidKey(s.to_owned());
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions. Valid coordinates are `0..rows` x `0..cols`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the dimensions describe zero cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for Dims {
    type Item = Coord;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// DimsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    next: usize,
    len: usize,
}

impl Iterator for DimsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.len {
            return None;
        }
        let c = self.dims.coord(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DimsIter {}
