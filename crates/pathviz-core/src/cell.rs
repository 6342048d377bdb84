//! The [`Cell`] type — one grid position and whether it is blocked.

use crate::geom::Coord;

/// A grid cell. Identity is its coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub coord: Coord,
    pub blocked: bool,
}

impl Cell {
    /// An unblocked cell at `coord`.
    #[inline]
    pub const fn open(coord: Coord) -> Self {
        Self {
            coord,
            blocked: false,
        }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.coord.row
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.coord.col
    }
}
