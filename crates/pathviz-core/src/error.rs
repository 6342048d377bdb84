//! Errors raised while building grids or editing a [`Board`](crate::Board).

use thiserror::Error;

use crate::geom::{Coord, Dims};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    EmptyDimensions { rows: i32, cols: i32 },

    #[error("invalid cell key {0:?}, expected \"row,col\"")]
    InvalidKey(String),

    #[error("cell {coord} is outside the {dims} grid")]
    OutOfBounds { coord: Coord, dims: Dims },
}
