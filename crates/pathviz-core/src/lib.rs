//! **pathviz-core** — grid model for shortest-path visualisation.
//!
//! This crate provides the data the search engine reads: row/column
//! geometry, blocked/unblocked cells, immutable [`Grid`] snapshots, and the
//! editable [`Board`] a front-end mutates between searches.

pub mod board;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use board::{Board, ClickOutcome, Selection};
pub use cell::Cell;
pub use error::GridError;
pub use geom::{Coord, Dims};
pub use grid::{Grid, build_grid, build_grid_from_keys};
