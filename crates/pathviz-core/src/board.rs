//! Editable board state: dimensions, endpoints and the blocked set.
//!
//! The [`Board`] is what an interactive front-end mutates in response to
//! clicks. Searches never see it directly; they get an immutable
//! [`Grid`] from [`Board::grid`].

use std::collections::BTreeSet;

use crate::error::GridError;
use crate::geom::{Coord, Dims};
use crate::grid::Grid;

/// Default board height, in rows.
pub const DEFAULT_ROWS: i32 = 20;
/// Default board width, in columns.
pub const DEFAULT_COLS: i32 = 40;
/// Default start cell.
pub const DEFAULT_START: Coord = Coord::new(10, 5);
/// Default goal cell.
pub const DEFAULT_GOAL: Coord = Coord::new(10, 35);

/// Which endpoint the next click will move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    #[default]
    None,
    Start,
    Goal,
}

/// What a [`Board::click`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    StartMoved,
    GoalMoved,
    Blocked,
    Unblocked,
    Ignored,
}

/// Mutable editor state. Start and goal are never blocked.
///
/// Deserialization goes through [`Board::new`]; blocks on an endpoint or
/// outside the board are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "BoardRepr", try_from = "BoardRepr")
)]
pub struct Board {
    dims: Dims,
    start: Coord,
    goal: Coord,
    blocked: BTreeSet<Coord>,
    selection: Selection,
    block_mode: bool,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BoardRepr {
    dims: Dims,
    start: Coord,
    goal: Coord,
    blocked: BTreeSet<Coord>,
    #[serde(default)]
    selection: Selection,
    #[serde(default)]
    block_mode: bool,
}

#[cfg(feature = "serde")]
impl From<Board> for BoardRepr {
    fn from(b: Board) -> Self {
        Self {
            dims: b.dims,
            start: b.start,
            goal: b.goal,
            blocked: b.blocked,
            selection: b.selection,
            block_mode: b.block_mode,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<BoardRepr> for Board {
    type Error = GridError;

    fn try_from(r: BoardRepr) -> Result<Self, GridError> {
        let mut board = Board::new(r.dims, r.start, r.goal)?;
        for c in r.blocked {
            if !board.toggle_block(c) {
                log::debug!("dropping block {c} on an endpoint or outside {}", r.dims);
            }
        }
        board.selection = r.selection;
        board.block_mode = r.block_mode;
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            dims: Dims::new(DEFAULT_ROWS, DEFAULT_COLS),
            start: DEFAULT_START,
            goal: DEFAULT_GOAL,
            blocked: BTreeSet::new(),
            selection: Selection::None,
            block_mode: false,
        }
    }
}

impl Board {
    /// Create an empty board. Both endpoints must lie inside `dims`.
    pub fn new(dims: Dims, start: Coord, goal: Coord) -> Result<Self, GridError> {
        if dims.is_empty() {
            return Err(GridError::EmptyDimensions {
                rows: dims.rows,
                cols: dims.cols,
            });
        }
        for coord in [start, goal] {
            if !dims.contains(coord) {
                return Err(GridError::OutOfBounds { coord, dims });
            }
        }
        Ok(Self {
            dims,
            start,
            goal,
            ..Self::default()
        })
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[inline]
    pub fn block_mode(&self) -> bool {
        self.block_mode
    }

    /// The blocked coordinates, in row-major order.
    #[inline]
    pub fn blocked(&self) -> &BTreeSet<Coord> {
        &self.blocked
    }

    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        self.blocked.contains(&c)
    }

    /// Move the start. A block under the new position is removed.
    pub fn set_start(&mut self, c: Coord) -> Result<(), GridError> {
        self.check_bounds(c)?;
        self.blocked.remove(&c);
        self.start = c;
        Ok(())
    }

    /// Move the goal. A block under the new position is removed.
    pub fn set_goal(&mut self, c: Coord) -> Result<(), GridError> {
        self.check_bounds(c)?;
        self.blocked.remove(&c);
        self.goal = c;
        Ok(())
    }

    /// Flip the blocked state of `c` and return whether anything changed.
    ///
    /// Endpoints and out-of-bounds coordinates are left alone.
    pub fn toggle_block(&mut self, c: Coord) -> bool {
        if c == self.start || c == self.goal || !self.dims.contains(c) {
            return false;
        }
        if !self.blocked.remove(&c) {
            self.blocked.insert(c);
        }
        true
    }

    /// Remove every block.
    pub fn clear_blocks(&mut self) {
        self.blocked.clear();
    }

    /// Arm the next click to move an endpoint.
    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn set_block_mode(&mut self, on: bool) {
        self.block_mode = on;
    }

    /// Handle a click on `c`.
    ///
    /// A pending selection wins and is consumed; otherwise block mode
    /// toggles the cell; otherwise nothing happens.
    pub fn click(&mut self, c: Coord) -> Result<ClickOutcome, GridError> {
        match self.selection {
            Selection::Start => {
                self.set_start(c)?;
                self.selection = Selection::None;
                Ok(ClickOutcome::StartMoved)
            }
            Selection::Goal => {
                self.set_goal(c)?;
                self.selection = Selection::None;
                Ok(ClickOutcome::GoalMoved)
            }
            Selection::None if self.block_mode => {
                if !self.toggle_block(c) {
                    return Ok(ClickOutcome::Ignored);
                }
                if self.is_blocked(c) {
                    Ok(ClickOutcome::Blocked)
                } else {
                    Ok(ClickOutcome::Unblocked)
                }
            }
            Selection::None => Ok(ClickOutcome::Ignored),
        }
    }

    /// A fresh immutable snapshot of the current configuration.
    pub fn grid(&self) -> Grid {
        Grid::with_blocked(self.dims, &self.blocked)
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), GridError> {
        if self.dims.contains(coord) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord,
                dims: self.dims,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Board {
        Board::new(Dims::new(3, 3), Coord::new(0, 0), Coord::new(2, 2)).unwrap()
    }

    #[test]
    fn default_matches_the_demo_layout() {
        let b = Board::default();
        assert_eq!(b.dims(), Dims::new(20, 40));
        assert_eq!(b.start(), Coord::new(10, 5));
        assert_eq!(b.goal(), Coord::new(10, 35));
        assert_eq!((b.start(), b.goal()), (DEFAULT_START, DEFAULT_GOAL));
        assert!(b.dims().contains(DEFAULT_START) && b.dims().contains(DEFAULT_GOAL));
        assert!(b.blocked().is_empty());
    }

    #[test]
    fn new_validates() {
        let d = Dims::new(3, 3);
        assert!(matches!(
            Board::new(Dims::new(0, 3), Coord::ZERO, Coord::ZERO),
            Err(GridError::EmptyDimensions { .. })
        ));
        assert_eq!(
            Board::new(d, Coord::new(3, 0), Coord::ZERO),
            Err(GridError::OutOfBounds {
                coord: Coord::new(3, 0),
                dims: d
            })
        );
    }

    #[test]
    fn toggle_block_roundtrip() {
        let mut b = small();
        let c = Coord::new(1, 1);
        assert!(b.toggle_block(c));
        assert!(b.is_blocked(c));
        assert!(b.toggle_block(c));
        assert!(!b.is_blocked(c));
    }

    #[test]
    fn endpoints_cannot_be_blocked() {
        let mut b = small();
        assert!(!b.toggle_block(Coord::new(0, 0)));
        assert!(!b.toggle_block(Coord::new(2, 2)));
        assert!(!b.toggle_block(Coord::new(9, 9)));
        assert!(b.blocked().is_empty());
    }

    #[test]
    fn moving_an_endpoint_onto_a_block_clears_it() {
        let mut b = small();
        b.toggle_block(Coord::new(1, 2));
        b.set_goal(Coord::new(1, 2)).unwrap();
        assert!(!b.is_blocked(Coord::new(1, 2)));
        assert!(b.grid().is_open(b.goal()));
        assert!(b.set_start(Coord::new(-1, 0)).is_err());
        assert_eq!(b.start(), Coord::new(0, 0));
    }

    #[test]
    fn click_dispatch() {
        let mut b = small();
        assert_eq!(b.click(Coord::new(1, 1)).unwrap(), ClickOutcome::Ignored);

        b.set_block_mode(true);
        assert_eq!(b.click(Coord::new(1, 1)).unwrap(), ClickOutcome::Blocked);
        assert_eq!(b.click(Coord::new(1, 1)).unwrap(), ClickOutcome::Unblocked);
        assert_eq!(b.click(Coord::new(0, 0)).unwrap(), ClickOutcome::Ignored);

        b.select(Selection::Start);
        assert_eq!(b.click(Coord::new(0, 1)).unwrap(), ClickOutcome::StartMoved);
        assert_eq!(b.start(), Coord::new(0, 1));
        assert_eq!(b.selection(), Selection::None);

        b.select(Selection::Goal);
        assert!(b.click(Coord::new(7, 7)).is_err());
        assert_eq!(b.selection(), Selection::Goal);
        assert_eq!(b.click(Coord::new(2, 0)).unwrap(), ClickOutcome::GoalMoved);
        assert_eq!(b.goal(), Coord::new(2, 0));
    }

    #[test]
    fn grid_snapshot_is_detached() {
        let mut b = small();
        b.toggle_block(Coord::new(1, 1));
        let g = b.grid();
        b.clear_blocks();
        assert!(!g.is_open(Coord::new(1, 1)));
        assert!(b.grid().is_open(Coord::new(1, 1)));
    }
}
