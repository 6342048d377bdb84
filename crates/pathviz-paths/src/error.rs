use thiserror::Error;

use pathviz_core::{Coord, Dims};

/// Invalid endpoints passed to a search.
///
/// An unreachable goal is not an error: it yields an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("start {start} is outside the {dims} grid")]
    StartOutOfBounds { start: Coord, dims: Dims },

    #[error("goal {goal} is outside the {dims} grid")]
    GoalOutOfBounds { goal: Coord, dims: Dims },

    #[error("start {0} is blocked")]
    StartBlocked(Coord),

    #[error("goal {0} is blocked")]
    GoalBlocked(Coord),
}
