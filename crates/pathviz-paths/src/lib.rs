//! Shortest-path search on grids with blocked cells.
//!
//! [`search`] runs a uniform-cost (Dijkstra) search with unit edge weights
//! and orthogonal moves, and reports both the order in which cells were
//! finalized and the reconstructed path:
//!
//! ```
//! use pathviz_core::{Coord, build_grid};
//!
//! let grid = build_grid(3, 3, [Coord::new(1, 1)]).unwrap();
//! let result = pathviz_paths::search(&grid, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
//! assert_eq!(result.path.len(), 5);
//! assert_eq!(result.visited[0], Coord::new(0, 0));
//! ```
//!
//! [`Playback`] then turns a result into timed steps and grid frames for
//! animated display.
//!
//! | Item | Purpose |
//! |---|---|
//! | [`Pather`] | neighbour enumeration; implemented for [`Grid`](pathviz_core::Grid) |
//! | [`search`] / [`search_with`] | the engine |
//! | [`SearchResult`] | visitation order and path |
//! | [`Playback`] | step and frame sequences for a renderer |

mod distance;
mod error;
mod playback;
mod result;
mod search;
mod traits;

pub use distance::manhattan;
pub use error::SearchError;
pub use playback::{Frame, Frames, Mark, Playback, PlaybackConfig, Step, StepKind, Steps};
pub use result::SearchResult;
pub use search::{search, search_with};
pub use traits::Pather;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use pathviz_core::{Coord, build_grid};

    #[test]
    fn search_result_round_trip() {
        let grid = build_grid(2, 2, [Coord::new(0, 1)]).unwrap();
        let result = search(&grid, Coord::new(0, 0), Coord::new(1, 1)).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }

    #[test]
    fn playback_config_round_trip() {
        let cfg = PlaybackConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PlaybackConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
