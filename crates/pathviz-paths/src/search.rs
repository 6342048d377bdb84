//! Single-source shortest-path search on a unit-weight grid.

use std::collections::BinaryHeap;

use pathviz_core::{Coord, Dims, Grid};

use crate::error::SearchError;
use crate::result::SearchResult;
use crate::traits::Pather;

const UNREACHABLE: u32 = u32::MAX;
const NO_PARENT: usize = usize::MAX;

/// Heap entry, ordered so the smallest `(dist, seq)` pops first.
///
/// `seq` increases every time a cell's distance improves, which makes ties
/// between equal distances resolve in discovery order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    dist: u32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest first.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the visitation order and the shortest path from `start` to
/// `goal` over the open cells of `grid`.
///
/// Moves are orthogonal with unit cost. Among cells at equal distance, the
/// one discovered first is finalized first, and neighbours are discovered in
/// up, down, left, right order. The search stops as soon as `goal` is
/// finalized. If `goal` cannot be reached, `visited` holds every reachable
/// cell and `path` is empty.
pub fn search(grid: &Grid, start: Coord, goal: Coord) -> Result<SearchResult, SearchError> {
    let dims = grid.dims();
    if !dims.contains(start) {
        return Err(SearchError::StartOutOfBounds { start, dims });
    }
    if !dims.contains(goal) {
        return Err(SearchError::GoalOutOfBounds { goal, dims });
    }
    if !grid.is_open(start) {
        return Err(SearchError::StartBlocked(start));
    }
    if !grid.is_open(goal) {
        return Err(SearchError::GoalBlocked(goal));
    }
    search_with(grid, dims, start, goal)
}

/// Same as [`search`], with neighbours supplied by an arbitrary [`Pather`]
/// over `dims`.
///
/// Only bounds are checked here; whether the endpoints are traversable is
/// up to the pather.
pub fn search_with<P: Pather>(
    pather: &P,
    dims: Dims,
    start: Coord,
    goal: Coord,
) -> Result<SearchResult, SearchError> {
    let si = dims
        .index(start)
        .ok_or(SearchError::StartOutOfBounds { start, dims })?;
    let gi = dims
        .index(goal)
        .ok_or(SearchError::GoalOutOfBounds { goal, dims })?;

    let len = dims.len();
    let mut dist = vec![UNREACHABLE; len];
    let mut parent = vec![NO_PARENT; len];
    let mut done = vec![false; len];
    let mut visited = Vec::new();

    let mut seq: u64 = 0;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    dist[si] = 0;
    open.push(NodeRef {
        idx: si,
        dist: 0,
        seq,
    });

    let mut nbuf: Vec<Coord> = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if done[ci] || current.dist != dist[ci] {
            continue;
        }
        done[ci] = true;

        let cp = dims.coord(ci);
        visited.push(cp);
        log::trace!("finalized {cp} at distance {}", current.dist);
        if ci == gi {
            break;
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = dims.index(np) else {
                continue;
            };
            if done[ni] {
                continue;
            }
            let tentative = current.dist + 1;
            if tentative >= dist[ni] {
                continue;
            }
            dist[ni] = tentative;
            parent[ni] = ci;
            seq += 1;
            open.push(NodeRef {
                idx: ni,
                dist: tentative,
                seq,
            });
        }
    }

    // Walk parents back from the goal; the walk only ends at the start if
    // the goal was reached.
    let mut path = Vec::new();
    let mut ci = gi;
    while parent[ci] != NO_PARENT {
        path.push(dims.coord(ci));
        ci = parent[ci];
    }
    if ci == si {
        path.push(start);
        path.reverse();
    } else {
        path.clear();
    }

    log::debug!(
        "search {start} -> {goal}: {} cells visited, path of {} cells",
        visited.len(),
        path.len()
    );

    Ok(SearchResult { visited, path })
}
