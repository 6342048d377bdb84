use pathviz_core::Coord;

/// Output of a single [`search`](crate::search) call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in the order their shortest distance was finalized.
    pub visited: Vec<Coord>,
    /// Start to goal inclusive, or empty if the goal is unreachable.
    pub path: Vec<Coord>,
}

impl SearchResult {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps from start to goal, or `None` if unreachable.
    #[inline]
    pub fn distance(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Whether `c` was finalized during the search.
    pub fn is_visited(&self, c: Coord) -> bool {
        self.visited.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_has_no_distance() {
        let r = SearchResult {
            visited: vec![Coord::ZERO],
            path: Vec::new(),
        };
        assert!(!r.is_reachable());
        assert_eq!(r.distance(), None);
        assert!(r.is_visited(Coord::ZERO));
    }

    #[test]
    fn distance_counts_steps() {
        let r = SearchResult {
            visited: vec![Coord::new(0, 0), Coord::new(0, 1)],
            path: vec![Coord::new(0, 0), Coord::new(0, 1)],
        };
        assert!(r.is_reachable());
        assert_eq!(r.distance(), Some(1));
        assert!(!r.is_visited(Coord::new(5, 5)));
    }
}
