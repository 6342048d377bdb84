use pathviz_core::{Coord, Grid};

/// Neighbor enumeration for a search.
pub trait Pather {
    /// Append the traversable neighbors of `c` into `buf`, in expansion
    /// order. The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Orthogonal moves only (up, down, left, right), skipping blocked and
/// out-of-bounds cells.
impl Pather for Grid {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(c.neighbors_4().into_iter().filter(|&n| self.is_open(n)));
    }
}
