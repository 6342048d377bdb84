use pathviz_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// On a grid with no blocked cells this is the length of every shortest
/// path, counted in steps.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
