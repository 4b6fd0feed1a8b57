use trek_core::Position;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
