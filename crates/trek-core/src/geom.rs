//! Geometry primitives: [`Position`] and [`Bounds`].
//!
//! Coordinates are `(row, col)`: rows grow downwards, columns grow to the
//! right, and both start at zero in the top-left corner of a map.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A tile coordinate on a map layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours (up, down, left, right).
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether `other` shares an edge with `self`.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a map layer: rows `[0, height)` and columns `[0, width)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub height: i32,
    pub width: i32,
}

impl Bounds {
    /// Create new bounds. Negative extents are clamped to zero.
    #[inline]
    pub fn new(height: i32, width: i32) -> Self {
        Self {
            height: height.max(0),
            width: width.max(0),
        }
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(self) -> usize {
        (self.height as usize) * (self.width as usize)
    }

    /// Whether the bounds hold no tile at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.height <= 0 || self.width <= 0
    }

    /// Whether `p` lies inside the bounds.
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        p.row >= 0 && p.row < self.height && p.col >= 0 && p.col < self.width
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.width as usize + p.col as usize)
    }

    /// Inverse of [`Bounds::index`]. `idx` must be `< self.len()`.
    #[inline]
    pub fn position(self, idx: usize) -> Position {
        let w = self.width.max(1) as usize;
        Position::new((idx / w) as i32, (idx % w) as i32)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Position;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Row-major iterator over the positions of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.position(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}
