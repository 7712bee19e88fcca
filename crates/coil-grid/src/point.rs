//! Integer grid coordinates.

use std::fmt;

/// A cell position on a grid.
///
/// Coordinates are signed so that direction arithmetic (differences and
/// offsets) stays in one type; validity against a concrete grid is checked
/// by [`Grid::contains`](crate::Grid::contains).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Horizontal coordinate, increasing rightward.
    pub x: i32,
    /// Vertical coordinate, increasing downward.
    pub y: i32,
}

impl Point {
    /// Create a point at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan_distance(&self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Component-wise difference `other − self`.
    ///
    /// For grid-adjacent points this is one of the four unit directions.
    pub fn direction_to(&self, other: Point) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    /// The point displaced by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
