use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// A `(row, col)` coordinate in a maze. Coordinates are signed so that
/// stepping off the edge of the grid produces an out-of-bounds point instead
/// of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Number of unit moves between `self` and `other` when only horizontal
    /// and vertical moves are allowed.
    pub fn manhattan_distance(&self, other: &Point) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    pub fn euclidean_distance(&self, other: &Point) -> f64 {
        let dr = f64::from(self.row - other.row);
        let dc = f64::from(self.col - other.col);
        (dr * dr + dc * dc).sqrt()
    }

    /// Whether the two points are 4-adjacent.
    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
