use std::collections::HashMap;

use crate::math::Point2;

/// Identifier of a point, as assigned by the producing trace stage.
///
/// Indices are external data: they are not required to be zero-based,
/// contiguous, or sorted.
pub type PointIndex = i64;

/// An indexed 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The externally assigned index.
    pub index: PointIndex,
    /// The coordinates of the point.
    pub position: Point2,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(index: PointIndex, x: f64, y: f64) -> Self {
        Self {
            index,
            position: Point2::new(x, y),
        }
    }
}

/// Coordinate storage addressable by the original point index.
///
/// Lookup is keyed by the index itself rather than by position-minus-offset
/// arithmetic, so it stays correct for non-contiguous or unsorted indices.
#[derive(Debug, Clone, Default)]
pub struct PointTable {
    positions: HashMap<PointIndex, Point2>,
}

impl PointTable {
    /// Builds a table from a slice of points.
    ///
    /// If the same index occurs more than once, the last occurrence wins.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let positions = points.iter().map(|p| (p.index, p.position)).collect();
        Self { positions }
    }

    /// Returns the coordinates stored for `index`, if any.
    #[must_use]
    pub fn get(&self, index: PointIndex) -> Option<&Point2> {
        self.positions.get(&index)
    }

    /// Returns the number of stored points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
