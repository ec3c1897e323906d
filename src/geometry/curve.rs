use super::point::{Point, PointTable};
use super::segment::Segment;

/// The loader's output aggregate: an ordered point sequence and an ordered
/// segment sequence.
///
/// A curve is produced once by the loader and is read-only afterwards. The
/// segment order is expected to group the segments of each polyline
/// contiguously; see
/// [`assemble_polylines`](crate::operations::assemble_polylines) for what
/// happens when it does not.
#[derive(Debug, Clone)]
pub struct Curve {
    points: Vec<Point>,
    segments: Vec<Segment>,
}

impl Curve {
    /// Creates a curve from its point and segment sequences.
    #[must_use]
    pub fn new(points: Vec<Point>, segments: Vec<Segment>) -> Self {
        Self { points, segments }
    }

    /// The ordered point sequence.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The ordered segment sequence.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Builds a [`PointTable`] over this curve's points.
    #[must_use]
    pub fn point_table(&self) -> PointTable {
        PointTable::from_points(&self.points)
    }
}
