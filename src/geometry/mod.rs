pub mod curve;
pub mod point;
pub mod polyline;
pub mod segment;

pub use curve::Curve;
pub use point::{Point, PointIndex, PointTable};
pub use polyline::Polyline;
pub use segment::Segment;
