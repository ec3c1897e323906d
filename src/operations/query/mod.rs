mod bounding_box;
mod length;

pub use bounding_box::{bounding_box, Aabb};
pub use length::polyline_length;
