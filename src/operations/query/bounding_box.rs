use crate::error::{QueryError, Result};
use crate::geometry::{PointTable, Polyline};
use crate::math::Point2;
use crate::operations::resolve::resolve_coordinates;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

/// Computes the axis-aligned bounding box of a polyline's resolved vertices.
///
/// # Errors
///
/// Returns [`QueryError::EmptyPolyline`] for a polyline with no vertices,
/// or a resolve error if a vertex index cannot be resolved.
pub fn bounding_box(polyline: &Polyline, table: &PointTable) -> Result<Aabb> {
    let coordinates = resolve_coordinates(polyline, table)?;
    let first = coordinates.first().ok_or(QueryError::EmptyPolyline)?;

    let mut min = *first;
    let mut max = *first;
    for p in &coordinates[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Ok(Aabb { min, max })
}
