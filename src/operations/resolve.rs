use crate::error::{ResolveError, Result};
use crate::geometry::{PointTable, Polyline};
use crate::math::Point2;

/// Resolves a polyline's vertex indices to coordinates.
///
/// The returned coordinates are in vertex order. Resolution failing means
/// the loaded segment sequence referenced a point outside its own point
/// sequence — an external data-integrity problem, never an assembler one.
///
/// # Errors
///
/// Returns [`ResolveError::MissingPoint`] for the first vertex index with
/// no entry in the point table.
pub fn resolve_coordinates(polyline: &Polyline, table: &PointTable) -> Result<Vec<Point2>> {
    let mut coordinates = Vec::with_capacity(polyline.vertices.len());
    for &index in &polyline.vertices {
        let position = table
            .get(index)
            .ok_or(ResolveError::MissingPoint { index })?;
        coordinates.push(*position);
    }
    Ok(coordinates)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::IsotraceError;
    use crate::geometry::Point;

    #[test]
    fn resolves_in_vertex_order() {
        let table = PointTable::from_points(&[
            Point::new(0, 0.0, 0.0),
            Point::new(1, 1.0, 0.5),
            Point::new(2, 2.0, -0.5),
        ]);
        let polyline = Polyline::new(vec![2, 0, 1]);

        let coordinates = resolve_coordinates(&polyline, &table).unwrap();
        assert_eq!(coordinates.len(), 3);
        assert_relative_eq!(coordinates[0].x, 2.0);
        assert_relative_eq!(coordinates[0].y, -0.5);
        assert_relative_eq!(coordinates[1].x, 0.0);
        assert_relative_eq!(coordinates[2].y, 0.5);
    }

    #[test]
    fn repeated_vertex_resolves_twice() {
        let table =
            PointTable::from_points(&[Point::new(0, 1.0, 1.0), Point::new(1, 2.0, 2.0)]);
        let polyline = Polyline::new(vec![0, 1, 0]);

        let coordinates = resolve_coordinates(&polyline, &table).unwrap();
        assert_eq!(coordinates.len(), 3);
        assert_relative_eq!(coordinates[2].x, 1.0);
    }

    #[test]
    fn missing_point_reports_the_offending_index() {
        let table = PointTable::from_points(&[Point::new(0, 0.0, 0.0)]);
        let polyline = Polyline::new(vec![0, 42]);

        let err = resolve_coordinates(&polyline, &table).unwrap_err();
        assert!(matches!(
            err,
            IsotraceError::Resolve(ResolveError::MissingPoint { index: 42 })
        ));
    }
}
