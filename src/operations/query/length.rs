use crate::error::Result;
use crate::geometry::{PointTable, Polyline};
use crate::operations::resolve::resolve_coordinates;

/// Computes the Euclidean length of a polyline.
///
/// The length is the sum of the straight segment lengths between
/// consecutive resolved vertices; a single-vertex polyline has length zero.
///
/// # Errors
///
/// Returns an error if a vertex index cannot be resolved.
pub fn polyline_length(polyline: &Polyline, table: &PointTable) -> Result<f64> {
    let coordinates = resolve_coordinates(polyline, table)?;
    let length = coordinates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).norm())
        .sum();
    Ok(length)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Point;

    #[test]
    fn length_3_4_5() {
        let table =
            PointTable::from_points(&[Point::new(0, 0.0, 0.0), Point::new(1, 3.0, 4.0)]);
        let polyline = Polyline::new(vec![0, 1]);
        let length = polyline_length(&polyline, &table).unwrap();
        assert_relative_eq!(length, 5.0);
    }

    #[test]
    fn closed_triangle_perimeter() {
        let table = PointTable::from_points(&[
            Point::new(0, 0.0, 0.0),
            Point::new(1, 3.0, 0.0),
            Point::new(2, 3.0, 4.0),
        ]);
        let polyline = Polyline::new(vec![0, 1, 2, 0]);
        let length = polyline_length(&polyline, &table).unwrap();
        assert_relative_eq!(length, 12.0);
    }

    #[test]
    fn single_vertex_has_zero_length() {
        let table = PointTable::from_points(&[Point::new(0, 1.0, 1.0)]);
        let polyline = Polyline::new(vec![0]);
        let length = polyline_length(&polyline, &table).unwrap();
        assert_relative_eq!(length, 0.0);
    }

    #[test]
    fn unresolvable_vertex_propagates() {
        let table = PointTable::from_points(&[Point::new(0, 0.0, 0.0)]);
        let polyline = Polyline::new(vec![0, 1]);
        assert!(polyline_length(&polyline, &table).is_err());
    }
}
