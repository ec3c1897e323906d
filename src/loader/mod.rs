//! Textual curve loading.
//!
//! Format, one curve per input:
//! - one point per line, `index<TAB>x y`, until the first blank line;
//! - one segment per line, `from to`, until end of input.
//!
//! Any run of whitespace separates fields. Numeric parse failures are loader
//! errors; the core never sees unvalidated data.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::geometry::{Curve, Point, Segment};

/// Loads a curve from a file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened or read, or any
/// [`parse_curve`] error.
pub fn load_curve(path: impl AsRef<Path>) -> Result<Curve, LoadError> {
    let file = File::open(path)?;
    parse_curve(BufReader::new(file))
}

/// Parses a curve from a buffered reader.
///
/// # Errors
///
/// Returns [`LoadError::MalformedPoint`] or [`LoadError::MalformedSegment`]
/// for a line that does not match the format, and [`LoadError::NoPoints`] or
/// [`LoadError::NoSegments`] if either section is empty.
pub fn parse_curve(reader: impl BufRead) -> Result<Curve, LoadError> {
    let mut points = Vec::new();
    let mut segments = Vec::new();
    let mut in_points = true;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            // The first blank line separates the sections; later blank
            // lines are ignored.
            in_points = false;
            continue;
        }

        if in_points {
            points.push(parse_point(trimmed, number + 1)?);
        } else {
            segments.push(parse_segment(trimmed, number + 1)?);
        }
    }

    if points.is_empty() {
        return Err(LoadError::NoPoints);
    }
    if segments.is_empty() {
        return Err(LoadError::NoSegments);
    }

    debug!(
        points = points.len(),
        segments = segments.len(),
        "loaded curve"
    );

    Ok(Curve::new(points, segments))
}

fn parse_point(line: &str, number: usize) -> Result<Point, LoadError> {
    let malformed = || LoadError::MalformedPoint {
        line: number,
        content: line.to_owned(),
    };

    let mut fields = line.split_whitespace();
    let index = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    let x = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    let y = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }
    Ok(Point::new(index, x, y))
}

fn parse_segment(line: &str, number: usize) -> Result<Segment, LoadError> {
    let malformed = || LoadError::MalformedSegment {
        line: number,
        content: line.to_owned(),
    };

    let mut fields = line.split_whitespace();
    let from = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    let to = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }
    Ok(Segment::new(from, to))
}
