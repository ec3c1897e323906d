use std::collections::HashSet;

use tracing::debug;

use crate::error::{AssemblyError, Result};
use crate::geometry::{PointIndex, Polyline, Segment};

/// Assembles maximal polylines from an ordered segment sequence.
///
/// The input order is expected to group the segments of each polyline
/// contiguously, with each segment's `from` equal to the previous segment's
/// `to` within the run. That precondition is a caller contract and is not
/// checked: out-of-order input silently fragments into more, shorter
/// polylines than the true topology describes. Use
/// [`assemble_polylines_strict`] to detect the fragmentation signature
/// instead.
///
/// Degenerate segments are skipped entirely; they neither start nor extend a
/// chain. An empty or all-degenerate input yields an empty list.
///
/// Runs in a single forward pass, O(number of segments).
#[must_use]
pub fn assemble_polylines(segments: &[Segment]) -> Vec<Polyline> {
    let mut polylines = Vec::new();
    let mut current: Vec<PointIndex> = Vec::new();
    let mut previous_terminal: Option<PointIndex> = None;

    for segment in segments {
        if segment.is_degenerate() {
            continue;
        }

        if previous_terminal != Some(segment.from) {
            // Chain break: flush the completed chain and open a new one
            // starting at this segment's source vertex.
            if !current.is_empty() {
                polylines.push(Polyline::new(std::mem::take(&mut current)));
            }
            current.push(segment.from);
        }

        current.push(segment.to);
        previous_terminal = Some(segment.to);
    }

    if !current.is_empty() {
        polylines.push(Polyline::new(current));
    }

    debug!(polylines = polylines.len(), "assembled polylines");

    polylines
}

/// Assembles polylines while validating the contiguity precondition.
///
/// A chain break by itself is how a legitimate new polyline begins, so it
/// cannot be rejected. What a single pass can detect is a segment that
/// starts a new chain at the terminal vertex of an already-completed chain:
/// the fingerprint of a chain whose segments were not contiguous in the
/// input. On contiguity-respecting input this returns exactly what
/// [`assemble_polylines`] returns.
///
/// # Errors
///
/// Returns [`AssemblyError::OutOfOrderSegment`] for the first segment that
/// resumes a completed chain.
pub fn assemble_polylines_strict(segments: &[Segment]) -> Result<Vec<Polyline>> {
    let mut polylines = Vec::new();
    let mut current: Vec<PointIndex> = Vec::new();
    let mut previous_terminal: Option<PointIndex> = None;
    let mut completed_terminals: HashSet<PointIndex> = HashSet::new();

    for (position, segment) in segments.iter().enumerate() {
        if segment.is_degenerate() {
            continue;
        }

        if previous_terminal != Some(segment.from) {
            if completed_terminals.contains(&segment.from) {
                return Err(AssemblyError::OutOfOrderSegment {
                    position,
                    from: segment.from,
                    to: segment.to,
                }
                .into());
            }
            if !current.is_empty() {
                if let Some(terminal) = previous_terminal {
                    completed_terminals.insert(terminal);
                }
                polylines.push(Polyline::new(std::mem::take(&mut current)));
            }
            current.push(segment.from);
        }

        current.push(segment.to);
        previous_terminal = Some(segment.to);
    }

    if !current.is_empty() {
        polylines.push(Polyline::new(current));
    }

    Ok(polylines)
}
