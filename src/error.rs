use thiserror::Error;

use crate::geometry::point::PointIndex;

/// Top-level error type for the isotrace library.
#[derive(Debug, Error)]
pub enum IsotraceError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Errors related to loading a curve from a textual source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read curve data")]
    Io(#[from] std::io::Error),

    #[error("malformed point on line {line}: {content:?}")]
    MalformedPoint { line: usize, content: String },

    #[error("malformed segment on line {line}: {content:?}")]
    MalformedSegment { line: usize, content: String },

    #[error("curve contains no points")]
    NoPoints,

    #[error("curve contains no segments")]
    NoSegments,
}

/// Errors related to polyline assembly (strict mode only).
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("segment {position} ({from} -> {to}) resumes a chain that was already completed")]
    OutOfOrderSegment {
        position: usize,
        from: PointIndex,
        to: PointIndex,
    },
}

/// Errors related to resolving polyline vertices to coordinates.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no point with index {index} in the point table")]
    MissingPoint { index: PointIndex },
}

/// Errors related to polyline queries.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query requires a non-empty polyline")]
    EmptyPolyline,
}

/// Convenience type alias for results using [`IsotraceError`].
pub type Result<T> = std::result::Result<T, IsotraceError>;
