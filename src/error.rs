use thiserror::Error;

/// Errors surfaced by the tessellation pipeline.
///
/// Input errors are rejected before the sweep starts and never silently
/// repaired. [`VoronoiError::OpenCell`] signals a topological inconsistency
/// during cell assembly; it indicates an upstream bug and is raised loudly
/// rather than emitting a malformed polygon.
#[derive(Debug, Error)]
pub enum VoronoiError {
    #[error("invalid bounding box [{min_x}, {min_y}] x [{max_x}, {max_y}]: min must be finite and strictly less than max on both axes")]
    InvalidBounds {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    #[error("sites must contain an even number of coordinates, got {len}")]
    OddCoordinates { len: usize },

    #[error("site {index} at ({x}, {y}) has a non-finite coordinate")]
    NonFiniteSite { index: usize, x: f64, y: f64 },

    #[error("site {index} at ({x}, {y}) lies outside the bounding box")]
    SiteOutOfBounds { index: usize, x: f64, y: f64 },

    #[error("cell for site {site} does not close into a simple cycle")]
    OpenCell { site: usize },
}
