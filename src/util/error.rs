//! Error types for detnms.

use crate::geometry::BBox;
use thiserror::Error;

/// Result alias for detnms operations.
pub type DetNmsResult<T> = std::result::Result<T, DetNmsError>;

/// Errors reported by the validating entry points.
///
/// The geometry, score filter, and NMS functions themselves never fail; these
/// errors come from `BBox::try_new`, `PostprocessConfig::validate`, and the
/// `Postprocessor` that rejects malformed input before running.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DetNmsError {
    /// Box coordinates are non-finite or inverted (`x2 < x1` or `y2 < y1`).
    #[error("malformed box ({x1}, {y1}, {x2}, {y2}): expected finite x1 <= x2 and y1 <= y2")]
    MalformedBox { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// A detection in the input pool carries a malformed box.
    #[error("malformed box at detection {index}: {bbox:?}")]
    MalformedDetection { index: usize, bbox: BBox },
    /// A threshold is NaN.
    #[error("invalid {name}: {value}")]
    InvalidThreshold { name: &'static str, value: f32 },
    /// A pool in a batch failed validation.
    #[error("batch pool {pool}: {source}")]
    BatchPool {
        pool: usize,
        #[source]
        source: Box<DetNmsError>,
    },
}
