//! Profile exchange format: a JSON array of `{ "x": number, "y": number }`.
//!
//! The same format is read on import and written on export.

use thiserror::Error;

use crate::{Point2D, MIN_PROFILE_POINTS};

/// Reasons an imported profile is rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Not a JSON array of objects with numeric `x` and `y`.
    #[error("invalid profile data: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed, but too short to define a profile.
    #[error("profile needs at least {min} points, got {0}", min = MIN_PROFILE_POINTS)]
    TooFewPoints(usize),
}

/// Parse an exchange file into an ordered point list.
pub fn parse_profile_json(json: &str) -> Result<Vec<Point2D>, ImportError> {
    let points: Vec<Point2D> = serde_json::from_str(json)?;
    if points.len() < MIN_PROFILE_POINTS {
        return Err(ImportError::TooFewPoints(points.len()));
    }
    Ok(points)
}

/// Serialize points into the exchange format (pretty-printed).
pub fn profile_to_json(points: &[Point2D]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(points)
}
