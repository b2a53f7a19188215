//! Data transfer objects for web responses.

use serde::Serialize;

/// Result of a distance query.
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    /// Display name of the first station
    pub from: String,

    /// Display name of the second station
    pub to: String,

    /// Great-circle distance, rounded to the nearest whole unit
    pub distance: u64,

    /// Unit label for `distance`
    pub unit: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
