//! Station dataset error types.

use crate::domain::{InvalidStationCode, StationCode};

/// Errors that can occur while loading the station dataset.
///
/// Any of these is fatal at startup: the server never begins serving
/// with a partial catalog.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// Reading or parsing the source file failed
    #[error("failed to read station data: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a required column
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    /// A retained row carries a coordinate that is not a number
    #[error("row {row}: invalid {field} value {value:?}")]
    InvalidCoordinate {
        row: u64,
        field: &'static str,
        value: String,
    },

    /// A retained row carries a malformed short code
    #[error("row {row}: {source}")]
    InvalidCode {
        row: u64,
        #[source]
        source: InvalidStationCode,
    },

    /// Two retained rows share the same short code
    #[error("duplicate station code: {code}")]
    DuplicateCode { code: StationCode },
}
