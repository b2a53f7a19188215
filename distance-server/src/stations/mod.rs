//! Station catalog: the long-distance subset of the station dataset.
//!
//! The catalog is loaded from a delimited file once at startup and is
//! immutable afterwards, so request handlers share it without locking.

mod catalog;
mod error;
mod load;

pub use catalog::{StationCatalog, StationRecord};
pub use error::DataLoadError;
