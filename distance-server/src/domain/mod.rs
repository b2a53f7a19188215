//! Domain types for the station distance server.
//!
//! This module contains the core domain model types that represent
//! validated station data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod coords;
mod station;

pub use coords::Coordinates;
pub use station::{InvalidStationCode, StationCode};
