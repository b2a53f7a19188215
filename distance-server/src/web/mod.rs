//! Web layer for the station distance server.
//!
//! Provides the HTTP endpoint for distance queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
