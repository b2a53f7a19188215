//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::StationCatalog;

/// Shared application state.
///
/// Holds the station catalog, which is immutable after startup and so
/// can be read by any number of concurrent handlers.
#[derive(Clone)]
pub struct AppState {
    /// Station catalog, loaded once at startup
    pub catalog: Arc<StationCatalog>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: StationCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
