//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::domain::StationCode;
use crate::geo::{self, Unit, UnsupportedUnit};
use crate::stations::{StationCatalog, StationRecord};

use super::dto::*;
use super::state::AppState;

/// Unit label the public handler always requests.
const DISTANCE_UNIT: &str = "km";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/distance/:code1/:code2", get(distance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Distance between two stations identified by short code.
async fn distance(
    State(state): State<AppState>,
    Path((code1, code2)): Path<(String, String)>,
) -> Result<Json<DistanceResponse>, AppError> {
    let response = distance_between(&state.catalog, &code1, &code2)?;
    Ok(Json(response))
}

/// Resolve two short codes and compute the rounded distance between them.
fn distance_between(
    catalog: &StationCatalog,
    code1: &str,
    code2: &str,
) -> Result<DistanceResponse, AppError> {
    let from = parse_code(code1)?;
    let to = parse_code(code2)?;

    let (from, to) = resolve_pair(catalog, &from, &to)?;

    let unit = Unit::parse(DISTANCE_UNIT)?;
    let distance = geo::haversine(from.coords, to.coords, unit).round() as u64;

    Ok(DistanceResponse {
        from: from.name.clone(),
        to: to.name.clone(),
        distance,
        unit: unit.to_string(),
    })
}

/// Parse a raw path segment into a station code.
fn parse_code(raw: &str) -> Result<StationCode, AppError> {
    StationCode::parse(raw).map_err(|e| AppError::BadRequest {
        message: format!("invalid station code {raw:?}: {e}"),
    })
}

/// Look up both codes, reporting every code that fails to resolve.
fn resolve_pair<'a>(
    catalog: &'a StationCatalog,
    from: &StationCode,
    to: &StationCode,
) -> Result<(&'a StationRecord, &'a StationRecord), AppError> {
    let first = catalog.find(from);
    let second = catalog.find(to);

    if let (Some(first), Some(second)) = (first, second) {
        return Ok((first, second));
    }

    let mut missing = Vec::new();
    if first.is_none() {
        missing.push(from.as_str());
    }
    if second.is_none() {
        missing.push(to.as_str());
    }

    Err(AppError::NotFound {
        message: format!("unknown station code(s): {}", missing.join(", ")),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<UnsupportedUnit> for AppError {
    fn from(e: UnsupportedUnit) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!(%status, "{message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
