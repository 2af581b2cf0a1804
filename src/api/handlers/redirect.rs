//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::error::RegistryError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the visit.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Request Flow
///
/// 1. Resolve the code (404 if unknown)
/// 2. Record one click
/// 3. Return 302 Found with `Location: <original_url>`
///
/// If the record disappears between steps 1 and 2 (a concurrent reset), the
/// redirect still goes out and the lost click is logged.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.registry.resolve(&short_code)?;

    match state.registry.record_click(&short_code) {
        Ok(clicks) => debug!(code = %short_code, clicks, "Click recorded"),
        Err(RegistryError::NotFound { .. }) => {
            warn!(code = %short_code, "Record vanished before click was counted")
        }
        Err(e) => return Err(e.into()),
    }

    let location = HeaderValue::try_from(record.original_url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "short_code": short_code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
