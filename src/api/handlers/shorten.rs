//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link, or returns the existing one for an identical URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://www.example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://www.example.com",
///   "short_code": "aB3xY9",
///   "short_url": "http://localhost:5000/aB3xY9",
///   "click_count": 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON object of the expected
/// shape, or if the URL is missing, `null`, empty or fails validation.
/// Returns 500 Internal Server Error if no free short code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let original_url = payload.original_url.unwrap_or_default();
    let record = state.registry.add(&original_url)?;
    let short_url = state.short_url(&record.short_code);

    Ok(Json(ShortenResponse {
        original_url: record.original_url,
        short_code: record.short_code,
        short_url,
        click_count: record.click_count,
    }))
}
