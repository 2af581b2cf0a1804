//! API route configuration.

use crate::api::handlers::{api_health_handler, list_urls_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Shorten a URL (or return the existing short link)
/// - `GET  /urls`    - List every shortened URL with click counts
/// - `GET  /health`  - API liveness check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route("/health", get(api_health_handler))
}
