//! Handler for listing shortened URLs.

use axum::{Json, extract::State};

use crate::api::dto::url_record::UrlRecordResponse;
use crate::state::AppState;

/// Lists every shortened URL, oldest first.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": "6f1c2a8e-4d0b-4f57-9a43-1c9c0d2b7e11",
///     "original_url": "https://www.example.com",
///     "short_code": "aB3xY9",
///     "short_url": "http://localhost:5000/aB3xY9",
///     "created_at": "2024-05-01T12:00:00Z",
///     "click_count": 3
///   }
/// ]
/// ```
pub async fn list_urls_handler(State(state): State<AppState>) -> Json<Vec<UrlRecordResponse>> {
    let items = state
        .registry
        .list_all()
        .into_iter()
        .map(|record| {
            let short_url = state.short_url(&record.short_code);
            UrlRecordResponse::from_record(record, short_url)
        })
        .collect();

    Json(items)
}
