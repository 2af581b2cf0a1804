//! Handlers for health check endpoints.
//!
//! Both endpoints are static liveness checks and never touch the registry.

use axum::Json;

use crate::api::dto::health::{ApiHealthResponse, ServiceHealthResponse};

/// Service-level liveness check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "healthy", "service": "URL Shortener API" }
/// ```
pub async fn health_handler() -> Json<ServiceHealthResponse> {
    Json(ServiceHealthResponse {
        status: "healthy",
        service: "URL Shortener API",
    })
}

/// API liveness check.
///
/// # Endpoint
///
/// `GET /api/health`
pub async fn api_health_handler() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "ok",
        message: "URL Shortener API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
