//! DTOs for health check endpoints.

use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct ServiceHealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}
