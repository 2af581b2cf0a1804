//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<UrlRegistry>,
    /// Public prefix for short URLs, without trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(registry: Arc<UrlRegistry>, base_url: &str) -> Self {
        Self {
            registry,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Builds the fully-qualified short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
