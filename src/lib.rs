//! # tinylink
//!
//! A small URL shortening service built with Axum. Long URLs are mapped to
//! six-character alphanumeric codes; visiting `/{code}` redirects to the
//! original URL and counts the click.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record entity and registry errors
//! - **Application Layer** ([`application`]) - The in-memory [`UrlRegistry`]
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - The HTML home page
//!
//! State lives only in memory and is lost when the process exits.
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:5000"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use application::services::UrlRegistry;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::UrlRegistry;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::error::RegistryError;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
