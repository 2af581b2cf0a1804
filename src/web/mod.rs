//! Browser-facing pages.
//!
//! Uses Askama templates for server-side rendering; the page itself talks to
//! the JSON API from `static/script.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
