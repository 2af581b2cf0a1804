//! Application layer services implementing business logic.
//!
//! Services sit between the HTTP handlers and the domain model, enforcing
//! validation, deduplication and concurrency rules.
//!
//! # Available Services
//!
//! - [`services::registry::UrlRegistry`] - Short link creation, lookup and click accounting

pub mod services;
