//! Domain layer containing business entities and errors.
//!
//! - [`entities`] - Core data structures
//! - [`error`] - Registry error kinds
//!
//! The domain layer has no dependency on the HTTP or application layers.

pub mod entities;
pub mod error;

pub use error::RegistryError;
