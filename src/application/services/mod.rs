//! Business logic services for the application layer.

pub mod registry;

pub use registry::{DEFAULT_MAX_ATTEMPTS, DynCodeGenerator, UrlRegistry};
