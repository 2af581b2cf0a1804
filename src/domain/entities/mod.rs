//! Core domain entities.
//!
//! - [`UrlRecord`] - A short code mapped to its original URL, with a click counter

pub mod url_record;

pub use url_record::UrlRecord;
