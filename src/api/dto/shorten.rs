//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// A missing field, an explicit `null` and an empty string are all reported
/// as "No URL provided".
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(
        required(message = "No URL provided"),
        length(min = 1, message = "No URL provided")
    )]
    pub original_url: Option<String>,
}

/// Short link returned by the shorten endpoint.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub click_count: u64,
}
