//! Syntactic validation of absolute URLs.
//!
//! Accepts `http`, `https`, `ftp` and `ftps` URLs whose host is a dotted
//! hostname, `localhost` or a dotted-quad IPv4 literal, with an optional port
//! and an optional path/query tail. No DNS resolution and no range checks on
//! ports or IPv4 octets.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled absolute URL pattern (case-insensitive).
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:",
        r"(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|localhost",
        r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}",
        r")",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("URL pattern is a valid regex")
});

/// Returns `true` if `candidate` is an acceptable absolute URL.
///
/// Total over all inputs: malformed strings (including the empty string)
/// simply yield `false`.
///
/// # Examples
///
/// ```
/// use tinylink::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://www.example.com/path?q=1"));
/// assert!(is_valid_url("http://localhost:5000"));
/// assert!(!is_valid_url("not-a-url"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    URL_REGEX.is_match(candidate)
}
