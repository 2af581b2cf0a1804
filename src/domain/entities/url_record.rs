//! URL record entity representing one shortening relationship.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A shortened URL together with its click counter.
///
/// Everything except `click_count` is fixed at creation. Records handed out by
/// [`crate::application::services::UrlRegistry`] are snapshots; mutating one
/// does not touch registry state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: Uuid,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: u64,
}

impl UrlRecord {
    /// Creates a fresh record with a random id, the current time and zero clicks.
    pub fn new(original_url: String, short_code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_url,
            short_code,
            created_at: Utc::now(),
            click_count: 0,
        }
    }

    /// Counts one visit and returns the updated total.
    pub(crate) fn increment_click_count(&mut self) -> u64 {
        self.click_count = self.click_count.saturating_add(1);
        self.click_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let before = Utc::now();
        let record = UrlRecord::new("https://example.com".to_string(), "abc123".to_string());

        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.short_code, "abc123");
        assert_eq!(record.click_count, 0);
        assert!(record.created_at >= before);
    }

    #[test]
    fn test_url_record_ids_are_unique() {
        let a = UrlRecord::new("https://example.com".to_string(), "aaaaaa".to_string());
        let b = UrlRecord::new("https://example.com".to_string(), "bbbbbb".to_string());

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_increment_click_count() {
        let mut record = UrlRecord::new("https://example.com".to_string(), "abc123".to_string());

        assert_eq!(record.increment_click_count(), 1);
        assert_eq!(record.increment_click_count(), 2);
        assert_eq!(record.click_count, 2);
    }
}
