//! DTO for listed URL records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::UrlRecord;

/// One entry of `GET /api/urls`.
///
/// `created_at` serializes as RFC 3339 (ISO-8601).
#[derive(Debug, Serialize)]
pub struct UrlRecordResponse {
    pub id: Uuid,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: u64,
}

impl UrlRecordResponse {
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_code: record.short_code,
            short_url,
            created_at: record.created_at,
            click_count: record.click_count,
        }
    }
}
