//! Creation and modification timestamps for documents.

use time::OffsetDateTime;

/// The field that records when a document was last modified.
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// The current time in UTC, truncated to whole seconds.
pub fn now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();

    now.replace_nanosecond(0).unwrap_or(now)
}
