use chrono::{DateTime, Utc};

/// Parses a BigCommerce timestamp. v2 endpoints send RFC 2822
/// (`Tue, 20 Nov 2012 00:00:00 +0000`), newer ones RFC 3339.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
