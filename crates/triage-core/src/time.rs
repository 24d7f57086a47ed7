//! Timestamp formatting.

use chrono::{SecondsFormat, Utc};

/// Returns the current UTC time as an ISO-8601 string with millisecond
/// precision and a `Z` suffix, the format persisted documents use for
/// `created`, `completion_time` and `created_at` fields.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso8601_shape() {
        let stamp = now_iso8601();
        assert!(stamp.ends_with('Z'));
        // e.g. 2026-08-06T12:34:56.789Z
        assert_eq!(stamp.len(), 24);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], "T");
    }
}
