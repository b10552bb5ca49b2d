//! Store utility functions.

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string (second precision).
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Milliseconds since the Unix epoch, the seed for new task ids.
pub(crate) fn epoch_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    duration.as_millis() as u64
}
