//! Small formatting helpers for the card.

use chrono::{DateTime, Utc};

/// Format a timestamp for the card footer.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

/// Truncate a string to `max` characters, adding an ellipsis if needed.
#[must_use]
pub fn truncate_with_ellipsis(raw: &str, max: usize) -> String {
    let max = max.max(1);
    if raw.chars().count() <= max {
        raw.to_string()
    } else {
        let head: String = raw.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
