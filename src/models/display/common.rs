//! Common display utilities and helpers

use chrono::DateTime;

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Join a list for a table cell, `--` when empty
pub fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "--".to_string()
    } else {
        items.join(", ")
    }
}

/// Format Unix seconds as ISO datetime (YYYY-MM-DDTHH:MM:SSZ), `--` for zero or invalid
pub fn format_unix_seconds(secs: i64) -> String {
    if secs == 0 {
        return "--".to_string();
    }
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| "--".to_string())
}
