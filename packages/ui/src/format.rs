//! Small display-formatting helpers shared by the views.

use chrono::DateTime;

/// Maximum number of characters shown in a list excerpt.
pub const EXCERPT_LEN: usize = 150;

/// The first [`EXCERPT_LEN`] characters of the content, with a trailing
/// ellipsis when something was cut. Content at or under the limit is returned
/// unmodified.
pub fn excerpt(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(EXCERPT_LEN).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Format an RFC 3339 timestamp for bylines, e.g. "May 1, 2024". Anything
/// that does not parse is shown as-is; empty input stays empty.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
