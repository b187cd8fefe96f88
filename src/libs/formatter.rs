//! Text formatting helpers for table cells and exports.
//!
//! ## Examples
//!
//! ```rust
//! use taskdesk::libs::formatter::truncate;
//!
//! assert_eq!(truncate("short", 60), "short");
//! assert_eq!(truncate(&"x".repeat(61), 60), format!("{}...", "x".repeat(57)));
//! ```

use chrono::NaiveDateTime;

const ELLIPSIS: &str = "...";

/// Shortens `text` to at most `width` characters, ending with `...` when cut.
///
/// Counts characters rather than bytes so multi-byte text is never split
/// mid code point. Widths of 3 or less return the first `width` characters.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    if width <= ellipsis_len {
        return text.chars().take(width).collect();
    }

    let mut truncated: String = text.chars().take(width - ellipsis_len).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Formats a stored timestamp as `YYYY-MM-DD HH:MM` for display.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}
