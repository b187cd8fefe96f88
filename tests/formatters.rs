#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskdesk::libs::formatter::{format_timestamp, truncate};

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("", 60), "");
        assert_eq!(truncate("Buy milk", 60), "Buy milk");
    }

    #[test]
    fn test_truncate_at_boundary() {
        let exact = "a".repeat(60);
        assert_eq!(truncate(&exact, 60), exact);

        let long = "a".repeat(61);
        let truncated = truncate(&long, 60);
        assert_eq!(truncated, format!("{}...", "a".repeat(57)));
        assert_eq!(truncated.chars().count(), 60);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let arabic = "مهمة ".repeat(20);
        let truncated = truncate(&arabic, 60);
        assert_eq!(truncated.chars().count(), 60);
        assert!(truncated.ends_with("..."));
        assert!(arabic.starts_with(truncated.trim_end_matches("...")));
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("abcdef", 0), "");
    }

    #[test]
    fn test_format_timestamp() {
        let timestamp = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap().and_hms_milli_opt(8, 5, 9, 250).unwrap();
        assert_eq!(format_timestamp(&timestamp), "2025-03-07 08:05");
    }
}
