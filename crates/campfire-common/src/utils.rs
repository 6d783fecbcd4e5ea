//! Shared text helpers used when building embeds.

use chrono::{DateTime, Utc};

/// Maximum length of an embed field value accepted by Discord.
pub const EMBED_FIELD_VALUE_LIMIT: usize = 1024;

/// Maximum length of an embed description accepted by Discord.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Formats a date the way profile embeds show it, e.g. `Nov 05, 2021`.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %d, %Y").to_string()
}

/// Formats a unix timestamp (seconds) as a profile date.
///
/// Returns `None` when the timestamp is out of chrono's range.
pub fn format_unix_date(seconds: i64) -> Option<String> {
    DateTime::from_timestamp(seconds, 0).map(format_date)
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Wraps text in a fenced code block.
pub fn code_block(input: &str) -> String {
    format!("```\n{input}```")
}

/// Truncates a string to at most `max_chars` characters, ending with an
/// ellipsis when anything was cut.
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }

    let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let timestamp = Utc.with_ymd_and_hms(2021, 11, 5, 12, 0, 0).unwrap();
        assert_eq!(format_date(timestamp), "Nov 05, 2021");
    }

    #[test]
    fn test_format_unix_date() {
        assert_eq!(format_unix_date(0).as_deref(), Some("Jan 01, 1970"));
        assert!(format_unix_date(i64::MAX).is_none());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("kick"), "Kick");
        assert_eq!(capitalize("uNBAN"), "Unban");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_code_block() {
        assert_eq!(code_block("camp kick"), "```\ncamp kick```");
    }

    #[test]
    fn test_truncate_string() {
        let input = "This is a very long string that should be truncated";
        assert_eq!(truncate_string(input, 20), "This is a very lo...");
        assert_eq!(truncate_string("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        let input = "ééééééééé";
        assert_eq!(truncate_string(input, 5), "éé...");
    }
}
