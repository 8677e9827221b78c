//! Utility functions for handling Telegram MarkdownV2 formatting
//!
//! MarkdownV2 requires escaping of special characters to prevent formatting
//! issues. This module provides the centralized escaping function used by
//! every handler that sends formatted text.

/// Escapes markdown special characters for MarkdownV2 parsing mode
///
/// # Example
/// ```
/// use gym_log_bot::utils::markdown::escape_markdown;
///
/// let text = "Training on 2024-03-15 (75 min)";
/// let escaped = escape_markdown(text);
/// assert_eq!(escaped, "Training on 2024\\-03\\-15 \\(75 min\\)");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '=' | '|'
                | '{' | '}' | '.' | '!'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_basic_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("_italic_"), "\\_italic\\_");
        assert_eq!(escape_markdown("`code`"), "\\`code\\`");
    }

    #[test]
    fn test_escape_dates_and_numbers() {
        assert_eq!(escape_markdown("2024-03-15"), "2024\\-03\\-15");
        assert_eq!(escape_markdown("22.5"), "22\\.5");
    }

    #[test]
    fn test_escape_brackets_and_parentheses() {
        assert_eq!(escape_markdown("[label](url)"), "\\[label\\]\\(url\\)");
        assert_eq!(escape_markdown("{x}"), "\\{x\\}");
    }

    #[test]
    fn test_escape_empty_and_plain_text() {
        assert_eq!(escape_markdown(""), "");
        assert_eq!(escape_markdown("plain text"), "plain text");
        assert_eq!(escape_markdown("123 ABC"), "123 ABC");
    }

    #[test]
    fn test_escape_complex_text() {
        let input = "Pullup: 3 sets (rest 90s) - done!";
        let expected = "Pullup: 3 sets \\(rest 90s\\) \\- done\\!";
        assert_eq!(escape_markdown(input), expected);
    }
}
