//! Reading-time estimate attached to every post

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_WORDS_PER_MINUTE;

/// Estimated time to read a post body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingTime {
    /// Human readable summary, e.g. "3 min read"
    pub text: String,
    /// Exact estimate in minutes
    pub minutes: f64,
    /// Exact estimate in milliseconds
    pub time: u64,
    /// Number of words counted
    pub words: usize,
}

impl ReadingTime {
    /// Estimate reading time for a Markdown body
    pub fn estimate(body: &str, words_per_minute: u32) -> Self {
        let wpm = if words_per_minute == 0 {
            DEFAULT_WORDS_PER_MINUTE
        } else {
            words_per_minute
        };

        let words = count_words(body);
        let minutes = words as f64 / f64::from(wpm);
        let time = (minutes * 60_000.0).round() as u64;
        let text = format!("{} min read", minutes.ceil() as u64);

        Self {
            text,
            minutes,
            time,
            words,
        }
    }
}

/// Whitespace-separated tokens that contain at least one letter or digit.
/// Markdown punctuation like `#`, `-` or `>` on its own is not a word.
fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body() {
        let rt = ReadingTime::estimate("", 200);
        assert_eq!(rt.words, 0);
        assert_eq!(rt.time, 0);
        assert_eq!(rt.text, "0 min read");
    }

    #[test]
    fn test_markdown_punctuation_not_counted() {
        assert_eq!(count_words("# Title\n\n- one\n- two\n> quote"), 4);
    }

    #[test]
    fn test_estimate_rounds_up() {
        let body = "word ".repeat(450);
        let rt = ReadingTime::estimate(&body, 200);
        assert_eq!(rt.words, 450);
        assert!((rt.minutes - 2.25).abs() < f64::EPSILON);
        assert_eq!(rt.time, 135_000);
        assert_eq!(rt.text, "3 min read");
    }

    #[test]
    fn test_zero_wpm_uses_default() {
        let body = "word ".repeat(200);
        let rt = ReadingTime::estimate(&body, 0);
        assert_eq!(rt.text, "1 min read");
    }
}
