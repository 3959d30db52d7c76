//! Bullet length heuristic for `\resumeItem{...}` lines.
//!
//! # Rule
//! A bullet is rebalanced only when its content is longer than
//! [`MAX_BULLET_CHARS`] characters AND has more than [`MIN_SPLIT_WORDS`] words.
//! The break point is the first word at or after the midpoint that ends in
//! `.`, `,`, `;` or `:`; without one, the midpoint itself.
//!
//! The two halves are joined back with a single space into one item. This
//! normalises whitespace and marks the break, but it does not change how the
//! bullet wraps when typeset. It is a best-effort heuristic, not a guarantee.

use regex::Regex;

use crate::errors::Result;

pub const MAX_BULLET_CHARS: usize = 120;
pub const MIN_SPLIT_WORDS: usize = 15;

const ITEM_MARKER: &str = "\\resumeItem{";
const BREAK_PUNCTUATION: [char; 4] = ['.', ',', ';', ':'];

/// Applies the bullet heuristic line by line.
pub struct BulletLimiter {
    item: Regex,
}

impl BulletLimiter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            item: Regex::new(r"\\resumeItem\{([^}]+)\}")?,
        })
    }

    /// Rewrites every over-long bullet line in `content`. Other lines pass through untouched.
    pub fn enforce(&self, content: &str) -> String {
        content
            .split('\n')
            .map(|line| self.enforce_line(line).unwrap_or_else(|| line.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the replacement for `line`, or `None` when it is left as is.
    ///
    /// A replaced line is exactly `\resumeItem{...}`: indentation and anything
    /// after the first closing brace are dropped.
    fn enforce_line(&self, line: &str) -> Option<String> {
        if !line.contains(ITEM_MARKER) {
            return None;
        }
        let content = self.item.captures(line)?.get(1)?.as_str();
        if content.chars().count() <= MAX_BULLET_CHARS {
            return None;
        }

        let words: Vec<&str> = content.split_whitespace().collect();
        if words.len() <= MIN_SPLIT_WORDS {
            return None;
        }

        let break_point = find_break_point(&words);
        let first = words[..break_point].join(" ");
        let second = words[break_point..].join(" ");
        Some(format!("\\resumeItem{{{first} {second}}}"))
    }
}

/// Index just after the first punctuated word at or after the midpoint, else the midpoint.
fn find_break_point(words: &[&str]) -> usize {
    let mid = words.len() / 2;
    words[mid..]
        .iter()
        .position(|w| w.ends_with(BREAK_PUNCTUATION))
        .map(|offset| mid + offset + 1)
        .unwrap_or(mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter() -> BulletLimiter {
        BulletLimiter::new().unwrap()
    }

    #[test]
    fn test_short_bullet_unchanged() {
        let line = "    \\resumeItem{Built a small   tool}";
        assert_eq!(limiter().enforce(line), line);
    }

    #[test]
    fn test_exactly_threshold_unchanged() {
        let content = "a".repeat(MAX_BULLET_CHARS);
        let line = format!("  \\resumeItem{{{content}}}");
        assert_eq!(limiter().enforce(&line), line);
    }

    #[test]
    fn test_non_bullet_lines_pass_through() {
        let text = "\\section{Experience}\n\n  \\resumeSubheading{A}{B}{C}{D}";
        assert_eq!(limiter().enforce(text), text);
    }

    #[test]
    fn test_long_but_few_words_unchanged() {
        // > 120 chars but only 10 words.
        let content = vec!["abcdefghijklmnop"; 10].join(" ");
        assert!(content.len() > MAX_BULLET_CHARS);
        let line = format!("  \\resumeItem{{{content}}}");
        assert_eq!(limiter().enforce(&line), line);
    }

    #[test]
    fn test_long_bullet_normalised_into_single_item() {
        let content = "Designed   and shipped a distributed ingestion service, processing millions of \
                       events per day across several regions while cutting infrastructure cost by \
                       a significant margin";
        let line = format!("      \\resumeItem{{{content}}} % trailing");
        let out = limiter().enforce(&line);

        let expected_words = content.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(out, format!("\\resumeItem{{{expected_words}}}"));
    }

    #[test]
    fn test_break_point_prefers_punctuation_after_midpoint() {
        let words = vec![
            "w0", "w1", "w2", "w3", "w4,", "w5", "w6", "w7;", "w8", "w9",
        ];
        // midpoint 5; first punctuated word at or after it is w7; (index 7).
        assert_eq!(find_break_point(&words), 8);
    }

    #[test]
    fn test_break_point_falls_back_to_midpoint() {
        let words = vec!["a", "b", "c", "d", "e", "f", "g"];
        assert_eq!(find_break_point(&words), 3);
    }

    #[test]
    fn test_punctuation_on_last_word_leaves_empty_second_half() {
        let mut words: Vec<String> = (0..19).map(|i| format!("word{i:02}xxxx")).collect();
        words.push("end.".to_string());
        let content = words.join(" ");
        assert!(content.chars().count() > MAX_BULLET_CHARS);

        let out = limiter().enforce(&format!("\\resumeItem{{{content}}}"));
        assert_eq!(out, format!("\\resumeItem{{{content} }}"));
    }

    #[test]
    fn test_multiline_content_keeps_line_count() {
        let long = vec!["token"; 30].join(" ");
        let text = format!("a\n\\resumeItem{{{long}}}\nb");
        assert_eq!(limiter().enforce(&text).split('\n').count(), 3);
    }
}
