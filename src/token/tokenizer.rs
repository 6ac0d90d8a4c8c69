use regex::{Regex, Split};

/// One or more commas and/or spaces, treated as a single boundary
pub const SEPARATOR_PATTERN: &'static str = r"[, ]+";

lazy_static! {
    static ref SEPARATOR: Regex = {
        Regex::new(SEPARATOR_PATTERN)
            .expect("failed to compile regex")
    };
    /// Content followed by a trailing separator run
    static ref TERMINATED: Regex = {
        Regex::new(&format!(r"(?s)^(.*?)(?:{})$", SEPARATOR_PATTERN))
            .expect("failed to compile regex")
    };
}

/// Yields the non-empty tokens of a string, left to right.
/// Pasted text may contain any number of separators, so
/// this is used for every commit, not just typed input.
pub struct Tokenizer<'t> {
    split: Split<'static, 't>,
}

impl<'t> Tokenizer<'t> {

    /// Create a new tokenizer over some raw input
    pub fn new(text: &'t str) -> Self {
        Self { split: SEPARATOR.split(text) }
    }
}

impl<'t> Iterator for Tokenizer<'t> {
    type Item=&'t str;

    /// Yield the next non-empty token
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(token) = self.split.next() {
            if !token.is_empty() { return Some(token) }
        }
        None
    }
}

/// Collect the tokens of a string
pub fn tokenize(text: &str) -> Vec<&str> {
    Tokenizer::new(text).collect()
}

/// Check that a string is exactly one token, as a tag
/// name committed from the input always is.
pub fn is_token(text: &str) -> bool {
    let mut tokens = Tokenizer::new(text);
    tokens.next() == Some(text) && tokens.next().is_none()
}

/// Return the content in front of a trailing separator
/// run, if there is one.
pub fn terminated_content(text: &str) -> Option<&str> {
    TERMINATED.captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod suite {

    use super::*;

    #[test]
    fn check_empty_string() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize(", ,,").is_empty());
    }

    #[test]
    fn check_single_token() {
        assert_eq!(tokenize("red"), vec!["red"]);
        assert_eq!(tokenize("  red,"), vec!["red"]);
    }

    #[test]
    fn check_mixed_separators() {
        assert_eq!(tokenize("a, b,,c  d"), vec!["a", "b", "c", "d"]);
        assert_eq!(tokenize("green,green,"), vec!["green", "green"]);
    }

    #[test]
    fn check_other_whitespace_is_content() {
        assert_eq!(tokenize("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn check_is_token() {
        assert!(is_token("red"));
        assert!(is_token("a\tb"));
        assert!(!is_token(""));
        assert!(!is_token(" red"));
        assert!(!is_token("red,"));
        assert!(!is_token("b,c"));
    }

    #[test]
    fn check_terminated_content() {
        assert_eq!(terminated_content("a, ,"), Some("a"));
        assert_eq!(terminated_content("a b,"), Some("a b"));
        assert_eq!(terminated_content(","), Some(""));
        assert_eq!(terminated_content(" "), Some(""));
        assert_eq!(terminated_content("a"), None);
        assert_eq!(terminated_content("a,b"), None);
        assert_eq!(terminated_content(""), None);
    }
}
