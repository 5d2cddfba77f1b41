use crate::error::{Error, Result};
use regex::Regex;

/// Splits already normalized text into candidate word tokens, in text order.
pub trait RawTokenizer {
    fn raw_tokens<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Matches runs of word characters between word boundaries.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    regex: Regex,
}

impl RegexTokenizer {
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\b\w+\b")
    }

    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }
}

impl RawTokenizer for RegexTokenizer {
    fn raw_tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.regex
            .find_iter(text)
            .map(|token| token.as_str())
            .collect()
    }
}
