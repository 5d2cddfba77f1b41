mod raw;
mod stemmer;
mod stop_words;

pub use raw::{RawTokenizer, RegexTokenizer};
pub use stemmer::{EnglishStemmer, Stem};
pub use stop_words::StopWords;

use crate::{error::Result, Document};

/// Turns raw document text into an ordered sequence of stemmed terms.
///
/// The raw tokenizer, stopword set and stemmer are injected once and reused for
/// every document.
pub struct Tokenizer<R = RegexTokenizer, S = EnglishStemmer> {
    raw: R,
    stop_words: StopWords,
    stemmer: S,
}

impl Tokenizer {
    /// Word-boundary regex tokenizer, English stopwords and the Snowball English stemmer.
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(
            RegexTokenizer::new()?,
            StopWords::english(),
            EnglishStemmer::default(),
        ))
    }
}

impl<R, S> Tokenizer<R, S>
where
    R: RawTokenizer,
    S: Stem,
{
    pub const fn with_parts(raw: R, stop_words: StopWords, stemmer: S) -> Self {
        Self {
            raw,
            stop_words,
            stemmer,
        }
    }

    /// Lower-cases `document` one codepoint at a time, drops stopwords and stems
    /// what is left.
    ///
    /// Stopword membership is checked on the raw token, before stemming. The result
    /// is empty when every token was a stopword.
    pub fn tokenize(&self, document: &str) -> Document {
        let text: String = document.chars().flat_map(char::to_lowercase).collect();

        self.raw
            .raw_tokens(&text)
            .into_iter()
            .filter(|token| !self.stop_words.contains(token))
            .map(|token| self.stemmer.stem(token))
            .collect()
    }
}
