use rust_stemmers::{Algorithm, Stemmer};

/// Reduces an inflected word to its stem. Must be pure and deterministic.
pub trait Stem {
    fn stem(&self, word: &str) -> String;
}

impl<F> Stem for F
where
    F: Fn(&str) -> String,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// Snowball English (Porter2) stemmer.
pub struct EnglishStemmer {
    stemmer: Stemmer,
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Stem for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}
