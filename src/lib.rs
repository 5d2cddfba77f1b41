//! Term frequency and inverse document frequency over tokenized text.
//!
//! Raw text is turned into stemmed terms once with a [`Tokenizer`]; everything in
//! [`scoring`] works on the resulting token sequences.

pub mod corpus;
pub mod error;
pub mod scoring;
pub mod tokenizer;
pub mod weighting;

/// An ordered sequence of (usually stemmed) terms.
pub type Document = Vec<String>;

pub use error::{Error, Result};
pub use scoring::{vocabulary, TfIdf};
pub use tokenizer::{EnglishStemmer, RawTokenizer, RegexTokenizer, Stem, StopWords, Tokenizer};
pub use weighting::{IdfWeighting, TermWeighting};
