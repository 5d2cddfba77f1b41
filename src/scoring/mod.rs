mod inverse_document_frequency;
mod term_frequency;
mod vocabulary;

pub use inverse_document_frequency::{document_frequency, idfs, inverse_document_frequency};
pub use term_frequency::{raw_count, term_frequencies, weigh};
pub use vocabulary::vocabulary;

use std::{borrow::Cow, collections::HashMap};

use crate::{
    tokenizer::{EnglishStemmer, Stem},
    weighting::{IdfWeighting, TermWeighting},
    Document,
};

/// Term frequency and inverse document frequency over tokenized documents.
///
/// Corpus documents are assumed to be stemmed already. The stemmer is only applied
/// to query terms, and only when a caller asks for it with `stem_first`.
pub struct TfIdf<S = EnglishStemmer> {
    stemmer: S,
}

impl TfIdf {
    /// Stems query terms with the Snowball English stemmer.
    pub fn english() -> Self {
        Self::new(EnglishStemmer::default())
    }
}

impl Default for TfIdf {
    fn default() -> Self {
        Self::english()
    }
}

impl<S: Stem> TfIdf<S> {
    pub const fn new(stemmer: S) -> Self {
        Self { stemmer }
    }

    fn prepare<'a>(&self, term: &'a str, stem_first: bool) -> Cow<'a, str> {
        if stem_first {
            Cow::Owned(self.stemmer.stem(term))
        } else {
            Cow::Borrowed(term)
        }
    }

    /// Weighted number of occurrences of `term` in `document`.
    pub fn term_frequency(
        &self,
        term: &str,
        stem_first: bool,
        document: &[String],
        weighting: TermWeighting,
    ) -> f64 {
        let term = self.prepare(term, stem_first);
        weigh(raw_count(&term, document), weighting)
    }

    /// Raw-count vector of `compare_document` over the vocabulary of `corpus`.
    pub fn term_frequencies(
        &self,
        compare_document: &[String],
        corpus: &[Document],
    ) -> Vec<f64> {
        term_frequencies(compare_document, corpus)
    }

    pub fn idf(
        &self,
        term: &str,
        stem_first: bool,
        corpus: &[Document],
        weighting: IdfWeighting,
    ) -> f64 {
        let term = self.prepare(term, stem_first);
        inverse_document_frequency(&term, corpus, weighting)
    }

    pub fn idfs(&self, corpus: &[Document], weighting: IdfWeighting) -> HashMap<String, f64> {
        idfs(corpus, weighting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{corpus, document},
        tokenizer::Tokenizer,
    };

    #[test]
    fn stem_first_applies_to_the_query_term_only() {
        let tf_idf = TfIdf::english();
        let document = document(&["run", "running", "run"]);

        assert_eq!(
            tf_idf.term_frequency("running", false, &document, TermWeighting::Raw),
            1.0
        );
        assert_eq!(
            tf_idf.term_frequency("running", true, &document, TermWeighting::Raw),
            2.0
        );
    }

    #[test]
    fn log_term_frequency() {
        let tf_idf = TfIdf::english();
        let document = document(&["cat", "cat", "cat", "dog"]);

        assert_eq!(
            tf_idf.term_frequency("bird", false, &document, TermWeighting::Log),
            0.0
        );
        assert_eq!(
            tf_idf.term_frequency("dog", false, &document, TermWeighting::Log),
            1.0
        );
        assert_eq!(
            tf_idf.term_frequency("cats", true, &document, TermWeighting::Log),
            1.0 + 3f64.ln()
        );
    }

    #[test]
    fn stemmed_idf() {
        let tf_idf = TfIdf::english();
        let corpus = corpus(&[&["cat", "sat"], &["dog"], &["cat"], &["bird"]]);

        assert_eq!(
            tf_idf.idf("cats", true, &corpus, IdfWeighting::Log),
            (4.0f64 / 3.0).ln()
        );
        assert_eq!(
            tf_idf.idf("cats", false, &corpus, IdfWeighting::Log),
            4f64.ln()
        );
    }

    #[test]
    fn custom_stemmer() {
        let tf_idf = TfIdf::new(|word: &str| word.trim_end_matches("ing").to_string());
        let document = document(&["walk", "walk"]);

        assert_eq!(
            tf_idf.term_frequency("walking", true, &document, TermWeighting::Raw),
            2.0
        );
    }

    #[test]
    fn aggregations_match_single_term_scores() {
        let tf_idf = TfIdf::english();
        let corpus = corpus(&[&["the", "cat", "sat"], &["the", "dog", "ran"]]);

        let idfs = tf_idf.idfs(&corpus, IdfWeighting::Log);
        for term in vocabulary(&corpus) {
            assert_eq!(
                idfs[term],
                tf_idf.idf(term, false, &corpus, IdfWeighting::Log)
            );
        }

        let frequencies = tf_idf.term_frequencies(&corpus[1], &corpus);
        for (term, frequency) in vocabulary(&corpus).into_iter().zip(frequencies) {
            assert_eq!(
                frequency,
                tf_idf.term_frequency(term, false, &corpus[1], TermWeighting::Raw)
            );
        }
    }

    #[test]
    fn end_to_end_from_raw_text() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let tf_idf = TfIdf::english();

        let corpus: Vec<Document> = [
            "The cats sat on the mat.",
            "Dogs were running in the park.",
            "A cat and a dog!",
        ]
        .iter()
        .map(|text| tokenizer.tokenize(text))
        .collect();

        assert_eq!(
            vocabulary(&corpus).into_iter().collect::<Vec<_>>(),
            vec!["cat", "sat", "mat", "dog", "run", "park"]
        );
        assert_eq!(
            tf_idf.term_frequencies(&corpus[2], &corpus),
            vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0]
        );
        assert_eq!(
            tf_idf.idf("cats", true, &corpus, IdfWeighting::Log),
            tf_idf.idf("cat", false, &corpus, IdfWeighting::Log)
        );
    }
}
