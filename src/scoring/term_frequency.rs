use tracing::trace;

use super::vocabulary::vocabulary;
use crate::{weighting::TermWeighting, Document};

pub fn raw_count(term: &str, document: &[String]) -> usize {
    document.iter().filter(|token| *token == term).count()
}

// Only `Log` differs from the raw count, and a zero count stays `0` under it.
pub fn weigh(count: usize, weighting: TermWeighting) -> f64 {
    let frequency = count as f64;

    match weighting {
        TermWeighting::Log if count != 0 => 1.0 + frequency.ln(),
        TermWeighting::Log
        | TermWeighting::Binary
        | TermWeighting::Raw
        | TermWeighting::DoubleHalf
        | TermWeighting::DoubleK => frequency,
    }
}

/// Raw counts of the vocabulary of `corpus`, in first-occurrence order, within
/// `compare_document`. `compare_document` is never stemmed.
pub fn term_frequencies(compare_document: &[String], corpus: &[Document]) -> Vec<f64> {
    let vocabulary = vocabulary(corpus);
    trace!(vocabulary = vocabulary.len(), "Building term frequency vector");

    vocabulary
        .into_iter()
        .map(|term| weigh(raw_count(term, compare_document), TermWeighting::Raw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{corpus, document};

    #[test]
    fn counts_exact_matches() {
        let document = document(&["cat", "cats", "cat", "Cat"]);

        assert_eq!(raw_count("cat", &document), 2);
        assert_eq!(raw_count("dog", &document), 0);
        assert_eq!(raw_count("cat", &[]), 0);
    }

    #[test]
    fn undifferentiated_schemes_return_raw_count() {
        for weighting in [
            TermWeighting::Binary,
            TermWeighting::Raw,
            TermWeighting::DoubleHalf,
            TermWeighting::DoubleK,
        ] {
            assert_eq!(weigh(3, weighting), 3.0);
            assert_eq!(weigh(0, weighting), 0.0);
        }
    }

    #[test]
    fn log_weighting() {
        assert_eq!(weigh(0, TermWeighting::Log), 0.0);
        assert_eq!(weigh(1, TermWeighting::Log), 1.0);
        assert!((weigh(4, TermWeighting::Log) - (1.0 + 4f64.ln())).abs() < f64::EPSILON);
    }

    #[test]
    fn vector_over_corpus_vocabulary() {
        let corpus = corpus(&[&["the", "cat", "sat"], &["the", "dog", "ran"]]);

        assert_eq!(
            term_frequencies(&corpus[0], &corpus),
            vec![1.0, 1.0, 1.0, 0.0, 0.0]
        );
        assert_eq!(
            term_frequencies(&corpus[1], &corpus),
            vec![1.0, 0.0, 0.0, 1.0, 1.0]
        );
    }

    #[test]
    fn compare_document_outside_corpus() {
        let corpus = corpus(&[&["a", "b"], &["b", "c"]]);
        let compare = document(&["c", "c", "z", "a", "z"]);

        assert_eq!(term_frequencies(&compare, &corpus), vec![1.0, 0.0, 2.0]);
    }

    #[test]
    fn vector_length_is_vocabulary_size() {
        let corpus = corpus(&[&["x", "y", "x"], &[], &["y", "z"]]);

        assert_eq!(term_frequencies(&[], &corpus).len(), 3);
        assert!(term_frequencies(&document(&["x"]), &[]).is_empty());
    }
}
