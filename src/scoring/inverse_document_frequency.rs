use std::collections::HashMap;

use tracing::debug;

use super::vocabulary::vocabulary;
use crate::{weighting::IdfWeighting, Document};

pub fn document_frequency(term: &str, corpus: &[Document]) -> usize {
    corpus
        .iter()
        .filter(|document| document.iter().any(|token| token == term))
        .count()
}

/// The document frequency is always offset by one. Under `Log` an empty corpus
/// yields negative infinity; every other scheme yields `0`.
pub fn inverse_document_frequency(
    term: &str,
    corpus: &[Document],
    weighting: IdfWeighting,
) -> f64 {
    let num_docs = corpus.len() as f64;
    let docs_with_term = 1.0 + document_frequency(term, corpus) as f64;

    match weighting {
        IdfWeighting::Log => (num_docs / docs_with_term).ln(),
        IdfWeighting::Unary
        | IdfWeighting::LogSmooth
        | IdfWeighting::LogMax
        | IdfWeighting::Prob => 0.0,
    }
}

pub fn idfs(corpus: &[Document], weighting: IdfWeighting) -> HashMap<String, f64> {
    let vocabulary = vocabulary(corpus);
    debug!(
        documents = corpus.len(),
        vocabulary = vocabulary.len(),
        ?weighting,
        "Computing inverse document frequencies"
    );

    vocabulary
        .into_iter()
        .map(|term| {
            (
                term.to_string(),
                inverse_document_frequency(term, corpus, weighting),
            )
        })
        .collect()
}
