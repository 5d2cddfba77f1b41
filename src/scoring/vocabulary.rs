use indexmap::IndexSet;

use crate::Document;

/// Distinct tokens of `corpus` in first-occurrence order.
///
/// Documents are scanned in corpus order and tokens in document order; each new
/// token value is kept once, at the position it was first seen.
pub fn vocabulary(corpus: &[Document]) -> IndexSet<&str> {
    corpus
        .iter()
        .flat_map(|document| document.iter().map(String::as_str))
        .collect()
}
