use serde::{Deserialize, Serialize};
use std::{
    fs::{read_to_string, File},
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    error::Result,
    tokenizer::{RawTokenizer, Stem, Tokenizer},
    Document,
};

const CRAWL_FILE_EXTENSION: &str = "json";

#[derive(Debug, Deserialize)]
struct CrawlFile {
    url: String,
    content: String,
}

/// A tokenized document and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub url: Option<String>,
    pub tokens: Document,
}

/// Tokenizes every file below `data_path`, sorted by file name.
///
/// `.json` files are read as crawl records and only their `content` is tokenized.
/// Everything else is read as UTF-8 text.
pub fn load_corpus<R, S>(
    data_path: &Path,
    tokenizer: &Tokenizer<R, S>,
) -> Result<Vec<SourceDocument>>
where
    R: RawTokenizer,
    S: Stem,
{
    let mut documents = Vec::new();

    for entry in WalkDir::new(data_path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let document = load_document(entry.path(), tokenizer)?;
        debug!(
            path = %document.path.display(),
            tokens = document.tokens.len(),
            "Tokenized document"
        );
        documents.push(document);
    }

    info!(
        path = %data_path.display(),
        documents = documents.len(),
        "Loaded corpus"
    );

    Ok(documents)
}

/// Tokenizes a single file the same way [`load_corpus`] does.
pub fn load_document<R, S>(path: &Path, tokenizer: &Tokenizer<R, S>) -> Result<SourceDocument>
where
    R: RawTokenizer,
    S: Stem,
{
    let is_crawl_file = path
        .extension()
        .is_some_and(|extension| extension == CRAWL_FILE_EXTENSION);

    let (url, text) = if is_crawl_file {
        let data: CrawlFile = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        (Some(data.url), data.content)
    } else {
        (None, read_to_string(path)?)
    };

    Ok(SourceDocument {
        path: path.to_path_buf(),
        url,
        tokens: tokenizer.tokenize(&text),
    })
}

/// Drops the sources, keeping the documents in corpus order.
pub fn into_documents(documents: Vec<SourceDocument>) -> Vec<Document> {
    documents
        .into_iter()
        .map(|document| document.tokens)
        .collect()
}
