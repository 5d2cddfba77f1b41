use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use serde::Serialize;
use tfidf::{
    corpus::{into_documents, load_corpus, load_document},
    vocabulary, IdfWeighting, Result, TermWeighting, TfIdf, Tokenizer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TFIDF_LOG";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory of documents making up the corpus
    #[arg(long, default_value = "data")]
    corpus_path: PathBuf,

    /// Inverse document frequency weighting
    #[arg(long, value_enum, default_value_t = IdfWeighting::Log)]
    idf_weighting: IdfWeighting,

    /// Document to vectorize over the corpus vocabulary
    #[arg(long)]
    compare: Option<PathBuf>,

    /// Query terms to score individually
    #[arg(long = "term")]
    terms: Vec<String>,

    /// Term frequency weighting used for query terms
    #[arg(long, value_enum, default_value_t = TermWeighting::Raw)]
    term_weighting: TermWeighting,

    /// Stem query terms before scoring them
    #[arg(long, default_value = "false")]
    stem: bool,

    /// Where to write the JSON report, stdout if omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Serialize, Debug)]
struct Report<'a> {
    documents: Vec<PathBuf>,
    vocabulary: Vec<&'a str>,
    idf_weighting: IdfWeighting,
    idfs: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compare: Option<CompareReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    terms: Vec<TermReport>,
}

#[derive(Serialize, Debug)]
struct CompareReport {
    path: PathBuf,
    term_frequencies: Vec<f64>,
}

#[derive(Serialize, Debug)]
struct TermReport {
    term: String,
    term_weighting: TermWeighting,
    #[serde(skip_serializing_if = "Option::is_none")]
    term_frequency: Option<f64>,
    idf: f64,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let tokenizer = Tokenizer::new()?;
    let tf_idf = TfIdf::english();

    let sources = load_corpus(&args.corpus_path, &tokenizer)?;
    let paths = sources.iter().map(|source| source.path.clone()).collect();
    let corpus = into_documents(sources);

    let start = std::time::Instant::now();

    let compare = args
        .compare
        .as_deref()
        .map(|path| load_document(path, &tokenizer))
        .transpose()?;

    let terms = args
        .terms
        .iter()
        .map(|term| TermReport {
            term: term.clone(),
            term_weighting: args.term_weighting,
            term_frequency: compare.as_ref().map(|document| {
                tf_idf.term_frequency(term, args.stem, &document.tokens, args.term_weighting)
            }),
            idf: tf_idf.idf(term, args.stem, &corpus, args.idf_weighting),
        })
        .collect();

    let report = Report {
        documents: paths,
        vocabulary: vocabulary(&corpus).into_iter().collect(),
        idf_weighting: args.idf_weighting,
        idfs: tf_idf
            .idfs(&corpus, args.idf_weighting)
            .into_iter()
            .collect(),
        compare: compare.map(|document| CompareReport {
            term_frequencies: tf_idf.term_frequencies(&document.tokens, &corpus),
            path: document.path,
        }),
        terms,
    };

    info!(elapsed = ?start.elapsed(), "Scored corpus");

    match args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, &report)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
