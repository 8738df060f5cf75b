use anyhow::{bail, Result};
use rust_stemmers::Algorithm;
use std::path::{Path, PathBuf};
use temu_core::resources::{load_dictionary, load_stopwords, read_document};
use temu_core::{rank, Analyzer, Corpus, Document, IdentityStemmer, SearchHit, SnowballStemmer, Stem};
use walkdir::WalkDir;

/// One retrieval run: where the corpus lives, which resources to load, and
/// the query to score against it.
pub struct RunConfig {
    pub directory: PathBuf,
    pub dictionary: PathBuf,
    pub stopwords: PathBuf,
    pub query: String,
    pub language: Option<String>,
    pub top: Option<usize>,
}

/// Map a language name to its Snowball stemmer; no language means the
/// dictionary already holds base forms and tokens pass through unchanged.
pub fn stemmer_for(language: Option<&str>) -> Result<Box<dyn Stem>> {
    let Some(lang) = language else {
        return Ok(Box::new(IdentityStemmer));
    };
    let algorithm = match lang.to_lowercase().as_str() {
        "dutch" => Algorithm::Dutch,
        "english" => Algorithm::English,
        "french" => Algorithm::French,
        "german" => Algorithm::German,
        "italian" => Algorithm::Italian,
        "portuguese" => Algorithm::Portuguese,
        "spanish" => Algorithm::Spanish,
        other => bail!("unsupported stemmer language: {other}"),
    };
    Ok(Box::new(SnowballStemmer::new(algorithm)))
}

/// Rebuild the corpus from the directory and rank every document against
/// the query. A document that cannot be read is logged and skipped; it
/// never blocks the rest of the run.
pub fn execute(config: &RunConfig) -> Result<Vec<SearchHit>> {
    let dictionary = load_dictionary(&config.dictionary)?;
    let stopwords = load_stopwords(&config.stopwords)?;
    let stemmer = stemmer_for(config.language.as_deref())?;
    let analyzer = Analyzer::new(stopwords, dictionary, stemmer);
    if analyzer.dictionary_is_empty() {
        tracing::warn!("empty dictionary: no terms will be admitted");
    }

    let corpus = build_corpus(&config.directory, &analyzer);
    if corpus.is_empty() {
        tracing::warn!(directory = %config.directory.display(), "no readable documents found");
    }

    let query_terms = analyzer.analyze(&config.query);
    if query_terms.is_empty() {
        tracing::warn!("query has no indexable terms; all scores will be zero");
    }
    tracing::info!(docs = corpus.len(), query_terms = query_terms.len(), "ranking corpus");

    let model = temu_core::VectorSpaceModel::build(&corpus);
    let mut hits = rank(&model, &query_terms);
    if let Some(k) = config.top {
        hits.truncate(k);
    }
    Ok(hits)
}

fn build_corpus(directory: &Path, analyzer: &Analyzer) -> Corpus {
    let mut corpus = Corpus::new();
    for entry in WalkDir::new(directory)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        match read_document(path) {
            Ok(text) => {
                corpus.push(Document::new(path.display().to_string(), text, analyzer));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable document");
            }
        }
    }
    corpus
}
