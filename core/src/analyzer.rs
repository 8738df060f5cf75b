use crate::stem::{gate_and_stem, Stem};
use crate::tokenizer::{filter_tokens, tokenize};
use std::collections::HashSet;

/// Per-run text analysis configuration: stopword set, dictionary of base
/// forms, and the stemmer. Documents and the query go through the same
/// instance so their term spaces agree.
pub struct Analyzer {
    stopwords: HashSet<String>,
    dictionary: HashSet<String>,
    stemmer: Box<dyn Stem>,
}

impl Analyzer {
    pub fn new(
        stopwords: HashSet<String>,
        dictionary: HashSet<String>,
        stemmer: Box<dyn Stem>,
    ) -> Self {
        Self { stopwords, dictionary, stemmer }
    }

    /// Run the full pipeline: tokenize, drop punctuation and stopwords,
    /// then dictionary-gated stemming.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let filtered = filter_tokens(tokens, &self.stopwords);
        gate_and_stem(&filtered, &self.dictionary, &self.stemmer)
    }

    pub fn dictionary_is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}
