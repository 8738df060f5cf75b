use crate::analyzer::Analyzer;
use serde::Serialize;

/// A processed document: stable identifier (its source path), the raw text,
/// and the stemmed-term sequence derived from it. Never mutated after
/// construction.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: String,
    pub text: String,
    pub terms: Vec<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>, analyzer: &Analyzer) -> Self {
        let text = text.into();
        let terms = analyzer.analyze(&text);
        Self { id: id.into(), text, terms }
    }
}

/// Insertion-ordered document collection. Order is the caller's listing
/// order and decides how tied similarity scores are presented.
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, doc: Document) {
        self.documents.push(doc);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Per-document stemmed-term sequences, index-aligned with `documents`.
    pub fn term_lists(&self) -> impl Iterator<Item = &[String]> {
        self.documents.iter().map(|d| d.terms.as_slice())
    }
}
