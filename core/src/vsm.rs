use crate::corpus::Corpus;
use crate::tfidf::{idf, tf};
use std::collections::BTreeSet;

/// Corpus vocabulary plus the document-by-term TF-IDF matrix, built fresh
/// per run. Vocabulary enumeration is lexicographic, which fixes the matrix
/// column order and makes repeated runs identical.
pub struct VectorSpaceModel {
    doc_ids: Vec<String>,
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    matrix: Vec<Vec<f64>>,
}

impl VectorSpaceModel {
    pub fn build(corpus: &Corpus) -> Self {
        let vocabulary: Vec<String> = corpus
            .term_lists()
            .flat_map(|terms| terms.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let idf: Vec<f64> = vocabulary.iter().map(|term| idf(term, corpus)).collect();

        let matrix: Vec<Vec<f64>> = corpus
            .term_lists()
            .map(|doc| {
                vocabulary
                    .iter()
                    .zip(&idf)
                    .map(|(term, idf_t)| tf(term, doc) * idf_t)
                    .collect()
            })
            .collect();

        let doc_ids = corpus.documents().iter().map(|d| d.id.clone()).collect();

        tracing::debug!(
            docs = corpus.len(),
            terms = vocabulary.len(),
            "built vector space model"
        );
        Self { doc_ids, vocabulary, idf, matrix }
    }

    /// Project a stemmed query onto the corpus vocabulary, in the same
    /// column order as the matrix. Query terms outside the vocabulary have
    /// no coordinate and cannot contribute to any score.
    pub fn query_vector(&self, query_terms: &[String]) -> Vec<f64> {
        self.vocabulary
            .iter()
            .zip(&self.idf)
            .map(|(term, idf_t)| tf(term, query_terms) * idf_t)
            .collect()
    }

    pub fn doc_ids(&self) -> &[String] {
        &self.doc_ids
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }
}
