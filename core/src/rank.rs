use crate::vsm::VectorSpaceModel;
use serde::Serialize;
use std::cmp::Ordering;

/// One ranked document: source identifier and cosine similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub doc_id: String,
    pub score: f64,
}

/// Cosine similarity of two vectors; 0 when either magnitude is 0, never an
/// arithmetic fault.
pub fn cosine_similarity(u: &[f64], v: &[f64]) -> f64 {
    let dot: f64 = u.iter().zip(v).map(|(a, b)| a * b).sum();
    let mag_u = u.iter().map(|a| a * a).sum::<f64>().sqrt();
    let mag_v = v.iter().map(|b| b * b).sum::<f64>().sqrt();
    if mag_u == 0.0 || mag_v == 0.0 {
        return 0.0;
    }
    dot / (mag_u * mag_v)
}

/// Score every document against the stemmed query, highest first. The sort
/// is stable, so documents with equal scores keep their corpus order.
pub fn rank(model: &VectorSpaceModel, query_terms: &[String]) -> Vec<SearchHit> {
    let query_vector = model.query_vector(query_terms);
    let mut hits: Vec<SearchHit> = model
        .doc_ids()
        .iter()
        .zip(model.matrix())
        .map(|(doc_id, doc_vector)| SearchHit {
            doc_id: doc_id.clone(),
            score: cosine_similarity(doc_vector, &query_vector),
        })
        .collect();
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits
}
