//! Vector-space document retrieval: text normalization, dictionary-gated
//! stemming, TF-IDF weighting, and cosine-similarity ranking over a small
//! in-memory corpus rebuilt per query.

pub mod analyzer;
pub mod corpus;
pub mod rank;
pub mod resources;
pub mod stem;
pub mod tfidf;
pub mod tokenizer;
pub mod vsm;

pub use analyzer::Analyzer;
pub use corpus::{Corpus, Document};
pub use rank::{cosine_similarity, rank, SearchHit};
pub use stem::{IdentityStemmer, SnowballStemmer, Stem};
pub use vsm::VectorSpaceModel;
