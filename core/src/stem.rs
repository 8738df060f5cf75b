use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

/// Reduces a single surface token to a candidate root form. Implementations
/// must be deterministic and context-free (no corpus state).
pub trait Stem {
    fn stem(&self, token: &str) -> String;
}

/// Snowball stemmer backed by rust-stemmers.
pub struct SnowballStemmer {
    inner: Stemmer,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { inner: Stemmer::create(algorithm) }
    }
}

impl Stem for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).to_string()
    }
}

/// No-op stemmer for corpora whose language has no Snowball algorithm, or
/// when the dictionary already holds base forms.
pub struct IdentityStemmer;

impl Stem for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}

impl<S: Stem + ?Sized> Stem for Box<S> {
    fn stem(&self, token: &str) -> String {
        (**self).stem(token)
    }
}

/// Dictionary-gated stemming: a token is stemmed and its root admitted only
/// when the raw token is already a dictionary member. Everything else is
/// dropped silently, so the output may be shorter than the input.
pub fn gate_and_stem<S: Stem + ?Sized>(
    tokens: &[String],
    dictionary: &HashSet<String>,
    stemmer: &S,
) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| dictionary.contains(t.as_str()))
        .map(|t| stemmer.stem(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn gate_checks_raw_token_before_stemming() {
        let stemmer = SnowballStemmer::new(Algorithm::English);
        // "running" is in the dictionary, so it passes the gate and is
        // stemmed; "jumping" is not, so it never reaches the stemmer.
        let out = gate_and_stem(&toks(&["running", "jumping"]), &dict(&["running"]), &stemmer);
        assert_eq!(out, vec!["run"]);
    }

    #[test]
    fn out_of_dictionary_tokens_are_dropped_silently() {
        let out = gate_and_stem(&toks(&["kucing", "zzz"]), &dict(&["kucing"]), &IdentityStemmer);
        assert_eq!(out, vec!["kucing"]);
    }

    #[test]
    fn empty_dictionary_admits_nothing() {
        let out = gate_and_stem(&toks(&["kucing", "makan"]), &dict(&[]), &IdentityStemmer);
        assert!(out.is_empty());
    }

    #[test]
    fn identity_stemmer_preserves_tokens() {
        assert_eq!(IdentityStemmer.stem("makanan"), "makanan");
    }
}
