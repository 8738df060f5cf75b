use crate::corpus::Corpus;

/// Term frequency: the fraction of `document` terms equal to `term`.
/// An empty document has tf 0 for every term.
pub fn tf(term: &str, document: &[String]) -> f64 {
    if document.is_empty() {
        return 0.0;
    }
    let count = document.iter().filter(|t| *t == term).count();
    count as f64 / document.len() as f64
}

/// Inverse document frequency: `log10(N / (1 + df))`, where df is the number
/// of corpus documents containing `term`. Defined as exactly 0 when df is 0;
/// no smoothing. For df close to N the value drops to zero or below, which
/// the ranker tolerates.
pub fn idf(term: &str, corpus: &Corpus) -> f64 {
    let df = corpus
        .term_lists()
        .filter(|terms| terms.iter().any(|t| t == term))
        .count();
    if df == 0 {
        return 0.0;
    }
    (corpus.len() as f64 / (1.0 + df as f64)).log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::corpus::Document;
    use crate::stem::IdentityStemmer;
    use std::collections::HashSet;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn corpus_of(docs: &[&[&str]]) -> Corpus {
        let analyzer = Analyzer::new(
            HashSet::new(),
            docs.iter().flat_map(|d| d.iter().map(|w| w.to_string())).collect(),
            Box::new(IdentityStemmer),
        );
        let mut corpus = Corpus::new();
        for (i, words) in docs.iter().enumerate() {
            corpus.push(Document::new(format!("doc{i}"), words.join(" "), &analyzer));
        }
        corpus
    }

    #[test]
    fn tf_is_the_term_fraction() {
        let doc = terms(&["ikan", "makan", "ikan"]);
        assert!((tf("ikan", &doc) - 2.0 / 3.0).abs() < 1e-12);
        assert!((tf("makan", &doc) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(tf("kucing", &doc), 0.0);
    }

    #[test]
    fn tf_of_empty_document_is_zero() {
        assert_eq!(tf("ikan", &[]), 0.0);
    }

    #[test]
    fn tf_stays_in_unit_interval() {
        let doc = terms(&["a", "a", "a"]);
        assert_eq!(tf("a", &doc), 1.0);
    }

    #[test]
    fn idf_matches_log10_formula() {
        let corpus = corpus_of(&[&["kucing", "makan"], &["anjing", "makan"], &["ikan"]]);
        // df(kucing) = 1, N = 3 -> log10(3/2)
        assert!((idf("kucing", &corpus) - (3.0_f64 / 2.0).log10()).abs() < 1e-12);
        // df(makan) = 2, N = 3 -> log10(3/3) = 0
        assert_eq!(idf("makan", &corpus), 0.0);
    }

    #[test]
    fn idf_of_absent_term_is_clamped_to_zero() {
        let corpus = corpus_of(&[&["kucing"], &["anjing"]]);
        assert_eq!(idf("tulang", &corpus), 0.0);
    }

    #[test]
    fn idf_can_go_negative_when_df_reaches_n() {
        let corpus = corpus_of(&[&["makan"], &["makan"]]);
        // df = N = 2 -> log10(2/3) < 0; the formula is reproduced as-is.
        assert!(idf("makan", &corpus) < 0.0);
        assert!(idf("makan", &corpus).is_finite());
    }
}
