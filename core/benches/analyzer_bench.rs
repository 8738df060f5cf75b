use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use temu_core::{Analyzer, IdentityStemmer};

fn bench_analyze(c: &mut Criterion) {
    let dictionary: HashSet<String> =
        ["kucing", "makan", "ikan", "anjing", "tulang", "rumah", "besar"]
            .iter()
            .map(|w| w.to_string())
            .collect();
    let stopwords: HashSet<String> = ["yang", "dan", "di"].iter().map(|w| w.to_string()).collect();
    let analyzer = Analyzer::new(stopwords, dictionary, Box::new(IdentityStemmer));
    let text = "Kucing yang besar makan ikan di rumah, dan anjing makan tulang! ".repeat(50);
    c.bench_function("analyze_3k_chars", |b| b.iter(|| analyzer.analyze(&text)));
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
