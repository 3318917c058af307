//! Lexical similarity via pair-fit TF-IDF and cosine distance

use crate::scoring::{round2, SubScore};
use std::collections::BTreeMap;
use unicode_segmentation::UnicodeSegmentation;

/// Score two texts by fitting a TF-IDF model over exactly this pair of
/// documents and taking the cosine of the resulting vectors, scaled to
/// [0, 100]. The vocabulary is the union of the two documents' terms and
/// nothing else; no external corpus is involved.
pub fn lexical_similarity(text_a: &str, text_b: &str) -> SubScore {
    if text_a.trim().is_empty() || text_b.trim().is_empty() {
        return SubScore::exact(0.0);
    }

    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return SubScore::exact(0.0);
    }

    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    // Smoothed IDF over the two-document corpus, sklearn-style:
    // idf = ln((1 + n) / (1 + df)) + 1 with n = 2.
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    let vocabulary: BTreeMap<&str, ()> = counts_a
        .keys()
        .chain(counts_b.keys())
        .map(|term| (*term, ()))
        .collect();

    for term in vocabulary.keys() {
        let tf_a = counts_a.get(term).copied().unwrap_or(0) as f64;
        let tf_b = counts_b.get(term).copied().unwrap_or(0) as f64;
        let df = (tf_a > 0.0) as u32 + (tf_b > 0.0) as u32;
        let idf = (3.0 / (1.0 + f64::from(df))).ln() + 1.0;

        let wa = tf_a * idf;
        let wb = tf_b * idf;
        dot += wa * wb;
        norm_a += wa * wa;
        norm_b += wb * wb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return SubScore::exact(0.0);
    }

    let cosine = dot / (norm_a.sqrt() * norm_b.sqrt());
    SubScore::exact(round2(cosine * 100.0))
}

/// Lower-cased word tokens, two characters or longer.
fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(|word| word.to_lowercase())
        .filter(|word| word.chars().count() >= 2)
        .collect()
}

fn term_counts(tokens: &[String]) -> BTreeMap<&str, u32> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}
