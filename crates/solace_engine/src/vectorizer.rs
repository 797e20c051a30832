//! Bag-of-words TF-IDF vectorizer over word unigrams and bigrams.
//!
//! Fitted state is part of the persisted model snapshot, so everything here
//! derives serde. Vectors are sparse `(feature, weight)` pairs sorted by
//! feature index and L2-normalized, which makes cosine similarity a plain
//! merge-join dot product.

use serde::{Deserialize, Serialize};
use solace_core::EngineError;
use std::collections::{HashMap, HashSet};

/// Vocabulary cap; most frequent terms win, ties by term text.
pub const MAX_FEATURES: usize = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocab: HashMap<String, usize>,
    idf: Vec<f32>,
}

/// Lowercased alphanumeric word split.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Unigrams plus adjacent-word bigrams ("a b").
fn terms(text: &str) -> Vec<String> {
    let words = tokenize(text);
    let mut out = words.clone();
    for pair in words.windows(2) {
        out.push(format!("{} {}", pair[0], pair[1]));
    }
    out
}

impl TfidfVectorizer {
    /// Fit vocabulary and inverse document frequencies over a corpus.
    pub fn fit(docs: &[String]) -> Result<Self, EngineError> {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut total_freq: HashMap<String, usize> = HashMap::new();

        let mut n_docs = 0usize;
        for doc in docs {
            let doc_terms = terms(doc);
            if doc_terms.is_empty() {
                continue;
            }
            n_docs += 1;
            let mut seen: HashSet<&str> = HashSet::new();
            for term in &doc_terms {
                *total_freq.entry(term.clone()).or_insert(0) += 1;
                if seen.insert(term.as_str()) {
                    *doc_freq.entry(term.clone()).or_insert(0) += 1;
                }
            }
        }
        if n_docs == 0 {
            return Err(EngineError::EmptyCorpus);
        }

        // Cap the vocabulary at the most frequent terms, deterministically.
        let mut ranked: Vec<(String, usize)> = total_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(MAX_FEATURES);

        let mut vocab = HashMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        for (index, (term, _)) in ranked.into_iter().enumerate() {
            let df = doc_freq.get(&term).copied().unwrap_or(0);
            // Smoothed IDF, never zero or negative.
            idf.push((((1 + n_docs) as f32) / ((1 + df) as f32)).ln() + 1.0);
            vocab.insert(term, index);
        }

        Ok(Self { vocab, idf })
    }

    /// Transform text into a sorted, L2-normalized sparse vector.
    /// Out-of-vocabulary input yields an empty vector.
    pub fn transform(&self, text: &str) -> Vec<(usize, f32)> {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for term in terms(text) {
            if let Some(&index) = self.vocab.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vec: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        vec.sort_by_key(|(index, _)| *index);

        let norm = vec.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, w) in vec.iter_mut() {
                *w /= norm;
            }
        }
        vec
    }

    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }
}

/// Cosine similarity of two sorted sparse vectors. Inputs from `transform`
/// are unit-length, so this is their dot product.
pub fn cosine(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "i feel anxious about my exam".to_string(),
            "i feel sad and empty".to_string(),
            "work stress is crushing me".to_string(),
        ]
    }

    #[test]
    fn test_fit_rejects_empty_corpus() {
        assert!(matches!(
            TfidfVectorizer::fit(&[]),
            Err(EngineError::EmptyCorpus)
        ));
        assert!(matches!(
            TfidfVectorizer::fit(&["...".to_string()]),
            Err(EngineError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_transform_is_unit_length() {
        let v = TfidfVectorizer::fit(&corpus()).unwrap();
        let vec = v.transform("i feel anxious");
        let norm: f32 = vec.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_identical_text_has_similarity_one() {
        let v = TfidfVectorizer::fit(&corpus()).unwrap();
        let a = v.transform("i feel anxious about my exam");
        let b = v.transform("i feel anxious about my exam");
        assert!((cosine(&a, &b) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_disjoint_text_has_similarity_zero() {
        let v = TfidfVectorizer::fit(&corpus()).unwrap();
        let a = v.transform("exam anxious");
        let b = v.transform("crushing work");
        assert!(cosine(&a, &b).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_vocabulary_is_empty() {
        let v = TfidfVectorizer::fit(&corpus()).unwrap();
        assert!(v.transform("zebra quartet").is_empty());
        assert!(v.transform("").is_empty());
    }

    #[test]
    fn test_bigrams_in_vocab() {
        let v = TfidfVectorizer::fit(&corpus()).unwrap();
        // "i feel" occurs in two documents; the bigram must be a feature.
        let a = v.transform("i feel");
        assert!(a.len() >= 3); // "i", "feel", "i feel"
    }

    #[test]
    fn test_serde_round_trip() {
        let v = TfidfVectorizer::fit(&corpus()).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let back: TfidfVectorizer = serde_json::from_str(&json).unwrap();
        let a = v.transform("i feel sad");
        let b = back.transform("i feel sad");
        assert_eq!(a, b);
    }
}
