//! Per-emotion template buckets with bounded size and similarity retrieval.

use crate::vectorizer::{cosine, TfidfVectorizer};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use solace_core::{EmotionLabel, Template};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateStore {
    buckets: HashMap<EmotionLabel, Vec<Template>>,
}

impl TemplateStore {
    /// Append a template; evict from the front (oldest first) past `cap`.
    pub fn add(&mut self, emotion: EmotionLabel, input: &str, response: &str, cap: usize) {
        let bucket = self.buckets.entry(emotion).or_default();
        bucket.push(Template {
            input: input.to_string(),
            response: response.to_string(),
            emotion,
            created_at: Utc::now(),
        });
        if bucket.len() > cap {
            let overflow = bucket.len() - cap;
            bucket.drain(..overflow);
        }
    }

    /// Most similar stored response for this emotion, if any template's
    /// input exceeds `threshold` cosine similarity. Equal maxima resolve to
    /// the most recently added template. Empty bucket yields `None`.
    pub fn find_similar(
        &self,
        emotion: EmotionLabel,
        text: &str,
        vectorizer: &TfidfVectorizer,
        threshold: f32,
    ) -> Option<&str> {
        let bucket = self.buckets.get(&emotion)?;
        let query = vectorizer.transform(text);
        if query.is_empty() {
            return None;
        }

        let mut best: Option<(&Template, f32)> = None;
        for template in bucket {
            let similarity = cosine(&query, &vectorizer.transform(&template.input));
            // `>=` so the latest of equal maxima wins.
            if similarity > threshold && best.map_or(true, |(_, s)| similarity >= s) {
                best = Some((template, similarity));
            }
        }
        best.map(|(template, _)| template.response.as_str())
    }

    pub fn count_for(&self, emotion: EmotionLabel) -> usize {
        self.buckets.get(&emotion).map_or(0, Vec::len)
    }

    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
