//! Multinomial Naive Bayes over TF-IDF features.
//!
//! Laplace-smoothed, log-space throughout. Posteriors are normalized with
//! log-sum-exp so `predict` can report a usable confidence.

use serde::{Deserialize, Serialize};
use solace_core::{EmotionLabel, EngineError};

const ALPHA: f32 = 1.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    classes: Vec<EmotionLabel>,
    class_log_prior: Vec<f32>,
    /// log P(feature | class), indexed [class][feature].
    feature_log_prob: Vec<Vec<f32>>,
}

impl MultinomialNb {
    /// Fit from sparse sample vectors and their labels.
    pub fn fit(
        samples: &[Vec<(usize, f32)>],
        labels: &[EmotionLabel],
        n_features: usize,
    ) -> Result<Self, EngineError> {
        if samples.is_empty() || samples.len() != labels.len() || n_features == 0 {
            return Err(EngineError::EmptyCorpus);
        }

        // Classes in declaration order keeps fitting deterministic.
        let classes: Vec<EmotionLabel> = EmotionLabel::ALL
            .into_iter()
            .filter(|label| labels.contains(label))
            .collect();

        let n_classes = classes.len();
        let mut class_counts = vec![0usize; n_classes];
        let mut feature_totals = vec![vec![0.0f32; n_features]; n_classes];
        let mut class_totals = vec![0.0f32; n_classes];

        for (sample, label) in samples.iter().zip(labels) {
            let c = classes
                .iter()
                .position(|l| l == label)
                .ok_or(EngineError::EmptyCorpus)?;
            class_counts[c] += 1;
            for &(feature, weight) in sample {
                feature_totals[c][feature] += weight;
                class_totals[c] += weight;
            }
        }

        let total = samples.len() as f32;
        let class_log_prior = class_counts
            .iter()
            .map(|&n| ((n as f32) / total).ln())
            .collect();

        let feature_log_prob = (0..n_classes)
            .map(|c| {
                let denom = class_totals[c] + ALPHA * n_features as f32;
                feature_totals[c]
                    .iter()
                    .map(|&count| ((count + ALPHA) / denom).ln())
                    .collect()
            })
            .collect();

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Highest-posterior class and its normalized probability.
    pub fn predict(&self, sample: &[(usize, f32)]) -> (EmotionLabel, f32) {
        let mut log_joint: Vec<f32> = self.class_log_prior.clone();
        for &(feature, weight) in sample {
            for (c, joint) in log_joint.iter_mut().enumerate() {
                *joint += weight * self.feature_log_prob[c][feature];
            }
        }

        let max = log_joint.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let denom: f32 = log_joint.iter().map(|&j| (j - max).exp()).sum();

        let mut best = 0usize;
        let mut best_joint = f32::NEG_INFINITY;
        for (c, &joint) in log_joint.iter().enumerate() {
            if joint > best_joint {
                best_joint = joint;
                best = c;
            }
        }

        let confidence = (best_joint - max).exp() / denom;
        (self.classes[best], confidence)
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }
}
