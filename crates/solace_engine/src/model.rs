//! The fitted statistical model: vectorizer + classifier trained together
//! over conversation history. Instances are immutable once built; the
//! pipeline installs them behind an atomic swap.

use crate::classifier::MultinomialNb;
use crate::vectorizer::TfidfVectorizer;
use serde::{Deserialize, Serialize};
use solace_core::{ConversationTurn, EmotionLabel, EngineError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedModel {
    pub vectorizer: TfidfVectorizer,
    pub classifier: MultinomialNb,
    /// History length this model was fitted over.
    pub trained_on: usize,
}

impl FittedModel {
    /// Fit vectorizer and classifier over the full history.
    pub fn train(history: &[ConversationTurn]) -> Result<Self, EngineError> {
        let docs: Vec<String> = history.iter().map(|t| t.user_input.clone()).collect();
        let labels: Vec<EmotionLabel> = history.iter().map(|t| t.emotion).collect();

        let vectorizer = TfidfVectorizer::fit(&docs)?;
        let samples: Vec<_> = docs.iter().map(|d| vectorizer.transform(d)).collect();
        let classifier = MultinomialNb::fit(&samples, &labels, vectorizer.vocab_len())?;

        Ok(Self {
            vectorizer,
            classifier,
            trained_on: history.len(),
        })
    }

    /// Predict an emotion and its posterior probability for raw text.
    pub fn predict(&self, text: &str) -> (EmotionLabel, f32) {
        self.classifier.predict(&self.vectorizer.transform(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn turn(input: &str, emotion: EmotionLabel) -> ConversationTurn {
        ConversationTurn {
            user_input: input.to_string(),
            response: "noted".to_string(),
            emotion,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_train_and_predict() {
        let history = vec![
            turn("anxious about the exam tomorrow", EmotionLabel::Anxiety),
            turn("so anxious and worried", EmotionLabel::Anxiety),
            turn("feeling sad and empty", EmotionLabel::Sadness),
            turn("sad all the time lately", EmotionLabel::Sadness),
        ];
        let model = FittedModel::train(&history).unwrap();
        assert_eq!(model.trained_on, 4);

        let (label, _) = model.predict("anxious and worried again");
        assert_eq!(label, EmotionLabel::Anxiety);
    }

    #[test]
    fn test_train_empty_history_fails() {
        assert!(matches!(
            FittedModel::train(&[]),
            Err(EngineError::EmptyCorpus)
        ));
    }
}
