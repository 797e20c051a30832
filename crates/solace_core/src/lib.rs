pub mod config;
pub mod sentiment;

pub use config::SolaceConfig;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Coarse affect label inferred for a single utterance.
///
/// The set is closed and the variant order here matches the lexicon
/// declaration order in `solace_analysis`, which is what breaks non-zero
/// keyword-score ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    Sadness,
    Anxiety,
    Anger,
    Joy,
    Fear,
    Loneliness,
    Grief,
    Stress,
    SelfDoubt,
    Overwhelm,
    Neutral,
}

impl EmotionLabel {
    /// All labels in declaration order.
    pub const ALL: [EmotionLabel; 11] = [
        EmotionLabel::Sadness,
        EmotionLabel::Anxiety,
        EmotionLabel::Anger,
        EmotionLabel::Joy,
        EmotionLabel::Fear,
        EmotionLabel::Loneliness,
        EmotionLabel::Grief,
        EmotionLabel::Stress,
        EmotionLabel::SelfDoubt,
        EmotionLabel::Overwhelm,
        EmotionLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Anxiety => "anxiety",
            EmotionLabel::Anger => "anger",
            EmotionLabel::Joy => "joy",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Loneliness => "loneliness",
            EmotionLabel::Grief => "grief",
            EmotionLabel::Stress => "stress",
            EmotionLabel::SelfDoubt => "self_doubt",
            EmotionLabel::Overwhelm => "overwhelm",
            EmotionLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pipeline's answer to one utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub emotion: EmotionLabel,
    pub is_crisis: bool,
}

/// One recorded exchange. The history of these is the single source of
/// truth for retraining and persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user_input: String,
    pub response: String,
    pub emotion: EmotionLabel,
    pub timestamp: DateTime<Utc>,
}

/// A stored (input, response) exemplar used for similarity retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub input: String,
    pub response: String,
    pub emotion: EmotionLabel,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("training corpus is empty")]
    EmptyCorpus,
    #[error("snapshot io: {0}")]
    SnapshotIo(#[from] std::io::Error),
    #[error("snapshot format: {0}")]
    SnapshotFormat(#[from] serde_json::Error),
}
