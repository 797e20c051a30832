//! Durable engine state: fitted model, template buckets and conversation
//! history, serialized as one JSON document. Loading is best-effort; a
//! missing or corrupt snapshot is logged and treated as a cold start.

use crate::model::FittedModel;
use crate::template::TemplateStore;
use serde::{Deserialize, Serialize};
use solace_core::{ConversationTurn, EngineError};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub model: Option<FittedModel>,
    pub templates: TemplateStore,
    pub history: Vec<ConversationTurn>,
}

impl ModelSnapshot {
    /// Write atomically: serialize to a sibling temp file, then rename.
    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        let json = serde_json::to_vec_pretty(self)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        info!(path = %path.display(), turns = self.history.len(), "snapshot saved");
        Ok(())
    }

    /// Load a snapshot if one exists and parses. Any failure yields `None`
    /// so the caller can bootstrap instead.
    pub fn load(path: &Path) -> Option<Self> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                info!(path = %path.display(), %err, "no snapshot, starting fresh");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(path = %path.display(), %err, "snapshot unreadable, starting fresh");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use solace_core::EmotionLabel;

    fn history() -> Vec<ConversationTurn> {
        vec![
            ConversationTurn {
                user_input: "anxious about the exam".into(),
                response: "Let's break it down.".into(),
                emotion: EmotionLabel::Anxiety,
                timestamp: Utc::now(),
            },
            ConversationTurn {
                user_input: "feeling sad today".into(),
                response: "I'm here with you.".into(),
                emotion: EmotionLabel::Sadness,
                timestamp: Utc::now(),
            },
        ]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let turns = history();
        let model = FittedModel::train(&turns).unwrap();
        let mut templates = TemplateStore::default();
        templates.add(EmotionLabel::Anxiety, "anxious about the exam", "r", 100);

        let snapshot = ModelSnapshot {
            model: Some(model),
            templates,
            history: turns,
        };
        snapshot.save(&path).unwrap();

        let loaded = ModelSnapshot::load(&path).unwrap();
        assert_eq!(loaded.history.len(), 2);
        assert_eq!(loaded.templates.count_for(EmotionLabel::Anxiety), 1);

        // Reloaded model predicts identically.
        let original = snapshot.model.as_ref().unwrap();
        let restored = loaded.model.as_ref().unwrap();
        assert_eq!(
            original.predict("anxious again"),
            restored.predict("anxious again")
        );
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ModelSnapshot::load(&dir.path().join("absent.json")).is_none());
    }

    #[test]
    fn test_corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, b"not json {{{").unwrap();
        assert!(ModelSnapshot::load(&path).is_none());
    }

    #[test]
    fn test_no_stray_temp_file_after_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        ModelSnapshot::default().save(&path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
