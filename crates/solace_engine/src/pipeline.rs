//! The response pipeline: normalization, crisis screening, emotion
//! classification, template retrieval and response synthesis, plus the
//! background retraining loop.
//!
//! All mutable conversation state lives behind one `RwLock`; the fitted
//! model is installed behind an `ArcSwapOption` so readers never block on
//! a retrain.

use crate::model::FittedModel;
use crate::responses;
use crate::snapshot::ModelSnapshot;
use crate::template::TemplateStore;
use arc_swap::ArcSwapOption;
use chrono::{Timelike, Utc};
use solace_analysis::{context, crisis, emotion, normalize, therapy};
use solace_core::config::EngineConfig;
use solace_core::{ConversationTurn, EmotionLabel, EngineError, Reply};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

#[derive(Debug, Default)]
pub struct ConversationState {
    pub history: Vec<ConversationTurn>,
    pub templates: TemplateStore,
}

pub struct ResponsePipeline {
    config: EngineConfig,
    state: Arc<RwLock<ConversationState>>,
    model: Arc<ArcSwapOption<FittedModel>>,
    retrain_in_flight: Arc<AtomicBool>,
}

impl ResponsePipeline {
    /// Empty pipeline with no history and no fitted model.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: Arc::new(RwLock::new(ConversationState::default())),
            model: Arc::new(ArcSwapOption::empty()),
            retrain_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Resume from a snapshot on disk, or seed history and templates from
    /// the built-in examples and fit an initial model.
    pub fn load_or_bootstrap(config: EngineConfig) -> Self {
        let (state, model) = match ModelSnapshot::load(&PathBuf::from(&config.snapshot_path)) {
            Some(snapshot) => {
                info!(
                    turns = snapshot.history.len(),
                    templates = snapshot.templates.total(),
                    "resuming from snapshot"
                );
                (
                    ConversationState {
                        history: snapshot.history,
                        templates: snapshot.templates,
                    },
                    snapshot.model,
                )
            }
            None => bootstrap_state(&config),
        };

        Self {
            config,
            state: Arc::new(RwLock::new(state)),
            model: Arc::new(ArcSwapOption::from_pointee(model)),
            retrain_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Produce a reply for one user utterance. Never fails outward: any
    /// internal error is logged and replaced with a neutral fallback.
    pub async fn process(&self, input: &str) -> Reply {
        match self.process_inner(input).await {
            Ok(reply) => reply,
            Err(err) => {
                error!(%err, "response pipeline failed, sending fallback");
                Reply {
                    text: responses::FALLBACK.to_string(),
                    emotion: EmotionLabel::Neutral,
                    is_crisis: false,
                }
            }
        }
    }

    async fn process_inner(&self, input: &str) -> Result<Reply, EngineError> {
        let text = normalize::normalize(input);
        if text.is_empty() {
            return Ok(Reply {
                text: responses::FALLBACK.to_string(),
                emotion: EmotionLabel::Neutral,
                is_crisis: false,
            });
        }

        // Safety screening runs before everything else, greetings included.
        if crisis::detect(&text) {
            let reply_text = format!(
                "{}\n\n{}",
                responses::pick(responses::CRISIS),
                responses::format_helplines()
            );
            let label = emotion::classify(&text);
            self.record_turn(&text, &reply_text, label, false).await;
            return Ok(Reply {
                text: reply_text,
                emotion: label,
                is_crisis: true,
            });
        }

        if is_greeting(&text) {
            // Greetings are answered but not recorded; they carry no signal
            // worth training on.
            let hour = chrono::Local::now().hour();
            return Ok(Reply {
                text: responses::time_greeting(hour).to_string(),
                emotion: EmotionLabel::Neutral,
                is_crisis: false,
            });
        }

        let label = self.classify(&text).await;
        debug!(%label, input = %text, "classified utterance");

        if label == EmotionLabel::Neutral {
            let reply_text = compose(&text, responses::pick(responses::DEFAULT), None);
            self.record_turn(&text, &reply_text, label, false).await;
            return Ok(Reply {
                text: reply_text,
                emotion: label,
                is_crisis: false,
            });
        }

        // Reuse a stored response when a past input is similar enough.
        let reused = match self.model.load_full() {
            Some(model) => {
                let state = self.state.read().await;
                state
                    .templates
                    .find_similar(
                        label,
                        &text,
                        &model.vectorizer,
                        self.config.similarity_threshold,
                    )
                    .map(str::to_string)
            }
            None => None,
        };

        let reply_text = match reused {
            Some(found) => {
                debug!(%label, "reusing similar stored response");
                found
            }
            None => compose(
                &text,
                responses::pick(responses::pool_for(label)),
                therapy::detect(&text),
            ),
        };

        self.record_turn(&text, &reply_text, label, true).await;
        Ok(Reply {
            text: reply_text,
            emotion: label,
            is_crisis: false,
        })
    }

    /// Statistical prediction when enough history exists and the posterior
    /// clears the confidence floor; keyword scoring otherwise.
    async fn classify(&self, text: &str) -> EmotionLabel {
        let keyword_label = emotion::classify(text);

        let history_len = self.state.read().await.history.len();
        if history_len < self.config.min_training_samples {
            return keyword_label;
        }
        let Some(model) = self.model.load_full() else {
            return keyword_label;
        };

        let (predicted, confidence) = model.predict(text);
        if confidence >= self.config.min_confidence {
            debug!(%predicted, confidence, "statistical prediction accepted");
            predicted
        } else {
            debug!(%predicted, confidence, "low confidence, keyword fallback");
            keyword_label
        }
    }

    /// Append to history (and templates for emotional turns), then kick off
    /// retraining on the configured cadence.
    async fn record_turn(
        &self,
        input: &str,
        response: &str,
        label: EmotionLabel,
        store_template: bool,
    ) {
        let history_len = {
            let mut state = self.state.write().await;
            state.history.push(ConversationTurn {
                user_input: input.to_string(),
                response: response.to_string(),
                emotion: label,
                timestamp: Utc::now(),
            });
            if store_template {
                state
                    .templates
                    .add(label, input, response, self.config.template_cap);
            }
            state.history.len()
        };

        if history_len % self.config.retrain_every == 0 {
            self.spawn_retrain();
        }
    }

    /// Retrain in the background. At most one retrain runs at a time; a
    /// cycle that exceeds the timeout is abandoned and the previous model
    /// stays installed.
    fn spawn_retrain(&self) {
        if self
            .retrain_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("retrain already in flight, skipping");
            return;
        }

        let state = Arc::clone(&self.state);
        let model_slot = Arc::clone(&self.model);
        let in_flight = Arc::clone(&self.retrain_in_flight);
        let timeout = Duration::from_secs(self.config.retrain_timeout_secs);
        let snapshot_path = PathBuf::from(&self.config.snapshot_path);

        tokio::spawn(async move {
            let history = state.read().await.history.clone();
            let samples = history.len();
            info!(samples, "retraining statistical model");

            let trained = tokio::time::timeout(
                timeout,
                tokio::task::spawn_blocking(move || FittedModel::train(&history)),
            )
            .await;

            match trained {
                Ok(Ok(Ok(model))) => {
                    model_slot.store(Some(Arc::new(model)));
                    info!(samples, "model retrained and installed");

                    let snapshot = {
                        let state = state.read().await;
                        ModelSnapshot {
                            model: model_slot.load_full().map(|m| (*m).clone()),
                            templates: state.templates.clone(),
                            history: state.history.clone(),
                        }
                    };
                    if let Err(err) = snapshot.save(&snapshot_path) {
                        warn!(%err, "snapshot save failed");
                    }
                }
                Ok(Ok(Err(err))) => warn!(%err, "retraining failed, keeping previous model"),
                Ok(Err(err)) => warn!(%err, "retraining task panicked"),
                Err(_) => warn!(?timeout, "retraining timed out, keeping previous model"),
            }
            in_flight.store(false, Ordering::Release);
        });
    }

    pub async fn turn_count(&self) -> usize {
        self.state.read().await.history.len()
    }

    /// History length the installed model was fitted over, if any.
    pub fn model_trained_on(&self) -> Option<usize> {
        self.model.load_full().map(|m| m.trained_on)
    }
}

/// Seed state from the built-in examples and fit a first model over them.
fn bootstrap_state(config: &EngineConfig) -> (ConversationState, Option<FittedModel>) {
    let mut state = ConversationState::default();
    for &(input, label, response) in responses::BOOTSTRAP_EXAMPLES {
        state.history.push(ConversationTurn {
            user_input: input.to_string(),
            response: response.to_string(),
            emotion: label,
            timestamp: Utc::now(),
        });
        state
            .templates
            .add(label, input, response, config.template_cap);
    }
    let model = match FittedModel::train(&state.history) {
        Ok(model) => {
            info!(samples = model.trained_on, "bootstrapped initial model");
            Some(model)
        }
        Err(err) => {
            warn!(%err, "bootstrap training failed, keyword fallback only");
            None
        }
    };
    (state, model)
}

/// True when the utterance opens with a greeting word or phrase.
fn is_greeting(text: &str) -> bool {
    if responses::GREETING_PHRASES.iter().any(|p| text.starts_with(p)) {
        return true;
    }
    match text.split_whitespace().next() {
        Some(first) => responses::GREETING_WORDS.contains(&first.trim_matches(|c: char| !c.is_alphanumeric())),
        None => false,
    }
}

/// Assemble a response: context sentences first, then a therapeutic-need
/// phrase when one applies, then the emotion-pool body.
fn compose(text: &str, body: &str, need: Option<therapy::TherapeuticNeed>) -> String {
    let signals = context::analyze(text);
    let mut parts: Vec<&str> = Vec::new();
    if let Some(time) = signals.time_of_day {
        parts.push(responses::time_sentence(time));
    }
    if let Some(activity) = signals.activity {
        parts.push(responses::activity_sentence(activity));
    }
    if let Some(focus) = signals.health_focus {
        parts.push(responses::health_sentence(focus));
    }
    if let Some(need) = need {
        parts.push(responses::pick(responses::need_pool(need)));
    }
    parts.push(body);
    parts.join(" ")
}
