use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    pub engine: EngineConfig,
    pub gateway: GatewayConfig,
}

impl SolaceConfig {
    /// Load config from a TOML file, falling back to defaults for missing
    /// fields. After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: SolaceConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file doesn't exist, return defaults
    /// with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SOLACE_SNAPSHOT_PATH") {
            self.engine.snapshot_path = v;
        }
        if let Ok(v) = std::env::var("SOLACE_HOST") {
            self.gateway.host = v;
        }
        if let Ok(v) = std::env::var("SOLACE_PORT") {
            if let Ok(n) = v.parse() {
                self.gateway.port = n;
            }
        }
        if let Ok(v) = std::env::var("SOLACE_RETRAIN_EVERY") {
            if let Ok(n) = v.parse() {
                self.engine.retrain_every = n;
            }
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cosine similarity a stored template must exceed to be reused.
    pub similarity_threshold: f32,
    /// Minimum posterior probability before a statistical prediction is
    /// trusted over the keyword fallback.
    pub min_confidence: f32,
    /// History length required before the statistical classifier is
    /// consulted at all.
    pub min_training_samples: usize,
    /// Retrain the statistical model every N recorded turns.
    pub retrain_every: usize,
    /// Maximum templates kept per emotion; oldest evicted first.
    pub template_cap: usize,
    /// Upper bound on one retraining pass. Exceeding it skips the cycle.
    pub retrain_timeout_secs: u64,
    /// Where the model snapshot is persisted.
    pub snapshot_path: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.3,
            min_confidence: 0.6,
            min_training_samples: 10,
            retrain_every: 10,
            template_cap: 100,
            retrain_timeout_secs: 30,
            snapshot_path: "solace_model.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
