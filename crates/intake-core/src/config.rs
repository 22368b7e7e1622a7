use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{IntakeError, Result};

/// Top-level configuration for the intake client.
///
/// Loaded from `~/.intake/config.toml` by default. Each section corresponds
/// to one concern of the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub intake: FlowConfig,
}

impl IntakeConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: IntakeConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Reject values that would make every answer or every backend call fail.
    pub fn validate(&self) -> Result<()> {
        if self.intake.max_answer_length == 0 {
            return Err(IntakeError::Config(
                "intake.max_answer_length must be at least 1".to_string(),
            ));
        }
        if self.backend.timeout_secs == 0 {
            return Err(IntakeError::Config(
                "backend.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| IntakeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Backend collaborator settings (intake enrichment, matching, booking).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the clinical backend, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// When false, every collaborator call is treated as unreachable and the
    /// local flow is used throughout.
    pub enabled: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
            enabled: true,
        }
    }
}

/// Questionnaire behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Maximum accepted answer length in characters.
    pub max_answer_length: usize,
    /// Phrases prefixed to the next question after an answer is accepted.
    pub acknowledgments: Vec<String>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            max_answer_length: 2000,
            acknowledgments: default_acknowledgments(),
        }
    }
}

fn default_acknowledgments() -> Vec<String> {
    [
        "Got it.",
        "Thank you for sharing that.",
        "I understand.",
        "Noted.",
        "Thanks, that helps.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
