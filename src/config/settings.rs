//! Typed view of the sections the generator reads.
//!
//! `llm` is required. `chunking`, `standardization` and `inference` fall
//! back to built-in defaults when the section or a key is missing. Any
//! other keys stay available through [`Config`] and are ignored here.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::Value;

use super::loader::Config;
use crate::constants::REDACTED;

/// Errors while building [`Settings`] from a [`Config`].
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Settings for the generator's LLM endpoint.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmSettings {
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub base_url: String,
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("model", &self.model)
            .field("api_key", &REDACTED)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Text chunking, in words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            overlap: 50,
        }
    }
}

/// Entity standardization pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardizationSettings {
    pub enabled: bool,
}

/// Relationship inference pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceSettings {
    pub enabled: bool,
}

/// Top-level typed settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub llm: LlmSettings,
    #[serde(default)]
    pub chunking: ChunkingSettings,
    #[serde(default)]
    pub standardization: StandardizationSettings,
    #[serde(default)]
    pub inference: InferenceSettings,
}

impl Settings {
    /// Deserialize and validate the known sections of `config`.
    pub fn from_config(config: &Config) -> Result<Self, SettingsError> {
        let settings: Settings = Value::Table(config.as_table().clone()).try_into()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.llm.model.trim().is_empty() {
            return invalid("llm.model must not be empty".to_string());
        }
        if self.llm.max_tokens == 0 {
            return invalid("llm.max_tokens must be greater than 0".to_string());
        }
        if !self.llm.temperature.is_finite() || !(0.0..=2.0).contains(&self.llm.temperature) {
            return invalid(format!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            ));
        }
        if self.chunking.chunk_size == 0 {
            return invalid("chunking.chunk_size must be greater than 0".to_string());
        }
        if self.chunking.overlap >= self.chunking.chunk_size {
            return invalid(format!(
                "chunking.overlap ({}) must be smaller than chunking.chunk_size ({})",
                self.chunking.overlap, self.chunking.chunk_size
            ));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> Result<(), SettingsError> {
    Err(SettingsError::Validation(msg))
}

/// Command-line switches applied on top of a loaded config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub no_standardize: bool,
    pub no_inference: bool,
}

impl Overrides {
    /// Disable the selected passes in `config`.
    pub fn apply(&self, config: &mut Config) {
        if self.no_standardize {
            config.disable_section("standardization");
        }
        if self.no_inference {
            config.disable_section("inference");
        }
    }
}
