//! Configuration loading and typed access.
//!
//! [`loader`] turns a TOML file into a [`Config`] mapping. [`settings`]
//! reads the sections the generator cares about into typed structs and
//! applies command-line overrides.

pub mod loader;
pub mod settings;

pub use loader::{
    Config, ConfigError, LoadFailureKind, failure_line, load_config, load_config_or_report,
    load_default_config,
};
pub use settings::{
    ChunkingSettings, InferenceSettings, LlmSettings, Overrides, Settings, SettingsError,
    StandardizationSettings,
};
