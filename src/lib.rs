//! kgconfig — TOML configuration loading for the knowledge graph generator
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod logging;

pub use config::{
    Config, ConfigError, LoadFailureKind, Overrides, Settings, SettingsError, failure_line,
    load_config, load_config_or_report, load_default_config,
};
