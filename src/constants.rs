//! App-wide constants.
//!
//! Centralises the tool name, default paths and display strings so a
//! rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "kgconfig";

/// Crate version, as declared in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration file loaded when no path is given, relative to the
/// current working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Placeholder printed in place of secret values.
pub const REDACTED: &str = "[REDACTED]";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_LOG_FILTER: &str = "debug";
