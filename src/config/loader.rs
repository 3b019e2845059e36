//! Config mapping and loading logic.
//!
//! A configuration file is read as raw bytes, decoded as UTF-8 and parsed
//! as TOML into an untyped table. The file handle lives only inside
//! [`read_file`], so it is closed on every exit path.

use std::error::Error as _;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::{Table, Value};
use tracing::debug;

use crate::constants::{DEFAULT_CONFIG_PATH, REDACTED};

/// Keys whose values never appear in `Debug` output or `redacted()` copies.
const SECRET_KEYS: &[&str] = &["api_key"];

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file {path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        source: std::str::Utf8Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Coarse classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadFailureKind {
    NotFound,
    PermissionDenied,
    /// Any other I/O failure while opening or reading.
    Io,
    Encoding,
    Syntax,
}

impl fmt::Display for LoadFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailureKind::NotFound => write!(f, "not-found"),
            LoadFailureKind::PermissionDenied => write!(f, "permission-denied"),
            LoadFailureKind::Io => write!(f, "io"),
            LoadFailureKind::Encoding => write!(f, "encoding"),
            LoadFailureKind::Syntax => write!(f, "syntax"),
        }
    }
}

impl ConfigError {
    /// Which kind of failure this is.
    pub fn kind(&self) -> LoadFailureKind {
        match self {
            ConfigError::ReadFile { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => LoadFailureKind::NotFound,
                std::io::ErrorKind::PermissionDenied => LoadFailureKind::PermissionDenied,
                _ => LoadFailureKind::Io,
            },
            ConfigError::Encoding { .. } => LoadFailureKind::Encoding,
            ConfigError::ParseFile { .. } => LoadFailureKind::Syntax,
        }
    }

    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::ReadFile { path, .. }
            | ConfigError::Encoding { path, .. }
            | ConfigError::ParseFile { path, .. } => path,
        }
    }
}

/// Parsed configuration: the file's top-level table, verbatim.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    table: Table,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("table", &self.redacted().table)
            .finish()
    }
}

impl From<Table> for Config {
    fn from(table: Table) -> Self {
        Self { table }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Table>(text).map(Self::from)
    }

    /// Top-level value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.table.get(key)
    }

    /// Value at a dotted path such as `llm.model` or `servers.0.host`.
    ///
    /// Numeric segments index into arrays.
    pub fn lookup(&self, dotted: &str) -> Option<&Value> {
        let mut segments = dotted.split('.');
        let mut current = self.table.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Table(table) => table.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Nested table named `name`, if present and a table.
    pub fn section(&self, name: &str) -> Option<&Table> {
        self.table.get(name).and_then(Value::as_table)
    }

    pub fn as_table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Force `<name>.enabled = false`, creating the section when missing.
    ///
    /// A non-table value under `name` is replaced by a fresh table.
    pub fn disable_section(&mut self, name: &str) {
        let entry = self
            .table
            .entry(name.to_string())
            .or_insert(Value::Table(Table::new()));
        if !entry.is_table() {
            *entry = Value::Table(Table::new());
        }
        if let Value::Table(section) = entry {
            section.insert("enabled".to_string(), Value::Boolean(false));
        }
    }

    /// Copy with every secret value replaced by a placeholder.
    pub fn redacted(&self) -> Config {
        let mut table = self.table.clone();
        redact_table(&mut table);
        Config { table }
    }

    /// Serialize back to TOML text.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(&self.table)
    }
}

fn redact_table(table: &mut Table) {
    for (key, value) in table.iter_mut() {
        if SECRET_KEYS.contains(&key.as_str()) {
            *value = Value::String(REDACTED.to_string());
            continue;
        }
        redact_value(value);
    }
}

fn redact_value(value: &mut Value) {
    match value {
        Value::Table(table) => redact_table(table),
        Value::Array(items) => items.iter_mut().for_each(redact_value),
        _ => {}
    }
}

/// Load configuration from `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let bytes = read_file(path)?;
    let text = std::str::from_utf8(&bytes).map_err(|e| ConfigError::Encoding {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = Config::from_toml_str(text).map_err(|e| ConfigError::ParseFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), keys = config.len(), "loaded configuration");
    Ok(config)
}

/// Load `config.toml` from the current working directory.
pub fn load_default_config() -> Result<Config, ConfigError> {
    load_config(DEFAULT_CONFIG_PATH)
}

/// Load configuration, reporting any failure instead of returning it.
///
/// Failures are logged and printed to stderr as a single line, and the
/// caller gets `None`. Use [`load_config`] when the kind of failure matters.
pub fn load_config_or_report(path: impl AsRef<Path>) -> Option<Config> {
    let path = path.as_ref();
    match load_config(path) {
        Ok(config) => Some(config),
        Err(err) => {
            debug!(path = %path.display(), kind = %err.kind(), "configuration load failed");
            eprintln!("{}", failure_line(path, &err));
            None
        }
    }
}

/// The one-line diagnostic printed by [`load_config_or_report`].
pub fn failure_line(path: &Path, err: &ConfigError) -> String {
    let detail = err
        .source()
        .map(ToString::to_string)
        .unwrap_or_else(|| err.to_string());
    format!("Error loading configuration from {}: {detail}", path.display())
}

/// Read the whole file as bytes. The handle is dropped on return.
fn read_file(path: &Path) -> Result<Vec<u8>, ConfigError> {
    let read_err = |e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    };
    let mut file = File::open(path).map_err(read_err)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(read_err)?;
    Ok(bytes)
}
