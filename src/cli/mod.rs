//! CLI command definitions and output rendering.
//!
//! Uses clap derive macros for argument definitions.

pub mod args;

use kgconfig::config::Settings;
use toml::Value;

/// Convert a TOML value into JSON for `show --json`.
///
/// Datetimes become strings; non-finite floats become `null`.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
    }
}

/// Render a single value for `get`: strings bare, tables as TOML documents.
pub fn render_value(value: &Value) -> Result<String, toml::ser::Error> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Table(table) => toml::to_string(table),
        other => Ok(other.to_string()),
    }
}

/// Print the `check` summary.
pub fn print_summary(settings: &Settings) {
    use colored::Colorize;

    let on_off = |enabled: bool| {
        if enabled {
            "enabled".green()
        } else {
            "disabled".yellow()
        }
    };

    println!("  {} configuration is valid", "✔".green().bold());
    println!("         {}  {}", "model:".cyan(), settings.llm.model);
    println!("      {}  {}", "base_url:".cyan(), settings.llm.base_url);
    println!("    {}  {}", "max_tokens:".cyan(), settings.llm.max_tokens);
    println!("   {}  {}", "temperature:".cyan(), settings.llm.temperature);
    println!(
        "      {}  {} words, {} overlap",
        "chunking:".cyan(),
        settings.chunking.chunk_size,
        settings.chunking.overlap
    );
    println!(
        "{}  {}",
        "standardization:".cyan(),
        on_off(settings.standardization.enabled)
    );
    println!("     {}  {}", "inference:".cyan(), on_off(settings.inference.enabled));
}
