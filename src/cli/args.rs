//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use kgconfig::Overrides;
use kgconfig::constants::DEFAULT_CONFIG_PATH;

/// Inspect knowledge graph generator configuration files.
#[derive(Parser, Debug)]
#[command(name = "kgconfig", version = kgconfig::constants::VERSION)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Disable entity standardization.
    #[arg(long, global = true, default_value_t = false)]
    pub no_standardize: bool,

    /// Disable relationship inference.
    #[arg(long, global = true, default_value_t = false)]
    pub no_inference: bool,

    /// Log loader activity to stderr (overridden by RUST_LOG).
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            no_standardize: self.no_standardize,
            no_inference: self.no_inference,
        }
    }
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the loaded configuration with secrets masked.
    Show(ShowArgs),

    /// Validate the generator settings and print a summary.
    Check(CheckArgs),

    /// Print the value at a dotted key path (e.g. `llm.model`).
    Get(GetArgs),

    /// Print version information.
    Version,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Emit pretty-printed JSON instead of TOML.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Emit the validated settings as JSON (API key omitted).
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Arguments for the `get` subcommand.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Dotted key path; numeric segments index into arrays.
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_config_toml() {
        let cli = Cli::try_parse_from(["kgconfig", "check"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert_eq!(cli.overrides(), Overrides::default());
        assert!(matches!(cli.command, Command::Check(CheckArgs { json: false })));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "kgconfig",
            "show",
            "--json",
            "--config",
            "other.toml",
            "--no-inference",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(cli.overrides().no_inference);
        assert!(!cli.overrides().no_standardize);
        assert!(matches!(cli.command, Command::Show(ShowArgs { json: true })));
    }

    #[test]
    fn get_requires_key() {
        assert!(Cli::try_parse_from(["kgconfig", "get"]).is_err());
        let cli = Cli::try_parse_from(["kgconfig", "get", "llm.model"]).unwrap();
        match cli.command {
            Command::Get(args) => assert_eq!(args.key, "llm.model"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
