//! kgconfig — inspect knowledge graph generator configuration files.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{CheckArgs, Cli, Command, GetArgs, ShowArgs};
use kgconfig::config::{self, Config, Settings};
use kgconfig::{constants, logging};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Version = cli.command {
        return run_version();
    }

    let Some(mut config) = config::load_config_or_report(&cli.config) else {
        bail!(
            "Failed to load configuration from {}. Exiting.",
            cli.config.display()
        );
    };
    if config.is_empty() {
        bail!(
            "Failed to load configuration from {}. Exiting.",
            cli.config.display()
        );
    }
    cli.overrides().apply(&mut config);

    match cli.command {
        Command::Show(args) => run_show(&config, &args),
        Command::Check(args) => run_check(&config, &args),
        Command::Get(args) => run_get(&config, &args),
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

/// Print the configuration with secrets masked.
fn run_show(config: &Config, args: &ShowArgs) -> Result<()> {
    let shown = config.redacted();
    let text = if args.json {
        let json = cli::to_json(&toml::Value::Table(shown.into_table()));
        serde_json::to_string_pretty(&json).context("failed to render configuration as JSON")?
    } else {
        shown
            .to_toml_string()
            .context("failed to render configuration as TOML")?
    };
    println!("{}", text.trim_end());
    Ok(())
}

/// Validate generator settings and print a summary.
fn run_check(config: &Config, args: &CheckArgs) -> Result<()> {
    let settings = Settings::from_config(config)?;
    if args.json {
        let json =
            serde_json::to_string_pretty(&settings).context("failed to render settings as JSON")?;
        println!("{json}");
    } else {
        cli::print_summary(&settings);
    }
    Ok(())
}

/// Print a single value by dotted key.
fn run_get(config: &Config, args: &GetArgs) -> Result<()> {
    let Some(value) = config.lookup(&args.key) else {
        bail!("key not found: {}", args.key);
    };
    let text = cli::render_value(value)
        .with_context(|| format!("failed to render value at {}", args.key))?;
    println!("{}", text.trim_end());
    Ok(())
}
