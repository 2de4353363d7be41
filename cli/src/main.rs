//! # SafeSpace Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `safespace` CLI, the
//! terminal front end for the SafeSpace support bot, mood log and forms.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading layered configuration and applying global overrides
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`ask`, `chat`, `rules`, `form`) is a variant in
//!   the `Commands` enum, mapped to a handler in `commands::*`
//! - All session state lives in `safespace_core`; handlers only render it
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! safespace --help
//!
//! # One question, with debug logging
//! safespace -vv ask what are your hours?
//!
//! # Interactive session using a custom rule table
//! safespace --rules ./my_rules.toml chat
//! ```
//!
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (ask, chat, rules, form)
mod common; // Shared utilities (fs, ui)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "safespace",
    about = "SafeSpace Organisation support bot, mood log and forms",
    long_about = "Ask the SafeSpace FAQ bot, keep a private per-session mood log with CSV export,\n\
                  and submit counseling, donation, volunteer or partnership forms.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Use this FAQ rule table (TOML) instead of the configured or built-in one.
    #[arg(long, global = true, value_name = "PATH")]
    rules: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Ask the support bot a single question.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Start an interactive session with chat and mood logging.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// List the active FAQ rules in precedence order.
    Rules(commands::rules::RulesArgs),
    /// Submit one of the organisation's forms.
    #[command(alias = "f")]
    Form(commands::form::FormArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = core::config::load_config()?;
    if let Some(rules) = cli.rules {
        let expanded = shellexpand::tilde(&rules.to_string_lossy()).into_owned();
        tracing::info!("Using FAQ rules from command line: {}", expanded);
        config.faq.rules_file = Some(expanded);
        core::config::validate_config(&config).context("Invalid --rules argument")?;
    }

    match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args, &config),
        Commands::Chat(args) => commands::chat::handle_chat(args, &config),
        Commands::Rules(args) => commands::rules::handle_rules(args, &config),
        Commands::Form(args) => commands::form::handle_form(args),
    }
}
