//! # SafeSpace Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Answers a single question with the FAQ responder and exits. No session is
//! kept; use `safespace chat` for a conversation with a transcript.
//!
//! ## Examples
//!
//! ```bash
//! safespace ask what are your hours?
//! safespace ask --explain "How can I volunteer?"
//! ```
//!
use crate::commands::load_responder;
use crate::core::config::Config;
use crate::core::error::{CliError, Result};
use clap::Parser;
use tracing::debug;

/// Arguments for `safespace ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question to ask. Multiple words are joined with spaces.
    #[arg(required = true)]
    pub question: Vec<String>,

    /// Print which rule pattern produced the answer before the answer itself.
    #[arg(long)]
    pub explain: bool,
}

/// Handles `safespace ask`.
pub fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let query = args.question.join(" ");
    if query.trim().is_empty() {
        anyhow::bail!(CliError::ArgumentParsing(
            "Question cannot be empty".to_string()
        ));
    }
    debug!("Answering one-shot question: {:?}", query);

    let responder = load_responder(config)?;
    if args.explain {
        match responder.matching_rule(&query) {
            Some(rule) => println!("Matched pattern: {}", rule.pattern),
            None => println!("No rule matched; using the default answer."),
        }
    }
    println!("{}", responder.respond(&query));
    Ok(())
}
