//! # SafeSpace Chat Session Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs one interactive session over stdin/stdout. The process owns exactly
//! one `Session`; it is created when the command starts and dropped when the
//! user quits or input ends, which is the session teardown.
//!
//! ## Input
//!
//! - Plain lines are questions for the support bot.
//! - `/mood <1-5> [note]` logs a mood.
//! - `/recent [n]` shows the last `n` moods (default from `mood.recent_window`).
//! - `/export [path]` writes the mood history CSV (default: a timestamped file
//!   in `mood.export_dir`).
//! - `/history` prints the transcript, `/help` the command list, `/quit` ends.
//!
//! Blank lines are ignored. Errors from a single command (an out-of-range
//! mood, an unwritable export path, a typo) are printed and the session
//! continues with its state intact.
//!
//! ## Examples
//!
//! ```bash
//! safespace chat
//! printf 'what are your hours?\n/mood 4 calm\n/export mood.csv\n' | safespace chat --quiet
//! ```
//!
use crate::commands::load_responder;
use crate::common::fs::io as fs_io;
use crate::common::ui::{format_mood_entry, format_turn, speaker_label, CHAT_HELP};
use crate::core::config::Config;
use crate::core::error::{CliError, Result};
use anyhow::Context;
use chrono::Local;
use clap::Parser;
use safespace_core::chat::ChatRole;
use safespace_core::mood::MAX_MOOD;
use safespace_core::Session;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Arguments for `safespace chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Skip the welcome banner, prompts and farewell (useful when piping input).
    #[arg(long, short)]
    pub quiet: bool,
}

/// One parsed line of session input.
#[derive(Debug, PartialEq, Eq)]
enum SessionInput {
    Ask(String),
    Mood { score: i64, note: Option<String> },
    Recent(Option<usize>),
    Export(Option<PathBuf>),
    History,
    Help,
    Quit,
    Blank,
}

/// Handles `safespace chat`.
pub fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    let responder = Arc::new(load_responder(config)?);
    let mut session = Session::new(responder);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut session, config, stdin.lock(), stdout.lock(), !args.quiet)
}

/// # Session Loop (`run_session`)
///
/// Reads lines from `input` until `/quit` or end of input, dispatching each
/// to the session and writing the rendered result to `output`.
fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    config: &Config,
    mut input: R,
    mut output: W,
    interactive: bool,
) -> Result<()> {
    info!("Session started with {} FAQ rules", session.responder().len());
    if interactive {
        writeln!(
            output,
            "Chat with the SafeSpace support bot. Type /help for commands, /quit to leave."
        )?;
    }

    let mut line = String::new();
    loop {
        if interactive {
            write!(output, "{}: ", speaker_label(ChatRole::User))?;
            output.flush()?;
        }
        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read session input")?;
        if read == 0 {
            debug!("End of input reached");
            break;
        }

        let parsed = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                writeln!(output, "Error: {e}")?;
                continue;
            }
        };

        match parsed {
            SessionInput::Blank => continue,
            SessionInput::Quit => break,
            SessionInput::Help => writeln!(output, "{CHAT_HELP}")?,
            SessionInput::Ask(query) => {
                let answer = session.ask(&query);
                writeln!(output, "{}: {}", speaker_label(ChatRole::Bot), answer)?;
            }
            SessionInput::Mood { score, note } => match session.log_mood(score, note.as_deref()) {
                Ok(entry) => writeln!(
                    output,
                    "Logged mood {}/{} at {}.",
                    entry.mood(),
                    MAX_MOOD,
                    entry.formatted_timestamp()
                )?,
                Err(e) => {
                    warn!("Rejected mood entry: {}", e);
                    writeln!(output, "Error: {e}")?;
                }
            },
            SessionInput::Recent(count) => {
                let entries = session.recent_moods(count.unwrap_or(config.mood.recent_window));
                if entries.is_empty() {
                    writeln!(output, "No moods logged yet.")?;
                }
                for entry in entries {
                    writeln!(output, "{}", format_mood_entry(entry))?;
                }
            }
            SessionInput::Export(path) => {
                let path = path.unwrap_or_else(|| default_export_path(&config.mood.export_dir));
                match export_moods(session, &path) {
                    Ok(()) => writeln!(
                        output,
                        "Exported {} mood entries to {}",
                        session.moods().len(),
                        path.display()
                    )?,
                    Err(e) => {
                        warn!("Mood export failed: {:#}", e);
                        writeln!(output, "Error: {e:#}")?;
                    }
                }
            }
            SessionInput::History => {
                if session.transcript().is_empty() {
                    writeln!(output, "No messages yet.")?;
                }
                for turn in session.transcript() {
                    writeln!(output, "{}", format_turn(turn))?;
                }
            }
        }
    }

    info!(
        "Session ended with {} chat turns and {} mood entries",
        session.transcript().len(),
        session.moods().len()
    );
    if interactive {
        writeln!(output, "Take care! This session's chat and mood history have been cleared.")?;
    }
    Ok(())
}

fn parse_line(line: &str) -> Result<SessionInput> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(SessionInput::Blank);
    }
    if !trimmed.starts_with('/') {
        return Ok(SessionInput::Ask(trimmed.to_string()));
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    let parsed = match command {
        "/mood" => {
            let (score, note) = match rest.split_once(char::is_whitespace) {
                Some((score, note)) => (score, Some(note.trim().to_string())),
                None => (rest, None),
            };
            if score.is_empty() {
                anyhow::bail!(CliError::ArgumentParsing(
                    "Usage: /mood <1-5> [note]".to_string()
                ));
            }
            let score = score.parse::<i64>().map_err(|_| {
                CliError::ArgumentParsing(format!(
                    "Mood must be a whole number from 1 to {MAX_MOOD}, got '{score}'"
                ))
            })?;
            SessionInput::Mood { score, note }
        }
        "/recent" => {
            if rest.is_empty() {
                SessionInput::Recent(None)
            } else {
                let count = rest.parse::<usize>().map_err(|_| {
                    CliError::ArgumentParsing(format!(
                        "Expected a number of entries, got '{rest}'"
                    ))
                })?;
                SessionInput::Recent(Some(count))
            }
        }
        "/export" => {
            if rest.is_empty() {
                SessionInput::Export(None)
            } else {
                SessionInput::Export(Some(PathBuf::from(shellexpand::tilde(rest).into_owned())))
            }
        }
        "/history" => SessionInput::History,
        "/help" => SessionInput::Help,
        "/quit" | "/exit" => SessionInput::Quit,
        other => anyhow::bail!(CliError::ArgumentParsing(format!(
            "Unknown command '{other}'. Type /help for the list of commands."
        ))),
    };
    Ok(parsed)
}

fn default_export_path(export_dir: &str) -> PathBuf {
    let file_name = Local::now()
        .format("mood_history_%Y%m%d_%H%M%S.csv")
        .to_string();
    Path::new(export_dir).join(file_name)
}

fn export_moods(session: &Session, path: &Path) -> Result<()> {
    let csv = session.export_moods()?;
    fs_io::write_string_to_file(path, &csv)
        .with_context(|| format!("Failed to export mood history to {}", path.display()))
}
