//! # SafeSpace UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Plain-text rendering for what the session core returns: transcript turns,
//! mood entries, and the chat help text.
//!
use safespace_core::chat::{ChatRole, ChatTurn};
use safespace_core::mood::{MoodEntry, MAX_MOOD};

/// Speaker label used in front of each chat line.
pub fn speaker_label(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "You",
        ChatRole::Bot => "Bot",
    }
}

/// Renders one transcript turn, e.g. `Bot: Open Monday to Friday...`.
pub fn format_turn(turn: &ChatTurn) -> String {
    format!("{}: {}", speaker_label(turn.role), turn.text)
}

/// Renders one mood entry as `YYYY-MM-DD HH:MM  n/5  note`.
pub fn format_mood_entry(entry: &MoodEntry) -> String {
    match entry.note() {
        Some(note) => format!(
            "{}  {}/{}  {}",
            entry.formatted_timestamp(),
            entry.mood(),
            MAX_MOOD,
            note
        ),
        None => format!(
            "{}  {}/{}",
            entry.formatted_timestamp(),
            entry.mood(),
            MAX_MOOD
        ),
    }
}

/// Help text for the interactive `chat` session.
pub const CHAT_HELP: &str = "\
Type a question to ask the support bot, or use one of these commands:
  /mood <1-5> [note]   Log how you feel right now
  /recent [n]          Show your most recent mood entries
  /export [path]       Save your mood history as CSV
  /history             Show this conversation so far
  /help                Show this help
  /quit                End the session";
