//! # SafeSpace Session
//!
//! File: lib/src/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A `Session` is the explicit owner of everything one visitor accumulates:
//! the chat transcript and the mood log. The presentation layer creates one
//! session per user context and drops it at teardown; nothing outlives it.
//!
//! ## Architecture
//!
//! - The FAQ responder is immutable and shared through an `Arc`, so many
//!   sessions can answer from one compiled rule table.
//! - The `ChatLog` and `MoodLog` are owned exclusively by the session and
//!   mutated only through `&mut self`, so no locking is involved.
//! - Every operation returns its result directly (the answer, the new entry,
//!   the CSV text) for the caller to render.
//!
//! ## Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use safespace_core::faq::FaqResponder;
//! use safespace_core::session::Session;
//!
//! let responder = Arc::new(FaqResponder::builtin()?);
//! let mut session = Session::new(responder);
//!
//! let answer = session.ask("How can I volunteer?").to_string();
//! assert!(answer.contains("Volunteer form"));
//! assert_eq!(session.transcript().len(), 2);
//!
//! session.log_mood(4, Some("Good talk today"))?;
//! assert!(session.export_moods()?.starts_with("Date,Mood,Note\n"));
//! # Ok::<(), safespace_core::error::SafespaceError>(())
//! ```
//!
use crate::chat::{ChatLog, ChatTurn};
use crate::error::Result;
use crate::faq::FaqResponder;
use crate::mood::{MoodEntry, MoodLog};
use std::io;
use std::sync::Arc;
use tracing::debug;

/// State for a single visitor's session.
#[derive(Debug)]
pub struct Session {
    responder: Arc<FaqResponder>,
    chat: ChatLog,
    moods: MoodLog,
}

impl Session {
    /// Starts an empty session answering from `responder`.
    pub fn new(responder: Arc<FaqResponder>) -> Self {
        debug!("Starting new session");
        Self {
            responder,
            chat: ChatLog::new(),
            moods: MoodLog::new(),
        }
    }

    /// # Ask the Support Bot (`ask`)
    ///
    /// Answers `query`, records the user turn and the bot turn in the
    /// transcript, and returns the answer. Unmatched queries are answered with
    /// the default answer and recorded the same way.
    pub fn ask(&mut self, query: &str) -> &str {
        let response = self.responder.respond(query);
        self.chat.record_exchange(query, response);
        response
    }

    /// The full transcript, oldest turn first.
    pub fn transcript(&self) -> &[ChatTurn] {
        self.chat.turns()
    }

    /// Logs a mood. See [`MoodLog::append`].
    pub fn log_mood(&mut self, mood: i64, note: Option<&str>) -> Result<&MoodEntry> {
        self.moods.append(mood, note)
    }

    /// The last `n` logged moods. See [`MoodLog::recent`].
    pub fn recent_moods(&self, n: usize) -> &[MoodEntry] {
        self.moods.recent(n)
    }

    pub fn moods(&self) -> &MoodLog {
        &self.moods
    }

    /// The mood history as CSV text.
    pub fn export_moods(&self) -> Result<String> {
        self.moods.export_csv()
    }

    /// Streams the mood history CSV into `writer`.
    pub fn write_moods<W: io::Write>(&self, writer: W) -> Result<()> {
        self.moods.write_csv(writer)
    }

    /// The shared responder this session answers from.
    pub fn responder(&self) -> &FaqResponder {
        &self.responder
    }
}
