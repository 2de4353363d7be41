//! # SafeSpace Mood Log
//!
//! File: lib/src/mood.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A personal mood journal scoped to a single session. Users log a score from
//! 1 to 5 with an optional note; the log keeps every entry in creation order,
//! offers a bounded "recent entries" view, and exports the full history as CSV.
//!
//! ## Architecture
//!
//! - `MoodEntry`: one immutable `(timestamp, mood, note)` record.
//! - `MoodLog`: the append-only sequence. There is no deletion, editing or
//!   deduplication; entries live until the owning session is dropped.
//!
//! Every operation is atomic with respect to the stored entries: a rejected
//! `append` adds nothing, and exporting only reads.
//!
//! ## CSV Format
//!
//! ```text
//! Date,Mood,Note
//! 2025-03-14 09:30,4,Slept well
//! 2025-03-14 18:05,2,
//! 2025-03-15 08:00,3,"Busy, but fine"
//! ```
//!
//! `Date` has minute precision. Missing notes export as an empty field. Notes
//! containing commas, quotes or newlines are quoted per RFC 4180. Lines end
//! with `\n`.
//!
use crate::error::{Result, SafespaceError};
use chrono::{Local, NaiveDateTime};
use std::io;
use tracing::debug;

/// Lowest accepted mood score.
pub const MIN_MOOD: u8 = 1;
/// Highest accepted mood score.
pub const MAX_MOOD: u8 = 5;
/// Number of entries shown in the "recent entries" view by default.
pub const DEFAULT_RECENT_WINDOW: usize = 5;

/// Timestamp format used by the CSV export and by list views.
pub const MOOD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const CSV_HEADER: [&str; 3] = ["Date", "Mood", "Note"];

/// One logged mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    timestamp: NaiveDateTime,
    mood: u8,
    note: Option<String>,
}

impl MoodEntry {
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The mood score, always within `MIN_MOOD..=MAX_MOOD`.
    pub fn mood(&self) -> u8 {
        self.mood
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM`.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(MOOD_DATE_FORMAT).to_string()
    }
}

/// # Mood Log (`MoodLog`)
///
/// Append-only, session-scoped list of `MoodEntry` values.
#[derive(Debug, Default, Clone)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Log a Mood (`append`)
    ///
    /// Records a mood stamped with the current local time.
    ///
    /// ## Arguments
    ///
    /// * `mood` - Score supplied by the caller. Accepted range is 1 to 5 inclusive.
    /// * `note` - Optional free text. A blank note is stored as absent.
    ///
    /// ## Returns
    ///
    /// * `Result<&MoodEntry>` - The entry just stored.
    ///
    /// ## Errors
    ///
    /// * `SafespaceError::InvalidInput` if `mood` is out of range. The log is
    ///   left exactly as it was.
    pub fn append(&mut self, mood: i64, note: Option<&str>) -> Result<&MoodEntry> {
        self.append_at(Local::now().naive_local(), mood, note)
    }

    /// Same as [`MoodLog::append`] with an explicit timestamp.
    pub fn append_at(
        &mut self,
        timestamp: NaiveDateTime,
        mood: i64,
        note: Option<&str>,
    ) -> Result<&MoodEntry> {
        let mood = validate_mood(mood)?;
        let note = note
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string);

        let index = self.entries.len();
        self.entries.push(MoodEntry {
            timestamp,
            mood,
            note,
        });
        debug!("Logged mood {} (entry #{})", mood, index + 1);
        Ok(&self.entries[index])
    }

    /// # Recent Entries (`recent`)
    ///
    /// The last `n` entries, oldest of the window first. Returns fewer when the
    /// log is shorter than `n`, and nothing when `n` is zero.
    pub fn recent(&self, n: usize) -> &[MoodEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Every entry in creation order.
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// # Export as CSV (`export_csv`)
    ///
    /// Renders the whole history as a CSV document with a `Date,Mood,Note`
    /// header. An empty log yields just the header line.
    ///
    /// ## Errors
    ///
    /// * `SafespaceError::Export` on a serialization fault. The log is never
    ///   modified by exporting.
    pub fn export_csv(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| SafespaceError::Export(format!("CSV output is not valid UTF-8: {e}")))
    }

    /// Streams the CSV document produced by [`MoodLog::export_csv`] into `writer`.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        csv_writer.write_record(CSV_HEADER).map_err(export_error)?;
        for entry in &self.entries {
            let date = entry.formatted_timestamp();
            let mood = entry.mood.to_string();
            csv_writer
                .write_record([date.as_str(), mood.as_str(), entry.note().unwrap_or("")])
                .map_err(export_error)?;
        }
        csv_writer
            .flush()
            .map_err(|e| SafespaceError::Export(format!("Failed to flush CSV output: {e}")))?;

        debug!("Exported {} mood entries as CSV", self.entries.len());
        Ok(())
    }
}

fn validate_mood(mood: i64) -> Result<u8> {
    if (i64::from(MIN_MOOD)..=i64::from(MAX_MOOD)).contains(&mood) {
        u8::try_from(mood).map_err(|_| mood_range_error(mood))
    } else {
        Err(mood_range_error(mood))
    }
}

fn mood_range_error(mood: i64) -> SafespaceError {
    SafespaceError::InvalidInput(format!(
        "mood must be between {MIN_MOOD} and {MAX_MOOD}, got {mood}"
    ))
}

fn export_error(err: csv::Error) -> SafespaceError {
    SafespaceError::Export(format!("Failed to write CSV record: {err}"))
}
