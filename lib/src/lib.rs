//! # SafeSpace Session Core
//!
//! File: lib/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The reusable logic behind the SafeSpace Organisation site. Everything here
//! is in-memory and scoped to one visitor session; there is no persistence,
//! authentication or networking.
//!
//! ## Architecture
//!
//! - `faq`: ordered pattern rules answering free-text questions.
//! - `chat`: the session transcript of user and bot turns.
//! - `mood`: the append-only mood journal with CSV export.
//! - `session`: the explicit owner of one transcript and one mood log.
//! - `forms`: validation for the counseling, donation, volunteer and
//!   partnership forms.
//! - `error`: the `SafespaceError` type shared by all of the above.
//!
//! The presentation layer (the `safespace` CLI in this workspace, or any
//! other front end) builds one `FaqResponder`, creates a `Session` per user,
//! and renders whatever the session returns.
//!

pub mod chat;
pub mod error;
pub mod faq;
pub mod forms;
pub mod mood;
pub mod session;

pub use error::{Result, SafespaceError};
pub use faq::{FaqResponder, FaqRule, RuleTable};
pub use mood::{MoodEntry, MoodLog, DEFAULT_RECENT_WINDOW};
pub use session::Session;
