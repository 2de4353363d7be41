//! # SafeSpace Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `safespace` CLI and
//! the small amount of setup they share (building the FAQ responder from
//! configuration).
//!
//! ## Command Groups
//!
//! - `ask`: one-shot question to the support bot
//! - `chat`: interactive session (chat, mood journal, CSV export)
//! - `form`: validate and confirm one of the site's forms
//! - `rules`: list the active FAQ rule table
//!
//! Each command defines its own arguments structure and a handler function.
//!
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use safespace_core::FaqResponder;
use std::path::Path;
use tracing::info;

/// One-shot question: `safespace ask <QUESTION...>`.
pub mod ask;
/// Interactive session: `safespace chat`.
pub mod chat;
/// Form submissions: `safespace form counseling|donate|volunteer|partner`.
pub mod form;
/// Rule table listing: `safespace rules`.
pub mod rules;

/// # Build FAQ Responder (`load_responder`)
///
/// Uses the rule table file named in the configuration when there is one,
/// and the built-in SafeSpace table otherwise.
pub fn load_responder(config: &Config) -> Result<FaqResponder> {
    match &config.faq.rules_file {
        Some(rules_file) => {
            let path = Path::new(rules_file);
            info!("Using FAQ rule table from {}", path.display());
            FaqResponder::from_path(path)
                .with_context(|| format!("Failed to load FAQ rules from {}", path.display()))
        }
        None => {
            info!("Using built-in FAQ rule table");
            FaqResponder::builtin().context("Failed to load built-in FAQ rules")
        }
    }
}
