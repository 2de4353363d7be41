//! # SafeSpace Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for the `safespace` CLI,
//! handling loading, merging, validation, and access to configuration data.
//! It supports a multi-level approach that combines defaults, user settings,
//! and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--rules`), applied by `main.rs`
//! 2. Project-specific `.safespace.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/safespace/config.toml` on Linux)
//! 4. Default values defined in the code
//!
//! The project search walks up from the current directory and stops at the
//! first directory containing `.git`.
//!
//! Each file is read as a layer of optional keys, so a layer overrides exactly
//! the keys it sets. Relative paths in a file are resolved against the
//! directory holding that file, after `~` expansion.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [faq]
//! rules_file = "~/safespace/faq_rules.toml"
//!
//! [mood]
//! recent_window = 7
//! export_dir = "~/Documents/mood"
//! ```
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let window = cfg.mood.recent_window;
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{CliError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The effective configuration after all layers are applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub faq: FaqConfig,
    pub mood: MoodConfig,
}

/// Settings for the support bot.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FaqConfig {
    /// Path to a TOML rule table. When unset, the built-in SafeSpace table is used.
    pub rules_file: Option<String>,
}

/// Settings for the mood journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodConfig {
    /// How many entries `/recent` shows when no count is given.
    pub recent_window: usize,
    /// Directory for `/export` when no explicit path is given.
    pub export_dir: String,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            recent_window: default_recent_window(),
            export_dir: default_export_dir(),
        }
    }
}

fn default_recent_window() -> usize {
    safespace_core::DEFAULT_RECENT_WINDOW
}
fn default_export_dir() -> String {
    ".".to_string()
}

/// One configuration file as written on disk.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
struct ConfigLayer {
    #[serde(default)]
    faq: FaqLayer,
    #[serde(default)]
    mood: MoodLayer,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct FaqLayer {
    rules_file: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct MoodLayer {
    recent_window: Option<usize>,
    export_dir: Option<String>,
}

impl ConfigLayer {
    /// Expands `~` and anchors relative paths at `base`.
    fn resolve_paths(&mut self, base: &Path) {
        if let Some(rules_file) = self.faq.rules_file.as_mut() {
            let resolved = resolve_path(rules_file, base);
            debug!("Resolved FAQ rules file: {} -> {}", rules_file, resolved);
            *rules_file = resolved;
        }
        if let Some(export_dir) = self.mood.export_dir.as_mut() {
            let resolved = resolve_path(export_dir, base);
            debug!("Resolved mood export directory: {} -> {}", export_dir, resolved);
            *export_dir = resolved;
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".safespace.toml";

/// # Load Configuration (`load_config`)
///
/// Applies the user and project configuration files (both optional) over the
/// defaults, then validates the result.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut config = Config::default();
    if let Some(user_layer) = load_user_config()? {
        apply_layer(&mut config, user_layer);
    }
    if let Some(project_layer) = load_project_config(&current_dir)? {
        apply_layer(&mut config, project_layer);
    }
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "SafeSpace", "safespace") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            let mut layer = load_config_from_path(&config_path)?;
            layer.resolve_paths(config_dir);
            Ok(Some(layer))
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<ConfigLayer>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        let mut layer = load_config_from_path(&project_config_path)?;
        let project_dir = project_config_path.parent().unwrap_or(start);
        layer.resolve_paths(project_dir);
        Ok(Some(layer))
    } else {
        debug!(
            "No project configuration file (.safespace.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = io::read_file_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Every key the layer sets wins over the current value.
fn apply_layer(config: &mut Config, layer: ConfigLayer) {
    if let Some(rules_file) = layer.faq.rules_file {
        config.faq.rules_file = Some(rules_file);
    }
    if let Some(recent_window) = layer.mood.recent_window {
        config.mood.recent_window = recent_window;
    }
    if let Some(export_dir) = layer.mood.export_dir {
        config.mood.export_dir = export_dir;
    }
}

fn resolve_path(value: &str, base: &Path) -> String {
    let expanded = shellexpand::tilde(value).into_owned();
    if Path::new(&expanded).is_relative() {
        base.join(&expanded).to_string_lossy().into_owned()
    } else {
        expanded
    }
}

/// Checks the merged configuration. Also used by `main.rs` after CLI
/// overrides are applied.
pub fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.mood.recent_window == 0 {
        return Err(anyhow!(CliError::Config(
            "mood.recent_window must be at least 1".to_string()
        )));
    }
    if let Some(rules_file) = &config.faq.rules_file {
        let path = PathBuf::from(rules_file);
        if !path.is_file() {
            return Err(anyhow!(CliError::Config(format!(
                "Configured FAQ rules file '{}' does not exist or is not a file.",
                path.display()
            ))));
        }
    }
    let export_dir = PathBuf::from(&config.mood.export_dir);
    if !export_dir.exists() {
        warn!(
            "Configured mood export directory '{}' does not exist; it will be created on export.",
            export_dir.display()
        );
    } else if !export_dir.is_dir() {
        return Err(anyhow!(CliError::Config(format!(
            "Configured mood export path '{}' exists but is not a directory.",
            export_dir.display()
        ))));
    }
    info!("Configuration validation successful.");
    Ok(())
}
