//! Settings configuration
//!
//! Manages user-configurable settings for the input method.
//! Default values are defined in `config/default.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use keystem_engine::{LanguageId, ModeId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Suggestion scrolling delay when the alternative scrolling hack is on
const ALTERNATIVE_SCROLLING_DELAY_MS: u64 = 200;

/// Configuration settings for the input method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Language, mode and text case state
    pub input: InputSettings,
    /// Diagnostics
    pub debug: DebugSettings,
    /// Per-device workarounds
    pub hacks: HackSettings,
}

/// Persisted typing state, validated at the start of every session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSettings {
    /// Ids of the languages the user has enabled
    pub enabled_languages: Vec<LanguageId>,
    /// Current language id
    pub language: LanguageId,
    /// Current input mode id
    pub input_mode: ModeId,
    /// Current text case id
    pub text_case: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugSettings {
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    pub log_level: String,
    pub enable_system_logs: bool,
    pub input_handling_mode: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackSettings {
    pub alternative_suggestion_scrolling: bool,
    pub clear_insets: bool,
    pub fb_messenger: bool,
    pub google_chat: bool,
    /// Protection against keypads that report a single press more than once
    pub key_pad_debounce_time_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

/// Parse user TOML content merged on top of default.toml.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: toml::Value = toml::from_str(user_content)?;
    merge_toml(&mut base, &user);
    let settings: Settings = base.try_into()?;
    Ok(settings)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "keystem", "keystem-im")
}

impl Settings {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Delay between suggestion scroll steps, in milliseconds
    pub fn suggestion_scrolling_delay_ms(&self) -> u64 {
        if self.hacks.alternative_suggestion_scrolling {
            ALTERNATIVE_SCROLLING_DELAY_MS
        } else {
            0
        }
    }

    /// Load settings from the default configuration file.
    /// Falls back to embedded default.toml if the config file does not exist.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_file)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)?;
        parse_with_defaults(&content)
    }

    /// Save settings to the default configuration file
    pub fn save(&self) -> Result<()> {
        let Some(config_file) = Self::config_file() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&config_file)
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!("Saving config to {:?}", path);
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
