//! Store configuration and environment overrides.
//!
//! # Responsibility
//! - Hold startup knobs for `NoteStore` (seeding, validation, default labels).
//! - Resolve logging level/directory defaults for CLI and FFI hosts.
//!
//! # Invariants
//! - Unset or blank environment values fall back to defaults.
//! - Malformed boolean values are rejected, never silently coerced.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Env key toggling the two example notes at startup.
pub const ENV_SEED_EXAMPLES: &str = "MEETNOTE_SEED_EXAMPLES";
/// Env key enabling non-blank title validation.
pub const ENV_REQUIRE_TITLE: &str = "MEETNOTE_REQUIRE_TITLE";
/// Env key for the rolling log directory.
pub const ENV_LOG_DIR: &str = "MEETNOTE_LOG_DIR";
/// Env key for the log level.
pub const ENV_LOG_LEVEL: &str = "MEETNOTE_LOG_LEVEL";

const DEFAULT_MANUAL_DURATION: &str = "0 min";
const DEFAULT_LOG_DIR_NAME: &str = "meetnote-logs";

/// Startup configuration for `NoteStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Start with the two example meetings.
    pub seed_examples: bool,
    /// Reject notes whose title is blank after trimming.
    ///
    /// Off by default: empty-field notes are valid.
    pub require_title: bool,
    /// Duration label stamped on manually created notes.
    pub manual_duration: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_examples: true,
            require_title: false,
            manual_duration: DEFAULT_MANUAL_DURATION.to_string(),
        }
    }
}

impl StoreConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = parse_bool_var(&lookup, ENV_SEED_EXAMPLES)? {
            config.seed_examples = value;
        }
        if let Some(value) = parse_bool_var(&lookup, ENV_REQUIRE_TITLE)? {
            config.require_title = value;
        }
        Ok(config)
    }
}

/// Logging host settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub log_dir: PathBuf,
}

impl LogSettings {
    /// Reads `MEETNOTE_LOG_LEVEL` / `MEETNOTE_LOG_DIR` from the process env.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`.
    ///
    /// Level defaults to the build-mode level; directory defaults to
    /// `<temp>/meetnote-logs`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let level = non_blank(lookup(ENV_LOG_LEVEL))
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = non_blank(lookup(ENV_LOG_DIR))
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));
        Self { level, log_dir }
    }
}

/// Configuration parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBool { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBool { key, value } => write!(
                f,
                "invalid boolean for `{key}`: `{value}`; expected 1|0|true|false|yes|no|on|off"
            ),
        }
    }
}

impl Error for ConfigError {}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn parse_bool_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = non_blank(lookup(key)) else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidBool { key, value: raw }),
    }
}
