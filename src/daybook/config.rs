use crate::error::{JournalError, Result};
use crate::cursor::CURSOR_KEY;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_SLOT: &str = "config";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_REVEAL_MS: u64 = 15;
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Keys accepted by `get`/`set`, in display order.
pub const CONFIG_KEYS: &[&str] = &["storage-key", "reveal-ms", "log-level"];

/// Configuration for daybook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalConfig {
    /// Name of the slot that holds the entries
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Per-character delay of the analysis reveal effect; 0 prints at once
    #[serde(default = "default_reveal_ms")]
    pub reveal_ms: u64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_reveal_ms() -> u64 {
    DEFAULT_REVEAL_MS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            reveal_ms: default_reveal_ms(),
            log_level: default_log_level(),
        }
    }
}

impl JournalConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JournalError::Io)?;
        let config: JournalConfig =
            serde_json::from_str(&content).map_err(JournalError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JournalError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JournalError::Serialization)?;
        fs::write(config_path, content).map_err(JournalError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "reveal-ms" => Some(self.reveal_ms.to_string()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    /// Sets `key` from its string form, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let reserved = value == CURSOR_KEY || value == CONFIG_SLOT;
                let valid = !reserved
                    && !value.is_empty()
                    && !value.starts_with('.')
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
                if !valid {
                    return Err(JournalError::Api(format!(
                        "Invalid storage-key {:?}: use letters, digits, '-', '_' or '.'",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            "reveal-ms" => {
                self.reveal_ms = value.parse().map_err(|_| {
                    JournalError::Api(format!("reveal-ms must be a whole number, got {:?}", value))
                })?;
            }
            "log-level" => {
                let level = value.to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(JournalError::Api(format!(
                        "log-level must be one of {}",
                        LOG_LEVELS.join(", ")
                    )));
                }
                self.log_level = level;
            }
            other => {
                return Err(JournalError::Api(format!(
                    "Unknown config key: {} (known: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
