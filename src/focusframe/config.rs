//! # Configuration
//!
//! Settings live in `config.json` inside the data directory, next to the default
//! session file. Missing keys fall back to their defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `sessions_file` | `sessions.json` | Session file, relative to the data dir or absolute |
//! | `max_timer_minutes` | `300` | Longest countdown `start` accepts |

use crate::error::{FocusError, Result};
use crate::store::fs::DEFAULT_SESSIONS_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MAX_TIMER_MINUTES: u32 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FocusConfig {
    #[serde(default = "default_sessions_file")]
    pub sessions_file: String,

    #[serde(default = "default_max_timer_minutes")]
    pub max_timer_minutes: u32,
}

fn default_sessions_file() -> String {
    DEFAULT_SESSIONS_FILE.to_string()
}

fn default_max_timer_minutes() -> u32 {
    DEFAULT_MAX_TIMER_MINUTES
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            sessions_file: default_sessions_file(),
            max_timer_minutes: DEFAULT_MAX_TIMER_MINUTES,
        }
    }
}

impl FocusConfig {
    pub const KEYS: [&'static str; 2] = ["sessions-file", "max-timer-minutes"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FocusError::Io)?;
        let config: FocusConfig =
            serde_json::from_str(&content).map_err(FocusError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FocusError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FocusError::Serialization)?;
        fs::write(config_path, content).map_err(FocusError::Io)?;
        Ok(())
    }

    /// Absolute location of the session file for a given data directory.
    pub fn sessions_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.sessions_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "sessions-file" => Ok(self.sessions_file.clone()),
            "max-timer-minutes" => Ok(self.max_timer_minutes.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "sessions-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(FocusError::Config("sessions-file cannot be empty".into()));
                }
                self.sessions_file = value.to_string();
            }
            "max-timer-minutes" => {
                self.max_timer_minutes = match value.trim().parse::<u32>() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        return Err(FocusError::Config(format!(
                            "max-timer-minutes must be a positive integer, got {:?}",
                            value
                        )))
                    }
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> FocusError {
    FocusError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        FocusConfig::KEYS.join(", ")
    ))
}
