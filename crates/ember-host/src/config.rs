//! RON configuration for the game host

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file looked up when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "ember.ron";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Root configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HostConfig {
    /// SQLite database holding the catalog and the save record
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    /// Directory searched for Lua modules
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: PathBuf,
    /// Module whose entry point starts the game
    #[serde(default = "default_entry_module")]
    pub entry_module: String,
    /// Function called with no arguments once the runtime is up
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
    /// Base log filter; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("save_data.db")
}

fn default_scripts_dir() -> PathBuf {
    PathBuf::from("scripts")
}

fn default_entry_module() -> String {
    "game_logic".to_string()
}

fn default_entry_point() -> String {
    "start_game".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            scripts_dir: default_scripts_dir(),
            entry_module: default_entry_module(),
            entry_point: default_entry_point(),
            log_level: default_log_level(),
        }
    }
}

impl HostConfig {
    /// Parse a RON document
    pub fn parse(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }

    /// Load from a file.
    ///
    /// A missing file yields the defaults unless `required` is set.
    pub fn load(path: impl AsRef<Path>, required: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
