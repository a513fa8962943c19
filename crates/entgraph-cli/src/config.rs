//! Session configuration.
//!
//! Loaded from `<config dir>/entgraph/config.ron` when present:
//!
//! ```ron
//! (
//!     user: (name: "amy", role: "editor"),
//!     prompt: "$ ",
//!     banner: false,
//! )
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use std::path::{Path, PathBuf};

use entgraph_types::User;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session user at startup.
    pub user: User,
    /// Written before each line is read.
    pub prompt: String,
    /// Print the welcome line at startup.
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: User::guest(),
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

impl Config {
    /// `<config dir>/entgraph/config.ron`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("entgraph").join("config.ron"))
    }

    /// Parse a config from RON text.
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Load a config file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load `path` if given, else the default location if it exists, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading default config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
