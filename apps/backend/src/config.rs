//! Runtime configuration from environment variables.

use std::path::PathBuf;

use study_core::{DroppedBlockPolicy, ParseOptions, PlaceholderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid DROPPED_BLOCK_PLACEHOLDER: {0}")]
    InvalidDroppedBlock(#[from] PlaceholderError),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory with `<subject>/<topic>.md` files. Uses the bundled
    /// sample content when unset.
    pub content_dir: Option<PathBuf>,
    pub parse_options: ParseOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            content_dir: None,
            parse_options: ParseOptions::default(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Env vars:
    /// - HOST: bind address (default 0.0.0.0)
    /// - PORT: bind port (default 3000)
    /// - CONTENT_DIR: content directory (optional)
    /// - DROPPED_BLOCK_PLACEHOLDER: `previous` (default) or `unparsed`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => defaults.port,
        };

        let content_dir = lookup("CONTENT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let dropped_block = match lookup("DROPPED_BLOCK_PLACEHOLDER") {
            Some(value) => value.parse::<DroppedBlockPolicy>()?,
            None => DroppedBlockPolicy::default(),
        };

        Ok(Self {
            host,
            port,
            content_dir,
            parse_options: ParseOptions { dropped_block },
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
