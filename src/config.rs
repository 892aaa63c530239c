//! Launcher configuration
//!
//! Settings come from an optional `unminify.toml` in the install root,
//! overridden by environment variables. Every field has a default, so a
//! package without a config file launches with `nbb` from `PATH`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Overrides `host.command`
pub const HOST_ENV: &str = "UNMINIFY_HOST";

/// Log filter for the launcher itself (`env_logger` syntax)
pub const LOG_ENV: &str = "UNMINIFY_LOG";

/// Default host runtime executable
pub const DEFAULT_HOST_COMMAND: &str = "nbb";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config in {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Launcher configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BootstrapConfig {
    /// Host runtime settings
    #[serde(default)]
    pub host: HostConfig,
}

/// How to start the host runtime
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostConfig {
    /// Executable name or path
    #[serde(default = "default_command")]
    pub command: String,
    /// Extra arguments placed before `--classpath`
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_command() -> String {
    DEFAULT_HOST_COMMAND.to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
        }
    }
}

impl BootstrapConfig {
    /// Load config from `path`, or defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            },
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            },
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides looked up through `lookup`.
    ///
    /// Empty values are ignored.
    #[must_use]
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(command) = lookup(HOST_ENV).filter(|c| !c.is_empty()) {
            log::debug!("{HOST_ENV} overrides host command with {command}");
            self.host.command = command;
        }
        self
    }

    /// Load `path` and apply overrides from the process environment
    pub fn resolve(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load(path)?.with_env(|key| std::env::var(key).ok()))
    }
}
