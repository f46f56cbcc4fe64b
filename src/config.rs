//! Bot configuration
//!
//! Loaded from a TOML file (see [`crate::paths`] for where it is looked up):
//!
//! ```toml
//! [bot]
//! command = "apps"
//! user = "@bodbot:example.org"
//! refresh_interval_secs = 900
//! fetch_timeout_secs = 30
//!
//! [[class]]
//! name = "psi"
//! url = "https://example.org/psi.csv"
//! ```
//!
//! Classes are kept in file order, which is the lookup precedence.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bot::{DEFAULT_COMMAND, Dispatcher};
use crate::core::services::Registry;

/// Errors that can occur when loading the config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// File is not valid TOML or has the wrong shape
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two classes share a name
    #[error("class `{0}` is defined more than once")]
    DuplicateClass(String),

    /// A class has an empty name or URL
    #[error("class `{0}` needs a non-empty name and url")]
    IncompleteClass(String),

    /// The command token is empty
    #[error("bot.command must not be empty")]
    EmptyCommand,

    /// Sheet downloads would time out immediately
    #[error("bot.fetch_timeout_secs must be at least 1")]
    ZeroFetchTimeout,

    /// The refresh period is too long to schedule
    #[error("bot.refresh_interval_secs = {0} is too large")]
    RefreshTooLong(u64),
}

/// Top-level config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Bot behaviour
    #[serde(default)]
    pub bot: BotConfig,
    /// Class sheets, in lookup order
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassConfig>,
}

/// Bot behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Message that requests a points report
    #[serde(default = "default_command")]
    pub command: String,
    /// The bot's own user id; its messages are ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Re-sync every class this often (seconds); unset or 0 disables it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval_secs: Option<u64>,
    /// Per-request timeout for sheet downloads (seconds)
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_command() -> String {
    DEFAULT_COMMAND.to_string()
}

const fn default_fetch_timeout() -> u64 {
    30
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            user: None,
            refresh_interval_secs: None,
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

/// One class sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassConfig {
    /// Class name, shown in reports
    pub name: String,
    /// URL of the CSV export
    pub url: String,
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.command.is_empty() {
            return Err(ConfigError::EmptyCommand);
        }
        if self.bot.fetch_timeout_secs == 0 {
            return Err(ConfigError::ZeroFetchTimeout);
        }
        let unschedulable =
            |secs: &u64| Instant::now().checked_add(Duration::from_secs(*secs)).is_none();
        if let Some(secs) = self.bot.refresh_interval_secs.filter(unschedulable) {
            return Err(ConfigError::RefreshTooLong(secs));
        }
        for (i, class) in self.classes.iter().enumerate() {
            if class.name.is_empty() || class.url.is_empty() {
                return Err(ConfigError::IncompleteClass(class.name.clone()));
            }
            if self.classes[..i].iter().any(|c| c.name == class.name) {
                return Err(ConfigError::DuplicateClass(class.name.clone()));
            }
        }
        Ok(())
    }

    /// Registry with every class, unsynced
    #[must_use]
    pub fn registry(&self) -> Registry {
        let mut registry = Registry::new();
        for class in &self.classes {
            registry.add_source(class.name.as_str(), class.url.as_str());
        }
        registry
    }

    /// Dispatcher for the configured command and bot user
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        let dispatcher = Dispatcher::new(self.bot.command.as_str());
        match &self.bot.user {
            Some(user) => dispatcher.with_own_user(user.as_str()),
            None => dispatcher,
        }
    }

    /// Refresh period, if periodic re-sync is enabled
    #[must_use]
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.bot.refresh_interval_secs.filter(|secs| *secs > 0).map(Duration::from_secs)
    }

    /// Per-request fetch timeout
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.bot.fetch_timeout_secs)
    }
}
