//! Centralized path definitions for bodbot
//!
//! The bot reads a single TOML config file. It is looked up in this order:
//!
//! ```text
//! --config <path>  /  BODBOT_CONFIG     # explicit, handled by the CLI
//! ./bodbot.toml                         # next to where the bot runs
//! ~/.config/bodbot/config.toml          # per-user default
//! ```

use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "BODBOT_CONFIG";

/// Config filename in the working directory
pub const LOCAL_CONFIG: &str = "bodbot.toml";

/// Per-user config directory name
const GLOBAL_DIR: &str = "bodbot";

/// Per-user config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the per-user config directory.
///
/// Returns `~/.config/bodbot/` on Linux, the platform equivalent elsewhere.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(GLOBAL_DIR)
}

/// Get the per-user config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Pick the config file to load.
///
/// An explicit path always wins. Otherwise `./bodbot.toml` is used when it
/// exists, and the per-user file when it does not.
#[must_use]
pub fn resolve_config(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() { local } else { global_config() }
}
