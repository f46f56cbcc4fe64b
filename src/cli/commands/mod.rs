//! Command implementations

mod lookup;
mod serve;
mod sync;

use std::path::Path;

use anyhow::Context;
use log::debug;

use bodbot::config::Config;
use bodbot::paths;

pub use lookup::lookup;
pub use serve::serve;
pub use sync::sync;

/// Load the config file the CLI points at
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = paths::resolve_config(explicit);
    debug!("loading config from {}", path.display());
    Config::load(&path).with_context(|| format!("failed to load config {}", path.display()))
}
