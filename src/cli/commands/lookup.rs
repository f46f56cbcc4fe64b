//! Look up one student from the command line

use std::path::Path;

use bodbot::adapters::HttpFetcher;
use bodbot::bot::login_from_sender;
use bodbot::output::{LookupResult, OutputMode};

use super::load_config;

/// Sync all classes and print a student's points
///
/// Classes that fail to sync are logged and skipped; the student is looked
/// up in whatever did sync. An unknown student is an error.
pub async fn lookup(config: Option<&Path>, login: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let fetcher = HttpFetcher::new(config.fetch_timeout())?;
    let registry = config.registry();
    registry.sync_all(&fetcher).await;

    let login = login_from_sender(login);
    let result = LookupResult::new(login, registry.lookup(login));
    result.render(mode);

    if !result.found {
        anyhow::bail!("unknown user {login}");
    }
    Ok(())
}
