//! Sync every class and report the result

use std::path::Path;

use bodbot::adapters::HttpFetcher;
use bodbot::output::{OutputMode, SyncSummary};

use super::load_config;

/// Sync all classes; fails if any class could not be synced
pub async fn sync(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let fetcher = HttpFetcher::new(config.fetch_timeout())?;
    let registry = config.registry();

    let report = registry.sync_all(&fetcher).await;
    SyncSummary::new(&registry, &report).render(mode);

    if !report.is_success() {
        anyhow::bail!("{} class(es) failed to sync", report.failed.len());
    }
    Ok(())
}
