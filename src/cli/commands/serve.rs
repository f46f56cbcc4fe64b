//! Run the bot on the console transport

use std::path::Path;

use log::{info, warn};

use bodbot::adapters::{ConsoleTransport, HttpFetcher};
use bodbot::bot;

use super::load_config;

/// Sync all classes, then answer messages typed on stdin as `sender`
pub async fn serve(config: Option<&Path>, sender: &str) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let fetcher = HttpFetcher::new(config.fetch_timeout())?;
    let registry = config.registry();
    if registry.is_empty() {
        warn!("no classes configured, every student is unknown");
    }
    registry.sync_all(&fetcher).await;

    let dispatcher = config.dispatcher();
    info!("send `{}` to get points for {sender}", dispatcher.command());

    let mut transport = ConsoleTransport::stdio(sender);
    bot::serve(&mut transport, &fetcher, &registry, &dispatcher, config.refresh_interval()).await
}
