//! Bot event loop
//!
//! Feeds transport events through the dispatcher and keeps the registry
//! fresh on a fixed interval. Everything runs on one task: a refresh holds
//! up event handling until it finishes, and vice versa.

use std::future;
use std::time::Duration;

use log::{error, info, warn};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use super::Dispatcher;
use crate::core::models::Action;
use crate::core::ports::{ChatTransport, Fetcher};
use crate::core::services::Registry;

/// Run the bot until the transport closes its event stream
///
/// The caller is expected to have synced the registry once already; the
/// first refresh happens one `refresh` period after the loop starts.
/// Failed sends and joins are logged and skipped. A failure to receive
/// events ends the loop with that error.
pub async fn serve<T, F>(
    transport: &mut T,
    fetcher: &F,
    registry: &Registry,
    dispatcher: &Dispatcher,
    refresh: Option<Duration>,
) -> anyhow::Result<()>
where
    T: ChatTransport + Send,
    F: Fetcher + Sync,
{
    let mut ticker = refresh.and_then(refresh_ticker);

    loop {
        tokio::select! {
            event = transport.next_event() => {
                let Some(event) = event? else {
                    info!("event stream closed, stopping");
                    return Ok(());
                };
                for action in dispatcher.handle(registry, &event) {
                    apply(transport, action).await;
                }
            }
            () = next_tick(ticker.as_mut()) => {
                registry.sync_all(fetcher).await;
            }
        }
    }
}

/// `None` when the first deadline cannot be represented
fn refresh_ticker(period: Duration) -> Option<Interval> {
    let Some(start) = Instant::now().checked_add(period) else {
        warn!("refresh period {period:?} is too long, refreshing is disabled");
        return None;
    };
    let mut ticker = interval_at(start, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    Some(ticker)
}

async fn next_tick(ticker: Option<&mut Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        },
        None => future::pending().await,
    }
}

async fn apply<T: ChatTransport>(transport: &mut T, action: Action) {
    let result = match &action {
        Action::Join { room_id } => transport.join_room(room_id).await,
        Action::Send { room_id, message } => transport.send_message(room_id, message).await,
    };
    if let Err(err) = result {
        error!("transport failed to carry out {action:?}: {err:#}");
    }
}
