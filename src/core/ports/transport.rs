//! Chat transport port
//!
//! Defines the interface between the bot loop and a chat network.

use std::future::Future;

use crate::core::models::{ChatEvent, Message};

/// Event source and sink for a chat network
///
/// Session handling (login, sync tokens, encryption) is the implementation's
/// business; the bot only sees events and sends replies.
pub trait ChatTransport {
    /// Wait for the next inbound event
    ///
    /// Returns `Ok(None)` once the event stream is closed. Must be
    /// cancellation safe: the bot loop drops this future when a refresh
    /// tick wins the race, and no event may be lost when that happens.
    fn next_event(&mut self) -> impl Future<Output = anyhow::Result<Option<ChatEvent>>> + Send;

    /// Send a message to a room
    fn send_message(
        &mut self,
        room_id: &str,
        message: &Message,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Join a room the bot was invited to
    fn join_room(&mut self, room_id: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}
