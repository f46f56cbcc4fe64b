//! Query dispatcher
//!
//! Turns an inbound chat event into the actions the bot should take. The
//! dispatcher never touches the network itself, which keeps the routing
//! rules testable without a transport.

use log::{info, warn};

use super::render;
use crate::core::models::{Action, ChatEvent, Message};
use crate::core::services::Registry;

/// Default command that requests a points report
pub const DEFAULT_COMMAND: &str = "apps";

/// Login part of a chat user id
///
/// `@xnovak00:example.org` becomes `xnovak00`. Ids without a sigil or
/// server part are returned as far as they go.
#[must_use]
pub fn login_from_sender(sender: &str) -> &str {
    let local = sender.split_once(':').map_or(sender, |(local, _)| local);
    local.strip_prefix('@').unwrap_or(local)
}

/// Routes chat events to registry lookups and replies
#[derive(Debug, Clone)]
pub struct Dispatcher {
    command: String,
    own_user: Option<String>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl Dispatcher {
    /// Dispatcher answering `command` with a points report
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            own_user: None,
        }
    }

    /// Ignore messages sent by this user id (the bot itself)
    #[must_use]
    pub fn with_own_user(mut self, user: impl Into<String>) -> Self {
        self.own_user = Some(user.into());
        self
    }

    /// The command token
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Actions to take for an event
    #[must_use]
    pub fn handle(&self, registry: &Registry, event: &ChatEvent) -> Vec<Action> {
        match event {
            ChatEvent::Message {
                room_id,
                sender,
                body,
                member_count,
            } => self.on_message(registry, room_id, sender, body, *member_count),
            ChatEvent::Invite { room_id, sender } => {
                info!("invited to {room_id} by {sender}");
                vec![
                    Action::Join {
                        room_id: room_id.clone(),
                    },
                    send(room_id, render::help(login_from_sender(sender), &self.command)),
                ]
            },
        }
    }

    fn on_message(
        &self,
        registry: &Registry,
        room_id: &str,
        sender: &str,
        body: &str,
        member_count: usize,
    ) -> Vec<Action> {
        if self.own_user.as_deref() == Some(sender) {
            return Vec::new();
        }

        if member_count != 2 {
            warn!("refusing to answer in {room_id}: {member_count} members");
            return vec![send(room_id, render::crowded_room())];
        }

        let login = login_from_sender(sender);
        if body != self.command {
            return vec![send(room_id, render::help(login, &self.command))];
        }

        let reply = registry.lookup(login).map_or_else(
            || {
                warn!("unknown user: {login}");
                render::unknown_user()
            },
            |report| {
                info!("sending points from class {} to {login}", report.class);
                render::report(&report)
            },
        );
        vec![send(room_id, reply)]
    }
}

fn send(room_id: &str, message: Message) -> Action {
    Action::Send {
        room_id: room_id.to_string(),
        message,
    }
}
