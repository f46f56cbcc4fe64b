//! Chat events and bot actions
//!
//! These are transport-neutral: adapters translate their network's events
//! into [`ChatEvent`] and carry out the [`Action`]s the dispatcher returns.

/// An inbound event from the chat network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A text message posted in a room
    Message {
        /// Room the message was posted in
        room_id: String,
        /// Full user id of the author (e.g. `@xlogin00:example.org`)
        sender: String,
        /// Message text
        body: String,
        /// Number of joined members in the room, the bot included
        member_count: usize,
    },

    /// The bot was invited to a room
    Invite {
        /// Room the bot was invited to
        room_id: String,
        /// Full user id of the inviter
        sender: String,
    },
}

/// An outgoing message with a plain body and an optional markup body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Plain-text body, always present
    pub plain: String,
    /// HTML body for clients that render it
    pub markup: Option<String>,
}

impl Message {
    /// Plain-text only message
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain: text.into(),
            markup: None,
        }
    }

    /// Message with both a plain and an HTML body
    pub fn with_markup(plain: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            markup: Some(markup.into()),
        }
    }
}

/// Something the bot wants the transport to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Join a room
    Join {
        /// Room to join
        room_id: String,
    },

    /// Send a message to a room
    Send {
        /// Target room
        room_id: String,
        /// Message to send
        message: Message,
    },
}
