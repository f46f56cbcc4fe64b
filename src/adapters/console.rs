//! Console chat transport
//!
//! Treats every non-blank input line as a message from one fixed user in a
//! private two-member room, and writes the plain body of each reply to the
//! output. Handy for trying the bot against real sheets without a chat
//! account.

use anyhow::Context;
use log::info;
use tokio::io::{self, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};

use crate::core::models::{ChatEvent, Message};
use crate::core::ports::ChatTransport;

/// Room id used for every console message
pub const CONSOLE_ROOM: &str = "!console:localhost";

/// Line-based transport over an async reader and writer
#[derive(Debug)]
pub struct ConsoleTransport<R, W> {
    lines: Lines<BufReader<R>>,
    output: W,
    sender: String,
}

impl ConsoleTransport<io::Stdin, io::Stdout> {
    /// Transport over the process stdin/stdout
    pub fn stdio(sender: impl Into<String>) -> Self {
        Self::new(io::stdin(), io::stdout(), sender)
    }
}

impl<R, W> ConsoleTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Transport reading messages from `input` as `sender`
    pub fn new(input: R, output: W, sender: impl Into<String>) -> Self {
        Self {
            lines: BufReader::new(input).lines(),
            output,
            sender: sender.into(),
        }
    }

    /// Consume the transport and return its output
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W> ChatTransport for ConsoleTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn next_event(&mut self) -> anyhow::Result<Option<ChatEvent>> {
        while let Some(line) = self.lines.next_line().await.context("failed to read input")? {
            if line.trim().is_empty() {
                continue;
            }
            return Ok(Some(ChatEvent::Message {
                room_id: CONSOLE_ROOM.to_string(),
                sender: self.sender.clone(),
                body: line,
                member_count: 2,
            }));
        }
        Ok(None)
    }

    async fn send_message(&mut self, _room_id: &str, message: &Message) -> anyhow::Result<()> {
        self.output.write_all(message.plain.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn join_room(&mut self, room_id: &str) -> anyhow::Result<()> {
        info!("joined {room_id}");
        Ok(())
    }
}
