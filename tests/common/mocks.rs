//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real network I/O.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use bodbot::core::models::{ChatEvent, Message};
use bodbot::core::ports::{ChatTransport, FetchError, Fetcher};
use tokio::time::{Instant, sleep_until};

/// Mock implementation of Fetcher
///
/// Each URL has a queue of responses. Responses are served in order and the
/// last one repeats. Unknown URLs answer 404.
pub struct MockFetcher {
    responses: Mutex<HashMap<String, VecDeque<Result<String, FetchError>>>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a sheet body for a URL
    pub fn with_sheet(self, url: &str, body: &str) -> Self {
        self.push(url, Ok(body.to_string()));
        self
    }

    /// Queue an HTTP error for a URL
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.push(
            url,
            Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
        );
        self
    }

    pub fn push(&self, url: &str, response: Result<String, FetchError>) {
        self.responses.lock().unwrap().entry(url.to_string()).or_default().push_back(response);
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        let Some(queue) = responses.get_mut(url) else {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            });
        };
        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap()
        }
    }
}

/// Mock implementation of ChatTransport
///
/// Replays events at fixed offsets from its creation (use with a paused
/// tokio clock), then reports the stream as closed. Records every join
/// and send.
pub struct ScriptedTransport {
    start: Instant,
    events: VecDeque<(Duration, ChatEvent)>,
    pub sent: Vec<(String, Message)>,
    pub joined: Vec<String>,
    pub fail_sends: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            events: VecDeque::new(),
            sent: Vec::new(),
            joined: Vec::new(),
            fail_sends: false,
        }
    }

    /// Deliver `event` right away (after earlier events)
    pub fn event(self, event: ChatEvent) -> Self {
        let at = self.events.back().map_or(Duration::ZERO, |(at, _)| *at);
        self.event_at(at, event)
    }

    /// Deliver `event` at `at` after creation
    pub fn event_at(mut self, at: Duration, event: ChatEvent) -> Self {
        self.events.push_back((at, event));
        self
    }

    /// Plain bodies of every sent message
    pub fn sent_plain(&self) -> Vec<&str> {
        self.sent.iter().map(|(_, m)| m.plain.as_str()).collect()
    }
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTransport for ScriptedTransport {
    async fn next_event(&mut self) -> anyhow::Result<Option<ChatEvent>> {
        let Some((at, _)) = self.events.front() else {
            return Ok(None);
        };
        sleep_until(self.start + *at).await;
        Ok(self.events.pop_front().map(|(_, event)| event))
    }

    async fn send_message(&mut self, room_id: &str, message: &Message) -> anyhow::Result<()> {
        if self.fail_sends {
            anyhow::bail!("send to {room_id} failed");
        }
        self.sent.push((room_id.to_string(), message.clone()));
        Ok(())
    }

    async fn join_room(&mut self, room_id: &str) -> anyhow::Result<()> {
        self.joined.push(room_id.to_string());
        Ok(())
    }
}

/// A message from `sender` in a private room
pub fn dm(sender: &str, body: &str) -> ChatEvent {
    ChatEvent::Message {
        room_id: "!dm:example.org".to_string(),
        sender: sender.to_string(),
        body: body.to_string(),
        member_count: 2,
    }
}
