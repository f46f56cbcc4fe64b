//! Chat-facing layer
//!
//! - [`dispatcher`] - Route chat events to lookups and replies
//! - [`render`] - Plain and HTML reply bodies
//! - [`serve`] - Event loop with periodic re-sync

pub mod dispatcher;
pub mod render;
pub mod serve;

pub use dispatcher::{DEFAULT_COMMAND, Dispatcher, login_from_sender};
pub use serve::serve;
