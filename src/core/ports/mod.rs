//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the sync/lookup logic
//! and the outside world (HTTP, the chat network).
//!
//! Implementations live in the `adapters` module; tests use in-memory mocks.

mod fetcher;
mod transport;

pub use fetcher::{FetchError, Fetcher};
pub use transport::ChatTransport;
