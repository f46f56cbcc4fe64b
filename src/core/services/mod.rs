//! Business logic services
//!
//! - [`parser`] - Parse a CSV class sheet
//! - [`source`] - One class sheet with an atomically replaced snapshot
//! - [`registry`] - Ordered classes with sequential sync and first-match lookup

pub mod parser;
pub mod registry;
pub mod source;

pub use parser::{ParseError, parse};
pub use registry::{Registry, SyncReport};
pub use source::{Source, SyncError};
