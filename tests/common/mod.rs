//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Sample sheets and config builders
//! - `mocks.rs` - In-memory fetcher and scripted chat transport
//! - `sheet_server.rs` - Local HTTP server serving CSV sheets

pub mod mocks;
