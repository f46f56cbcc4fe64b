//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http` - Sheet downloads with `reqwest`
//! - `console` - A chat transport over stdin/stdout for local use

pub mod console;
pub mod http;

pub use console::ConsoleTransport;
pub use http::HttpFetcher;
