//! Core domain logic for bodbot
//!
//! This module contains the score model and the sync/lookup logic.
//! All network access goes through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Scores, Sheet, Snapshot, `TaskRecord`, chat events)
//! - `services/` - Parsing, per-class sources and the class registry
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
