//! Domain models for bodbot
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Scores`] - Ordered task name to value map
//! - [`Sheet`] - One parsed class sheet (thresholds and students)
//! - [`Snapshot`] - A sheet plus the time it was synced
//! - [`TaskRecord`] - One task of a student, joined with its thresholds
//! - [`ChatEvent`] / [`Action`] - What the bot receives and what it does

mod event;
mod record;
mod scores;
mod sheet;

pub use event::{Action, ChatEvent, Message};
pub use record::{Report, TaskRecord};
pub use scores::Scores;
pub use sheet::{Sheet, Snapshot, student_key};
