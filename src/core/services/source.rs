//! A single class sheet
//!
//! A [`Source`] owns one URL and the snapshot last parsed from it. Syncing
//! swaps the whole snapshot at once, so a lookup sees either the previous
//! sheet or the new one, never thresholds from one and scores from the other.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use log::{debug, info};
use thiserror::Error;

use super::parser::{self, ParseError};
use crate::core::models::{Snapshot, TaskRecord, student_key};
use crate::core::ports::{FetchError, Fetcher};

/// Errors that can occur while syncing a source
#[derive(Debug, Error)]
pub enum SyncError {
    /// Download failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Downloaded text is not a valid sheet
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// One remote class sheet and its latest snapshot
#[derive(Debug)]
pub struct Source {
    name: String,
    url: String,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl Source {
    /// Create an unsynced source
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    /// Class name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sheet URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The snapshot currently served
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Download and parse the sheet, then replace the snapshot
    ///
    /// On any failure the previous snapshot stays in place and the error is
    /// returned to the caller.
    pub async fn sync<F: Fetcher + Sync>(&self, fetcher: &F) -> Result<(), SyncError> {
        debug!("fetching class {} from {}", self.name, self.url);
        let text = fetcher.fetch(&self.url).await?;
        let sheet = parser::parse(&text)?;

        info!("synced class {}: {} student(s)", self.name, sheet.students.len());
        self.replace(Snapshot::new(sheet));
        Ok(())
    }

    fn replace(&self, snapshot: Snapshot) {
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(snapshot);
    }

    /// Tasks of a student in this class
    ///
    /// The login is matched case-insensitively. Returns `None` when the
    /// student is not in the sheet, and `Some(vec![])` when the student's
    /// row has no filled cells.
    #[must_use]
    pub fn lookup(&self, login: &str) -> Option<Vec<TaskRecord>> {
        self.snapshot().sheet.records_for(&student_key(login))
    }

    /// Number of students in the current snapshot
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.snapshot().sheet.students.len()
    }

    /// When the current snapshot was synced
    #[must_use]
    pub fn synced_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot().synced_at
    }
}
