//! Class registry
//!
//! The [`Registry`] holds every configured class in configuration order.
//! Order matters: a student present in several classes is reported from
//! the first one.

use log::{debug, info, warn};

use super::source::{Source, SyncError};
use crate::core::models::Report;
use crate::core::ports::Fetcher;

/// Outcome of syncing every class
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Classes that synced successfully
    pub synced: Vec<String>,
    /// Classes that failed, with the reason
    pub failed: Vec<(String, SyncError)>,
}

impl SyncReport {
    /// Whether every class synced
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Error for a class, if its sync failed
    #[must_use]
    pub fn error_for(&self, class: &str) -> Option<&SyncError> {
        self.failed.iter().find(|(name, _)| name == class).map(|(_, err)| err)
    }
}

/// Ordered collection of classes
#[derive(Debug, Default)]
pub struct Registry {
    sources: Vec<Source>,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append an unsynced class
    pub fn add_source(&mut self, name: impl Into<String>, url: impl Into<String>) {
        let source = Source::new(name, url);
        debug!("adding class {}", source.name());
        self.sources.push(source);
    }

    /// Classes in lookup order
    pub fn sources(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }

    /// Number of classes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no class is registered
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Sync every class, one after another
    ///
    /// A failing class does not stop the others; failures are collected
    /// in the returned report.
    pub async fn sync_all<F: Fetcher + Sync>(&self, fetcher: &F) -> SyncReport {
        let mut report = SyncReport::default();

        for source in &self.sources {
            match source.sync(fetcher).await {
                Ok(()) => report.synced.push(source.name().to_string()),
                Err(err) => {
                    warn!("failed to sync class {}: {err}", source.name());
                    report.failed.push((source.name().to_string(), err));
                },
            }
        }

        if report.is_success() {
            info!("synced {} class(es)", report.synced.len());
        } else {
            warn!("{} of {} class(es) failed to sync", report.failed.len(), self.sources.len());
        }
        report
    }

    /// Tasks of a student, from the first class that has the student
    ///
    /// A class where the student's row is empty still counts as a match.
    /// Returns `None` for an unknown student.
    #[must_use]
    pub fn lookup(&self, login: &str) -> Option<Report> {
        self.sources.iter().find_map(|source| {
            source.lookup(login).map(|tasks| Report {
                class: source.name().to_string(),
                tasks,
            })
        })
    }
}
