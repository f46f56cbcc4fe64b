//! Parsed class sheets
//!
//! A [`Sheet`] is everything one CSV export says: the per-task minimums and
//! maximums plus every student's scores. A [`Snapshot`] is the sheet a
//! source currently serves, stamped with the time it was synced.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::{Scores, TaskRecord};

/// Canonical lookup key for a student login
///
/// Logins compare case-insensitively; uppercasing is the only normalization.
#[must_use]
pub fn student_key(login: &str) -> String {
    login.to_uppercase()
}

/// Thresholds and student scores from one sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    /// Minimum points per task
    pub minimums: Scores,
    /// Maximum points per task
    pub maximums: Scores,
    /// Scores per student, keyed by [`student_key`]
    pub students: HashMap<String, Scores>,
}

impl Sheet {
    /// Task records for a student key, or `None` if the student is not in this sheet
    ///
    /// `key` must already be canonical (see [`student_key`]). A student whose
    /// row has no filled cells yields an empty list, not `None`.
    #[must_use]
    pub fn records_for(&self, key: &str) -> Option<Vec<TaskRecord>> {
        let scores = self.students.get(key)?;
        Some(
            scores
                .iter()
                .map(|(task, points)| TaskRecord {
                    name: task.to_string(),
                    points,
                    min: self.minimums.get(task),
                    max: self.maximums.get(task),
                })
                .collect(),
        )
    }

    /// All task names mentioned by thresholds or students, in first-seen order
    ///
    /// Student rows are visited in key order so the result is stable.
    #[must_use]
    pub fn task_names(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.students.keys().collect();
        keys.sort();

        let mut names: Vec<String> = Vec::new();
        let student_tasks = keys.into_iter().flat_map(|key| self.students[key].names());
        for task in self.minimums.names().chain(self.maximums.names()).chain(student_tasks) {
            if !names.iter().any(|n| n == task) {
                names.push(task.to_string());
            }
        }
        names
    }
}

/// The sheet a source currently serves
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Parsed sheet contents
    pub sheet: Sheet,
    /// When the sheet was fetched; `None` until the first successful sync
    pub synced_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Snapshot of a freshly synced sheet
    #[must_use]
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            synced_at: Some(Utc::now()),
        }
    }
}
