//! Lookup results

use serde::{Deserialize, Serialize};

/// One task of a student, joined with the thresholds of the same class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task name (the sheet column)
    pub name: String,
    /// Points the student has for this task
    pub points: i64,
    /// Minimum points required, if the class sets one
    pub min: Option<i64>,
    /// Maximum points obtainable, if the class sets one
    pub max: Option<i64>,
}

impl TaskRecord {
    /// Create a task record
    pub fn new(name: impl Into<String>, points: i64, min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            name: name.into(),
            points,
            min,
            max,
        }
    }

    /// Whether a positive minimum exists and the points do not reach it
    #[must_use]
    pub const fn below_minimum(&self) -> bool {
        match self.min {
            Some(min) => min > 0 && self.points < min,
            None => false,
        }
    }
}

/// A student's tasks, as found in the first class that knows the student
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Name of the class the student was found in
    pub class: String,
    /// Tasks in sheet column order
    pub tasks: Vec<TaskRecord>,
}
