//! Ordered task map
//!
//! Column order in a sheet is the order tasks are shown to a student,
//! so values keep insertion order instead of living in a hash map.

/// Mapping from task name to an integer value, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scores {
    entries: Vec<(String, i64)>,
}

impl Scores {
    /// Create an empty map
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value, returning the previous one
    ///
    /// A task that is already present keeps its position and takes the new value.
    pub fn insert(&mut self, task: impl Into<String>, value: i64) -> Option<i64> {
        let task = task.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == task) {
            return Some(std::mem::replace(&mut entry.1, value));
        }
        self.entries.push((task, value));
        None
    }

    /// Value stored for a task
    #[must_use]
    pub fn get(&self, task: &str) -> Option<i64> {
        self.entries.iter().find(|(name, _)| name == task).map(|(_, value)| *value)
    }

    /// Number of tasks
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no task is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(task, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Iterate task names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Scores {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (task, value) in iter {
            scores.insert(task, value);
        }
        scores
    }
}
