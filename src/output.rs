//! Output formatting for human and JSON modes
//!
//! This module provides structured CLI results that can be rendered either
//! as human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Report, TaskRecord};
use crate::core::services::{Registry, SyncReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a sync operation
#[derive(Debug, Serialize)]
pub struct SyncSummary {
    /// One entry per class, in lookup order
    pub classes: Vec<ClassStatus>,
}

/// State of one class after a sync
#[derive(Debug, Serialize)]
pub struct ClassStatus {
    /// Class name
    pub name: String,
    /// Sheet URL
    pub url: String,
    /// Whether the last sync succeeded
    pub ok: bool,
    /// Students in the served snapshot
    pub students: usize,
    /// Distinct tasks in the served snapshot
    pub tasks: usize,
    /// When the served snapshot was synced (RFC3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_at: Option<String>,
    /// Why the last sync failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SyncSummary {
    /// Summarize a registry right after `sync_all`
    #[must_use]
    pub fn new(registry: &Registry, report: &SyncReport) -> Self {
        let classes = registry
            .sources()
            .map(|source| {
                let snapshot = source.snapshot();
                let error = report.error_for(source.name()).map(ToString::to_string);
                ClassStatus {
                    name: source.name().to_string(),
                    url: source.url().to_string(),
                    ok: error.is_none(),
                    students: source.student_count(),
                    tasks: snapshot.sheet.task_names().len(),
                    synced_at: snapshot.synced_at.map(|t| t.to_rfc3339()),
                    error,
                }
            })
            .collect();
        Self { classes }
    }

    /// Number of classes whose sync failed
    #[must_use]
    pub fn failures(&self) -> usize {
        self.classes.iter().filter(|c| !c.ok).count()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.classes.is_empty() {
            println!("No classes configured.");
            return;
        }

        for class in &self.classes {
            if class.ok {
                println!(
                    "  {} {}: {} student(s), {} task(s)",
                    "ok".green(),
                    class.name,
                    class.students,
                    class.tasks
                );
            } else {
                println!("  {} {}: {}", "failed".red(), class.name, class.error.as_deref().unwrap_or(""));
            }
        }

        let failures = self.failures();
        if failures > 0 {
            println!("\n{failures} of {} class(es) failed to sync", self.classes.len());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a student lookup
#[derive(Debug, Serialize)]
pub struct LookupResult {
    /// Login that was looked up
    pub login: String,
    /// Whether any class knows the student
    pub found: bool,
    /// Class the tasks come from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Tasks in sheet order
    pub tasks: Vec<TaskRecord>,
}

impl LookupResult {
    /// Wrap a registry lookup
    #[must_use]
    pub fn new(login: &str, report: Option<Report>) -> Self {
        match report {
            Some(report) => Self {
                login: login.to_string(),
                found: true,
                class: Some(report.class),
                tasks: report.tasks,
            },
            None => Self {
                login: login.to_string(),
                found: false,
                class: None,
                tasks: Vec::new(),
            },
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let Some(class) = &self.class else {
            println!("Unknown user: {}", self.login);
            return;
        };

        println!("{} ({class})\n", self.login);
        if self.tasks.is_empty() {
            println!("No points recorded yet.");
            return;
        }

        let width = self.tasks.iter().map(|t| t.name.chars().count()).max().unwrap_or(0).max(4);
        println!("  {:<width$}  {:>6}  {:>6}  {:>6}", "Task", "Points", "Min", "Max");
        for task in &self.tasks {
            let points = format!("{:>6}", task.points);
            let points = if task.below_minimum() { points.red() } else { points.green() };
            println!(
                "  {:<width$}  {points}  {:>6}  {:>6}",
                task.name,
                optional(task.min),
                optional(task.max)
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn optional(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
