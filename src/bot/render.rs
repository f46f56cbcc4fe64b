//! Chat message rendering
//!
//! Every reply has a plain body; replies with structure also carry an
//! HTML body for clients that render markup.

use std::fmt::Write as _;

use crate::core::models::{Message, Report, TaskRecord};

/// Reply for a found student
#[must_use]
pub fn report(report: &Report) -> Message {
    if report.tasks.is_empty() {
        return Message::plain("No points recorded yet.");
    }
    Message::with_markup(plain_summary(&report.tasks), html_table(&report.tasks))
}

/// One `task: points min: X, max: Y` line per task, in order
#[must_use]
pub fn plain_summary(tasks: &[TaskRecord]) -> String {
    tasks
        .iter()
        .map(|task| {
            format!(
                "{}: {} min: {}, max: {}",
                task.name,
                task.points,
                threshold(task.min),
                threshold(task.max)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn html_table(tasks: &[TaskRecord]) -> String {
    let mut html =
        String::from("<table><tr><th>Task</th><th>Points</th><th>Min</th><th>Max</th></tr>");
    for task in tasks {
        let color = if task.below_minimum() { "red" } else { "green" };
        let _ = write!(
            html,
            "<tr><th>{}</th><td><font color=\"{color}\">{}</font></td><td>{}</td><td>{}</td></tr>",
            escape(&task.name),
            task.points,
            threshold(task.min),
            threshold(task.max)
        );
    }
    html.push_str("</table>");
    html
}

/// Greeting that explains the command
#[must_use]
pub fn help(login: &str, command: &str) -> Message {
    Message::with_markup(
        format!("Hi @{login}!\nI will give you your current points if you send me `{command}`."),
        format!(
            "Hi @{}!<br>I will give you your current points if you send me <code>{}</code>.",
            escape(login),
            escape(command)
        ),
    )
}

/// Reply for a sender no class knows
#[must_use]
pub fn unknown_user() -> Message {
    Message::plain("Unknown user!")
}

/// Reply in rooms with more than the student and the bot
#[must_use]
pub fn crowded_room() -> Message {
    Message::plain("I can't talk about points here, other people could read them (GDPR).")
}

fn threshold(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
