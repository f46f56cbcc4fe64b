//! CSV sheet parser
//!
//! A class sheet is a CSV export with a header row. The `login` column
//! identifies the row:
//!
//! ```text
//! login,name,hw1,hw2
//! min,,1,2
//! max,,10,10
//! xnovak00,Jan Novak,5,
//! ```
//!
//! - `min` / `max` rows hold per-task thresholds
//! - any other non-empty login is a student row
//! - empty cells mean "no value" and are skipped
//! - every other cell must be an integer
//!
//! # Examples
//!
//! ```
//! use bodbot::core::services::parser;
//!
//! let sheet = parser::parse("login,hw1\nmin,5\nxnovak00,3\n").unwrap();
//! assert_eq!(sheet.minimums.get("hw1"), Some(5));
//! assert_eq!(sheet.students["XNOVAK00"].get("hw1"), Some(3));
//! ```

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::core::models::{Scores, Sheet, student_key};

/// Column holding the row key (student login or threshold marker)
pub const KEY_COLUMN: &str = "login";

/// Columns that never hold task points
pub const RESERVED_COLUMNS: [&str; 2] = [KEY_COLUMN, "name"];

/// Key marking the row of minimum points
pub const MIN_ROW: &str = "min";

/// Key marking the row of maximum points
pub const MAX_ROW: &str = "max";

/// Errors that can occur when parsing a sheet
#[derive(Debug, Error)]
pub enum ParseError {
    /// Header row has no key column
    #[error("header has no `login` column")]
    MissingKeyColumn,

    /// A non-empty task cell is not an integer
    #[error("line {line}: `{value}` in column `{column}` is not an integer")]
    NotAnInteger {
        /// 1-based line in the CSV text
        line: u64,
        /// Column (task) name
        column: String,
        /// Offending cell text
        value: String,
    },

    /// Text is not valid CSV
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One data row, classified by its key cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// The `min` row
    Minimums(Scores),
    /// The `max` row
    Maximums(Scores),
    /// A student row; `key` is already canonical
    Student {
        /// Canonical student key
        key: String,
        /// Task points in column order
        scores: Scores,
    },
}

/// Parse a whole sheet
///
/// Fails on the first malformed row; nothing is returned partially.
pub fn parse(text: &str) -> Result<Sheet, ParseError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    let key_index =
        headers.iter().position(|h| h == KEY_COLUMN).ok_or(ParseError::MissingKeyColumn)?;

    let mut sheet = Sheet::default();
    for record in reader.records() {
        match parse_row(&headers, &record?, key_index)? {
            None => {},
            Some(Row::Minimums(scores)) => sheet.minimums = scores,
            Some(Row::Maximums(scores)) => sheet.maximums = scores,
            Some(Row::Student { key, scores }) => {
                sheet.students.insert(key, scores);
            },
        }
    }

    Ok(sheet)
}

/// Classify and extract one record
///
/// Returns `Ok(None)` for rows with an empty key.
pub fn parse_row(
    headers: &StringRecord,
    record: &StringRecord,
    key_index: usize,
) -> Result<Option<Row>, ParseError> {
    let key = record.get(key_index).unwrap_or_default();
    if key.is_empty() {
        return Ok(None);
    }

    let line = record.position().map_or(0, csv::Position::line);
    let scores = extract_tasks(headers, record, line)?;

    Ok(Some(match key {
        MIN_ROW => Row::Minimums(scores),
        MAX_ROW => Row::Maximums(scores),
        login => Row::Student {
            key: student_key(login),
            scores,
        },
    }))
}

/// Collect the integer task cells of a record
///
/// Reserved columns, unnamed columns and empty cells are skipped. Cells past
/// the end of the header are ignored.
fn extract_tasks(
    headers: &StringRecord,
    record: &StringRecord,
    line: u64,
) -> Result<Scores, ParseError> {
    let mut scores = Scores::new();
    for (column, cell) in headers.iter().zip(record.iter()) {
        if column.is_empty() || cell.is_empty() || RESERVED_COLUMNS.contains(&column) {
            continue;
        }
        let value = cell.trim().parse::<i64>().map_err(|_| ParseError::NotAnInteger {
            line,
            column: column.to_string(),
            value: cell.to_string(),
        })?;
        scores.insert(column, value);
    }
    Ok(scores)
}
