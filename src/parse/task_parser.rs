use chrono::NaiveDate;

use crate::model::task::{MAX_FIELD_LEN, Task, TaskCollection};

/// Why a task line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatIssue {
    #[error("expected 3 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("name is empty")]
    EmptyName,
    #[error("name must be shorter than 50 characters")]
    NameTooLong,
    #[error("description must be shorter than 50 characters")]
    DescriptionTooLong,
    #[error("due date is empty")]
    EmptyDate,
    #[error("due date is not a valid YYYY-MM-DD date")]
    InvalidDate,
}

/// Error type for decoding a task file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("empty file")]
    EmptyInput,
    #[error("invalid file format on line {line}: {reason} ({text:?})")]
    Format {
        /// 1-based line number
        line: usize,
        reason: FormatIssue,
        /// The offending line as read
        text: String,
    },
}

/// Parse a task file from its source text.
///
/// Format: one task per line, `name,description,YYYY-MM-DD`. The whole parse
/// fails on the first bad line; no partial collection is ever returned.
/// Ids are assigned 1..N in file order and every task starts incomplete.
///
/// Fields are split exactly, so a trailing comma (`a,b,2026-01-01,`) is a
/// fourth, empty field and the line is rejected. Readers that drop trailing
/// empty fields would accept that line; this one does not.
pub fn parse_tasks(source: &str) -> Result<TaskCollection, DecodeError> {
    if source.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let mut tasks = TaskCollection::new();
    for (idx, line) in source.lines().enumerate() {
        let task = parse_task_line(line).map_err(|reason| DecodeError::Format {
            line: idx + 1,
            reason,
            text: line.to_string(),
        })?;
        tasks.add(task);
    }
    Ok(tasks)
}

/// Parse a single `name,description,date` line
fn parse_task_line(line: &str) -> Result<Task, FormatIssue> {
    let fields: Vec<&str> = line.split(',').collect();
    let &[name, description, date] = fields.as_slice() else {
        return Err(FormatIssue::FieldCount(fields.len()));
    };

    if name.is_empty() {
        return Err(FormatIssue::EmptyName);
    }
    if name.chars().count() >= MAX_FIELD_LEN {
        return Err(FormatIssue::NameTooLong);
    }
    if description.chars().count() >= MAX_FIELD_LEN {
        return Err(FormatIssue::DescriptionTooLong);
    }
    if date.is_empty() {
        return Err(FormatIssue::EmptyDate);
    }
    let due_date = parse_iso_date(date).ok_or(FormatIssue::InvalidDate)?;

    Ok(Task::new(name, description, due_date))
}

/// Parse a strict ISO calendar date: exactly `YYYY-MM-DD`, zero-padded.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
