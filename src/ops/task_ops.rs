use crate::model::task::{MAX_FIELD_LEN, Task, TaskCollection, TaskKey};
use crate::parse::parse_iso_date;

/// Error type for user-entered task fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a task name.")]
    EmptyName,
    #[error("Maximum name length: 49 characters")]
    NameTooLong,
    #[error("Maximum description length: 49 characters")]
    DescriptionTooLong,
    #[error("Invalid date {0:?}. Please enter the date in format YYYY-MM-DD.")]
    InvalidDate(String),
    #[error("The {0} may not contain a comma.")]
    ContainsDelimiter(&'static str),
}

/// Error type for operations that address a task by its display id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(usize),
}

/// Build a task from raw user input.
///
/// Rejects what the file format cannot store: empty names, fields of 50 or
/// more characters, and commas (which would split the line on reload).
pub fn new_task(name: &str, description: &str, due_text: &str) -> Result<Task, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() >= MAX_FIELD_LEN {
        return Err(ValidationError::NameTooLong);
    }
    if description.chars().count() >= MAX_FIELD_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }
    if name.contains(',') {
        return Err(ValidationError::ContainsDelimiter("name"));
    }
    if description.contains(',') {
        return Err(ValidationError::ContainsDelimiter("description"));
    }
    let due_date = parse_iso_date(due_text.trim())
        .ok_or_else(|| ValidationError::InvalidDate(due_text.to_string()))?;

    Ok(Task::new(name, description, due_date))
}

/// Resolve a display id to the task's stable key
pub fn key_for_id(tasks: &TaskCollection, id: usize) -> Result<TaskKey, TaskError> {
    tasks
        .get_by_id(id)
        .and_then(|t| t.key())
        .ok_or(TaskError::NotFound(id))
}

/// Remove the task currently numbered `id`. Returns the removed task.
pub fn remove_by_id(tasks: &mut TaskCollection, id: usize) -> Result<Task, TaskError> {
    let key = key_for_id(tasks, id)?;
    tasks.remove(key).ok_or(TaskError::NotFound(id))
}

/// Sort order requested by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    DueDate,
}

pub fn sort(tasks: &mut TaskCollection, by: SortKey) {
    match by {
        SortKey::Name => tasks.sort_by_name(),
        SortKey::DueDate => tasks.sort_by_due_date(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> TaskCollection {
        let mut tasks = TaskCollection::new();
        tasks.add(new_task("Write report", "quarterly", "2026-05-01").unwrap());
        tasks.add(new_task("Buy milk", "", "2026-03-06").unwrap());
        tasks.add(new_task("Call Sam", "", "2026-04-10").unwrap());
        tasks
    }

    #[test]
    fn test_new_task_valid() {
        let task = new_task("task1", "short description", "2026-03-06").unwrap();
        assert_eq!(task.name, "task1");
        assert_eq!(task.description, "short description");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 3, 6).unwrap());
        assert!(!task.completed);
    }

    #[test]
    fn test_new_task_trims_date_only() {
        let task = new_task("n", "d", " 2026-03-06 ").unwrap();
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 3, 6).unwrap());
    }

    #[test]
    fn test_new_task_rejections() {
        assert_eq!(
            new_task("", "d", "2026-03-06"),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            new_task(&"n".repeat(50), "", "2026-03-06"),
            Err(ValidationError::NameTooLong)
        );
        assert_eq!(
            new_task("n", &"d".repeat(50), "2026-03-06"),
            Err(ValidationError::DescriptionTooLong)
        );
        assert_eq!(
            new_task("a,b", "", "2026-03-06"),
            Err(ValidationError::ContainsDelimiter("name"))
        );
        assert_eq!(
            new_task("a", "b,c", "2026-03-06"),
            Err(ValidationError::ContainsDelimiter("description"))
        );
        assert_eq!(
            new_task("a", "", "06/03/2026"),
            Err(ValidationError::InvalidDate("06/03/2026".into()))
        );
    }

    #[test]
    fn test_remove_by_id() {
        let mut tasks = sample();
        let removed = remove_by_id(&mut tasks, 2).unwrap();
        assert_eq!(removed.name, "Buy milk");
        assert_eq!(tasks.get_by_id(2).unwrap().name, "Call Sam");
        assert_eq!(remove_by_id(&mut tasks, 3), Err(TaskError::NotFound(3)));
    }

    #[test]
    fn test_sort() {
        let mut tasks = sample();
        sort(&mut tasks, SortKey::DueDate);
        assert_eq!(tasks.get_by_id(1).unwrap().name, "Buy milk");
        sort(&mut tasks, SortKey::Name);
        assert_eq!(tasks.get_by_id(1).unwrap().name, "Buy milk");
        assert_eq!(tasks.get_by_id(3).unwrap().name, "Write report");
    }
}
