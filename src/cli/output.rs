use serde::Serialize;

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: usize,
    pub name: String,
    pub description: String,
    pub due_date: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct AddedJson {
    pub id: usize,
}

#[derive(Serialize)]
pub struct ClearedJson {
    pub cleared: usize,
}

#[derive(Serialize)]
pub struct CheckJson {
    pub file: String,
    pub valid: bool,
    pub tasks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        name: task.name.clone(),
        description: task.description.clone(),
        due_date: task.due_date.format("%Y-%m-%d").to_string(),
        completed: task.completed,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Format one task as a block of lines:
/// ```text
/// 1. Buy milk
///    Description: 2%
///    Due Date: 2026-03-06
///    Incomplete.
/// ```
pub fn format_task(task: &Task) -> Vec<String> {
    let indent = " ".repeat(format!("{}. ", task.id).len());
    let status = if task.completed {
        "Completed."
    } else {
        "Incomplete."
    };
    vec![
        format!("{}. {}", task.id, task.name),
        format!("{}Description: {}", indent, task.description),
        format!("{}Due Date: {}", indent, task.due_date.format("%Y-%m-%d")),
        format!("{}{}", indent, status),
    ]
}

/// Format a listing: task blocks separated by blank lines
pub fn format_listing(tasks: &[&Task]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, task) in tasks.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(format_task(task));
    }
    lines
}
