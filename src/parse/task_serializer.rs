use crate::model::task::TaskCollection;

/// Serialize tasks to the line format read by `parse_tasks`.
///
/// Each task becomes `name,description,YYYY-MM-DD\n`. Ids and completion
/// are not written. Commas inside fields are not escaped.
pub fn serialize_tasks(tasks: &TaskCollection) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&format!(
            "{},{},{}\n",
            task.name,
            task.description,
            task.due_date.format("%Y-%m-%d")
        ));
    }
    out
}
