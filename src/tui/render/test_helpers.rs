use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, TaskCollection};
use crate::ops::task_ops::new_task;
use crate::tui::app::{App, FormField, TaskForm};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over `tasks.csv` holding one task per `(name, due)` pair.
pub fn app_with_tasks(tasks: &[(&str, &str)]) -> App {
    let mut collection = TaskCollection::new();
    for (name, due) in tasks {
        collection.add(new_task(name, "", due).unwrap());
    }
    App::new(collection, PathBuf::from("tasks.csv"), &Config::default())
}

/// A filled-in add form with focus on the name field.
pub fn form_with(name: &str, description: &str, due: &str) -> TaskForm {
    TaskForm {
        name: name.to_string(),
        description: description.to_string(),
        due: due.to_string(),
        field: FormField::Name,
    }
}
