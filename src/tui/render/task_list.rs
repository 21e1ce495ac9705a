use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Filter, Task};
use crate::tui::app::App;

use super::helpers::pad_to_width;

/// Rows per task entry, including the blank separator row
const ENTRY_HEIGHT: usize = 5;

/// Render the (filtered) task list, scrolling to keep the cursor visible
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let count = app.visible().len();

    if count == 0 {
        let text = match app.filter {
            Filter::All => " No tasks. Press a to add one.",
            Filter::Completed => " No completed tasks",
            Filter::Incomplete => " No incomplete tasks",
        };
        let empty = Paragraph::new(text).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let per_page = (area.height as usize / ENTRY_HEIGHT).max(1);
    if app.cursor < app.scroll {
        app.scroll = app.cursor;
    } else if app.cursor >= app.scroll + per_page {
        app.scroll = app.cursor + 1 - per_page;
    }
    if app.scroll >= count {
        app.scroll = count - 1;
    }

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in app.visible().into_iter().enumerate().skip(app.scroll) {
        if lines.len() >= area.height as usize {
            break;
        }
        lines.extend(task_lines(app, task, i == app.cursor, width));
        lines.push(Line::from(""));
    }
    lines.truncate(area.height as usize);

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Lines for one task entry: number and name, description, due date, status
fn task_lines<'a>(app: &App, task: &Task, is_cursor: bool, width: usize) -> Vec<Line<'a>> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let base = Style::default().bg(bg);
    let label = Style::default().fg(app.theme.dim).bg(bg);
    let value = Style::default().fg(app.theme.text).bg(bg);

    let name_style = if is_cursor {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text_bright).bg(bg)
    };
    let marker = if is_cursor { "\u{258E}" } else { " " };

    let status = if task.completed {
        "Completed."
    } else {
        "Incomplete."
    };

    let mut rows = vec![
        vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(format!("{:>2}. ", task.id), label),
            Span::styled(task.name.clone(), name_style),
        ],
        vec![
            Span::styled("     Description: ", label),
            Span::styled(task.description.clone(), value),
        ],
        vec![
            Span::styled("     Due Date: ", label),
            Span::styled(task.due_date.format("%Y-%m-%d").to_string(), value),
        ],
        vec![
            Span::styled("     ", base),
            Span::styled(
                status,
                Style::default()
                    .fg(app.theme.status_color(task.completed))
                    .bg(bg),
            ),
        ],
    ];

    if is_cursor {
        for row in &mut rows {
            pad_to_width(row, width, base);
        }
    }
    rows.into_iter().map(Line::from).collect()
}
