use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;

use super::helpers::push_right_hint;

/// Render the header: file name, filter tabs, task counts, and a separator
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bg = app.theme.background;
    let mut spans: Vec<Span> = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "\u{25B6}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(" ", Style::default().bg(bg)),
    ];

    let file_name = app
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| app.path.display().to_string());
    let marker = if app.dirty { "*" } else { "" };
    spans.push(Span::styled(
        format!("{}{} ", file_name, marker),
        Style::default().fg(app.theme.text_bright).bg(bg),
    ));

    for filter in [Filter::All, Filter::Completed, Filter::Incomplete] {
        spans.push(Span::styled(
            "\u{2502}",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        let style = if filter == app.filter {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }

    let done = app.tasks.completed().len();
    let counts = format!("{}/{} done ", done, app.tasks.len());
    push_right_hint(
        &mut spans,
        &counts,
        area.width as usize,
        Style::default().fg(app.theme.dim).bg(bg),
    );

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(app.theme.dim).bg(bg)),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_file_and_counts() {
        let mut app = app_with_tasks(&[("a", "2026-01-01"), ("b", "2026-01-02")]);
        app.cursor = 1;
        app.complete_selected();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_filter_bar(frame, &app, area);
        });
        let first = output.lines().next().unwrap();
        assert!(first.contains("tasks.csv*"));
        assert!(first.contains(" all "));
        assert!(first.contains(" incomplete "));
        assert!(first.ends_with("1/2 done"));
    }
}
