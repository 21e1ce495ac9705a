use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FormField};

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 9;

/// Render the add-task form centered over `area`
pub fn render_form_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };

    let width = POPUP_WIDTH.min(area.width);
    let height = POPUP_HEIGHT.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let bg = app.theme.background;
    let field_line = |label: &str, value: &str, field: FormField| -> Line<'static> {
        let focused = form.field == field;
        let label_style = if focused {
            Style::default().fg(app.theme.highlight).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        let mut spans = vec![
            Span::styled(format!(" {:<13}", label), label_style),
            Span::styled(
                value.to_string(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ];
        if focused {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
        Line::from(spans)
    };

    let lines = vec![
        Line::from(""),
        field_line("Name", &form.name, FormField::Name),
        field_line("Description", &form.description, FormField::Description),
        field_line("Due Date", &form.due, FormField::DueDate),
        Line::from(""),
        Line::from(Span::styled(
            " YYYY-MM-DD  Tab next field  Enter add  Esc cancel",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add task ")
        .border_style(Style::default().fg(app.theme.highlight).bg(bg));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(bg)),
        popup,
    );
}
