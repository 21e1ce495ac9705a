use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, PromptPurpose};

use super::helpers::push_right_hint;

const NAVIGATE_HINT: &str = "a add  d remove  x done  s/n sort  f filter  u undo  w save  q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    match app.mode {
        Mode::Prompt => {
            if let Some(prompt) = &app.prompt {
                let label = match prompt.purpose {
                    PromptPurpose::Open => "Open: ",
                    PromptPurpose::SaveAs => "Save as: ",
                };
                spans.push(Span::styled(label, dim));
                spans.push(Span::styled(
                    prompt.buffer.clone(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ));
                spans.push(Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ));
                push_right_hint(&mut spans, "Enter ok  Esc cancel", width, dim);
            }
        }
        Mode::Confirm => {
            if let Some(action) = &app.confirm {
                spans.push(Span::styled(
                    format!("{} (y/n)", action.question()),
                    Style::default().fg(app.theme.yellow).bg(bg),
                ));
            }
        }
        Mode::Navigate | Mode::Form => match &app.status {
            Some(msg) => {
                let color = if msg.is_error {
                    app.theme.red
                } else {
                    app.theme.text
                };
                spans.push(Span::styled(
                    msg.text.clone(),
                    Style::default().fg(color).bg(bg),
                ));
            }
            None if app.mode == Mode::Navigate => {
                push_right_hint(&mut spans, NAVIGATE_HINT, width, dim);
            }
            None => {}
        },
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
