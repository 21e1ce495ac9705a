pub mod filter_bar;
pub mod form_popup;
mod helpers;
pub mod status_row;
pub mod task_list;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: filter bar (2 rows) | task list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    filter_bar::render_filter_bar(frame, app, chunks[0]);
    task_list::render_task_list(frame, app, chunks[1]);

    // Add-task form (rendered on top of the list)
    if app.form.is_some() {
        form_popup::render_form_popup(frame, app, chunks[1]);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
