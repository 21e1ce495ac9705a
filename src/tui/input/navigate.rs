use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::task_ops::SortKey;
use crate::tui::app::{App, PromptPurpose};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Any keypress dismisses the previous message
    app.status = None;

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.request_quit(),
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.request_quit(),

        // Movement
        (_, KeyCode::Down | KeyCode::Char('j')) => app.move_cursor(1),
        (_, KeyCode::Up | KeyCode::Char('k')) => app.move_cursor(-1),
        (_, KeyCode::Home | KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::End | KeyCode::Char('G')) => {
            app.cursor = app.visible().len().saturating_sub(1);
        }

        // Editing
        (_, KeyCode::Char('a')) => app.open_form(),
        (_, KeyCode::Char('d') | KeyCode::Delete) => app.remove_selected(),
        (_, KeyCode::Char('x') | KeyCode::Char(' ')) => app.complete_selected(),
        (_, KeyCode::Char('C')) => app.request_clear(),
        (_, KeyCode::Char('s')) => app.sort(SortKey::DueDate),
        (_, KeyCode::Char('n')) => app.sort(SortKey::Name),
        (m, KeyCode::Char('z')) if m.contains(KeyModifiers::CONTROL) => app.undo(),
        (_, KeyCode::Char('u')) => app.undo(),

        // Views
        (_, KeyCode::Char('f') | KeyCode::Tab) => app.cycle_filter(),

        // Files
        (_, KeyCode::Char('w')) => app.save(),
        (_, KeyCode::Char('W')) => app.open_prompt(PromptPurpose::SaveAs),
        (_, KeyCode::Char('o')) => app.open_prompt(PromptPurpose::Open),

        _ => {}
    }
}
