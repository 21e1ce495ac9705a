use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Add-task form: Tab/arrows move between fields, Enter submits
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_form();
            app.status = None;
        }
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = &mut app.form {
                form.field = form.field.next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = &mut app.form {
                form.field = form.field.prev();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = &mut app.form {
                form.buffer_mut().pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = &mut app.form {
                form.buffer_mut().push(c);
            }
        }
        _ => {}
    }
}

/// Single-line file path prompt
pub(super) fn handle_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_prompt(),
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Backspace => {
            if let Some(prompt) = &mut app.prompt {
                prompt.buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(prompt) = &mut app.prompt {
                prompt.buffer.push(c);
            }
        }
        _ => {}
    }
}

/// y/Enter confirms, n/Esc declines, anything else is ignored
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.answer(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer(false),
        _ => {}
    }
}
