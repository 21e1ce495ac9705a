use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::task_io::{self, TaskIoError};
use crate::model::{Config, Filter, Task, TaskCollection, TaskKey};
use crate::ops::task_ops::{self, SortKey};

use super::input;
use super::render;
use super::theme::Theme;
use super::undo::{Snapshot, UndoStack};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Filling in the add-task form
    Form,
    /// Typing a file path
    Prompt,
    /// Waiting for y/n
    Confirm,
}

/// Field of the add-task form that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    DueDate,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::DueDate,
            FormField::DueDate => FormField::Name,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::DueDate,
            FormField::Description => FormField::Name,
            FormField::DueDate => FormField::Description,
        }
    }
}

/// Add-task form contents
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub name: String,
    pub description: String,
    pub due: String,
    pub field: FormField,
}

impl TaskForm {
    pub fn buffer_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::DueDate => &mut self.due,
        }
    }
}

/// What a path prompt is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    Open,
    SaveAs,
}

#[derive(Debug, Clone)]
pub struct PathPrompt {
    pub purpose: PromptPurpose,
    pub buffer: String,
}

/// Action waiting for a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    Clear,
    Overwrite(PathBuf),
    Quit,
}

impl ConfirmAction {
    pub fn question(&self) -> String {
        match self {
            ConfirmAction::Clear => "Are you sure you want to clear the list?".to_string(),
            ConfirmAction::Overwrite(path) => format!(
                "{} already exists. Do you want to overwrite it?",
                path.display()
            ),
            ConfirmAction::Quit => "There are unsaved changes. Quit anyway?".to_string(),
        }
    }
}

/// One-line message shown in the status row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub tasks: TaskCollection,
    /// File the list was loaded from and is saved to
    pub path: PathBuf,
    pub filter: Filter,
    pub mode: Mode,
    /// Cursor index into the filtered view
    pub cursor: usize,
    /// First visible entry in the filtered view
    pub scroll: usize,
    pub undo: UndoStack,
    pub form: Option<TaskForm>,
    pub prompt: Option<PathPrompt>,
    pub confirm: Option<ConfirmAction>,
    pub status: Option<StatusMessage>,
    /// Changes since the last load or save
    pub dirty: bool,
    pub confirm_clear: bool,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(tasks: TaskCollection, path: PathBuf, config: &Config) -> Self {
        App {
            tasks,
            path,
            filter: Filter::All,
            mode: Mode::Navigate,
            cursor: 0,
            scroll: 0,
            undo: UndoStack::new(config.undo.limit),
            form: None,
            prompt: None,
            confirm: None,
            status: None,
            dirty: false,
            confirm_clear: config.ui.confirm_clear,
            theme: Theme::from_config(&config.ui),
            should_quit: false,
        }
    }

    /// Open `path` for editing. A missing file starts an empty list; any
    /// other load failure starts empty and reports the error.
    pub fn open(path: PathBuf, config: &Config) -> Self {
        match task_io::load_tasks(&path) {
            Ok(tasks) => App::new(tasks, path, config),
            Err(e) => {
                let mut app = App::new(TaskCollection::new(), path, config);
                if e.is_not_found() {
                    app.info(format!("New file: {}", app.path.display()));
                } else {
                    tracing::warn!(error = %e, "could not load task file");
                    app.error(e.to_string());
                }
                app
            }
        }
    }

    // -- view helpers -------------------------------------------------------

    /// Tasks shown under the current filter
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks.view(self.filter)
    }

    pub fn selected_key(&self) -> Option<TaskKey> {
        self.visible().get(self.cursor).and_then(|t| t.key())
    }

    /// Keep the cursor inside the filtered view
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    /// Snapshot the list before a mutation so it can be undone
    fn save_state(&mut self) {
        self.undo.push(Snapshot::new(self.tasks.copy()));
        self.dirty = true;
    }

    // -- actions ------------------------------------------------------------

    pub fn open_form(&mut self) {
        self.form = Some(TaskForm::default());
        self.mode = Mode::Form;
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.mode = Mode::Navigate;
    }

    /// Validate the form and add the task. On a validation error the form
    /// stays open and nothing changes.
    pub fn submit_form(&mut self) {
        let Some(form) = &self.form else {
            return;
        };
        let task = match task_ops::new_task(&form.name, &form.description, &form.due) {
            Ok(task) => task,
            Err(e) => {
                self.error(e.to_string());
                return;
            }
        };
        self.save_state();
        let key = self.tasks.add(task);
        self.cancel_form();
        if let Some(pos) = self.visible().iter().position(|t| t.key() == Some(key)) {
            self.cursor = pos;
        }
        self.status = None;
        tracing::debug!(count = self.tasks.len(), "task added");
    }

    pub fn remove_selected(&mut self) {
        let Some(key) = self.selected_key() else {
            self.error("Please select a task.");
            return;
        };
        self.save_state();
        self.tasks.remove(key);
        self.clamp_cursor();
    }

    pub fn complete_selected(&mut self) {
        let Some(key) = self.selected_key() else {
            self.error("Please select a task.");
            return;
        };
        self.save_state();
        self.tasks.set_completed(key, true);
        self.clamp_cursor();
    }

    pub fn request_clear(&mut self) {
        if self.confirm_clear {
            self.ask(ConfirmAction::Clear);
        } else {
            self.clear();
        }
    }

    fn clear(&mut self) {
        self.save_state();
        self.tasks.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn sort(&mut self, by: SortKey) {
        self.save_state();
        task_ops::sort(&mut self.tasks, by);
        self.cursor = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn undo(&mut self) {
        match self.undo.pop() {
            Some(snapshot) => {
                self.tasks = snapshot.tasks;
                if let Some(path) = snapshot.path {
                    self.path = path;
                }
                self.dirty = true;
                self.clamp_cursor();
                self.status = None;
            }
            None => self.info("Nothing to undo."),
        }
    }

    /// Save to the current file
    pub fn save(&mut self) {
        let path = self.path.clone();
        self.write_to(&path);
    }

    /// Save to another file, asking first if it would overwrite one
    pub fn save_as(&mut self, path: PathBuf) {
        if path != self.path && path.exists() {
            self.ask(ConfirmAction::Overwrite(path));
        } else {
            self.write_to(&path);
        }
    }

    fn write_to(&mut self, path: &Path) {
        match task_io::save_tasks(path, &self.tasks) {
            Ok(()) => {
                self.path = path.to_path_buf();
                self.dirty = false;
                self.info(format!(
                    "Saved {} task(s) to {}",
                    self.tasks.len(),
                    path.display()
                ));
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                self.error(e.to_string());
            }
        }
    }

    /// Replace the list with the contents of `path`. Undo returns to the
    /// previous list and its file.
    pub fn load(&mut self, path: PathBuf) {
        match task_io::load_tasks(&path) {
            Ok(tasks) => {
                self.undo
                    .push(Snapshot::with_path(self.tasks.copy(), self.path.clone()));
                self.tasks = tasks;
                self.path = path;
                self.dirty = false;
                self.cursor = 0;
                self.scroll = 0;
                self.info(format!(
                    "Loaded {} task(s) from {}",
                    self.tasks.len(),
                    self.path.display()
                ));
            }
            Err(e) => self.report_load_error(&e),
        }
    }

    fn report_load_error(&mut self, e: &TaskIoError) {
        tracing::warn!(error = %e, "load failed");
        self.error(e.to_string());
    }

    pub fn open_prompt(&mut self, purpose: PromptPurpose) {
        let buffer = match purpose {
            PromptPurpose::Open => String::new(),
            PromptPurpose::SaveAs => self.path.display().to_string(),
        };
        self.prompt = Some(PathPrompt { purpose, buffer });
        self.mode = Mode::Prompt;
    }

    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        self.mode = Mode::Navigate;
        let text = prompt.buffer.trim();
        if text.is_empty() {
            return;
        }
        let path = PathBuf::from(text);
        match prompt.purpose {
            PromptPurpose::Open => self.load(path),
            PromptPurpose::SaveAs => self.save_as(path),
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
        self.mode = Mode::Navigate;
    }

    pub fn request_quit(&mut self) {
        if self.dirty {
            self.ask(ConfirmAction::Quit);
        } else {
            self.should_quit = true;
        }
    }

    fn ask(&mut self, action: ConfirmAction) {
        self.confirm = Some(action);
        self.mode = Mode::Confirm;
    }

    /// Resolve the pending confirmation
    pub fn answer(&mut self, yes: bool) {
        let Some(action) = self.confirm.take() else {
            return;
        };
        self.mode = Mode::Navigate;
        if !yes {
            return;
        }
        match action {
            ConfirmAction::Clear => self.clear(),
            ConfirmAction::Overwrite(path) => self.write_to(&path),
            ConfirmAction::Quit => self.should_quit = true,
        }
    }
}

/// Run the TUI application on the given task file
pub fn run(path: PathBuf, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open(path, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
