use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::task_io::{self, TaskIoError};
use crate::model::config::Config;
use crate::model::task::{Filter, Task, TaskCollection};
use crate::ops::task_ops::{self, SortKey};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands, path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(path = %path.display(), "dispatching command");
    match command {
        // Read commands
        Commands::List(args) => cmd_list(path, args, json),
        Commands::Check => cmd_check(path, json),

        // Write commands
        Commands::Add(args) => cmd_add(path, args, json),
        Commands::Remove(args) => cmd_remove(path, args, json),
        Commands::Sort(args) => cmd_sort(path, args, json),
        Commands::Clear(args) => cmd_clear(path, args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The task file: `-f` if given, else the configured default
pub fn resolve_path(file: Option<&str>, config: &Config) -> PathBuf {
    match file {
        Some(f) => PathBuf::from(f),
        None => PathBuf::from(&config.file.default),
    }
}

/// Load for a write command: a missing or empty file starts a new list.
fn load_or_empty(path: &Path) -> Result<TaskCollection, TaskIoError> {
    match task_io::load_tasks(path) {
        Ok(tasks) => Ok(tasks),
        Err(e) if e.is_not_found() => {
            tracing::debug!(path = %path.display(), "no task file yet");
            Ok(TaskCollection::new())
        }
        Err(e) if e.is_empty_input() => {
            tracing::warn!(path = %path.display(), "task file is empty; starting an empty list");
            Ok(TaskCollection::new())
        }
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(path: &Path, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = task_io::load_tasks(path)?;
    let filter = if args.completed {
        Filter::Completed
    } else if args.incomplete {
        Filter::Incomplete
    } else {
        Filter::All
    };

    // Sorting a view of references keeps the file's numbering, so the
    // printed ids still work with `tm remove`.
    let mut view: Vec<&Task> = tasks.view(filter);
    match args.sort.map(SortKey::from) {
        Some(SortKey::Name) => view.sort_by(|a, b| a.name.cmp(&b.name)),
        Some(SortKey::DueDate) => view.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
        None => {}
    }

    if json {
        let results: Vec<TaskJson> = view.iter().map(|t| task_to_json(t)).collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if view.is_empty() {
        println!("no tasks");
    } else {
        for line in format_listing(&view) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_check(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = task_io::load_tasks(path);

    if json {
        let report = match &result {
            Ok(tasks) => CheckJson {
                file: path.display().to_string(),
                valid: true,
                tasks: tasks.len(),
                error: None,
            },
            Err(e) => CheckJson {
                file: path.display().to_string(),
                valid: false,
                tasks: 0,
                error: Some(e.to_string()),
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        if result.is_err() {
            return Err("task file has errors".into());
        }
        return Ok(());
    }

    let tasks = result?;
    println!("✓ {} is valid ({} task(s))", path.display(), tasks.len());
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(path: &Path, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let task = task_ops::new_task(&args.name, &args.desc, &args.due)?;
    let mut tasks = load_or_empty(path)?;
    let key = tasks.add(task);
    let id = tasks
        .get(key)
        .map(|t| t.id)
        .ok_or("added task is missing from the list")?;
    task_io::save_tasks(path, &tasks)?;

    if json {
        println!("{}", serde_json::to_string(&AddedJson { id })?);
    } else {
        println!("{}", id);
    }
    Ok(())
}

fn cmd_remove(path: &Path, args: RemoveArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut tasks = load_or_empty(path)?;
    let removed = task_ops::remove_by_id(&mut tasks, args.id)?;
    task_io::save_tasks(path, &tasks)?;

    if json {
        println!("{}", serde_json::to_string(&task_to_json(&removed))?);
    } else {
        println!("removed {}. {}", removed.id, removed.name);
    }
    Ok(())
}

fn cmd_sort(path: &Path, args: SortArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut tasks = load_or_empty(path)?;
    task_ops::sort(&mut tasks, args.by.into());
    task_io::save_tasks(path, &tasks)?;

    if json {
        let results: Vec<TaskJson> = tasks.iter().map(task_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("sorted {} task(s)", tasks.len());
    }
    Ok(())
}

fn cmd_clear(path: &Path, args: ClearArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes {
        return Err("refusing to clear without --yes".into());
    }
    let mut tasks = load_or_empty(path)?;
    let cleared = tasks.len();
    tasks.clear();
    task_io::save_tasks(path, &tasks)?;

    if json {
        println!("{}", serde_json::to_string(&ClearedJson { cleared })?);
    } else {
        println!("cleared {} task(s)", cleared);
    }
    Ok(())
}
