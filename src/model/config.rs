use serde::Deserialize;
use std::collections::HashMap;

/// Configuration from taskman.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub file: FileConfig,
    #[serde(default)]
    pub undo: UndoConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    /// Task file used when `-f` is not given
    #[serde(default = "default_task_file")]
    pub default: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        FileConfig {
            default: default_task_file(),
        }
    }
}

fn default_task_file() -> String {
    "tasks.csv".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UndoConfig {
    /// Maximum number of snapshots the TUI keeps
    #[serde(default = "default_undo_limit")]
    pub limit: usize,
}

impl Default for UndoConfig {
    fn default() -> Self {
        UndoConfig {
            limit: default_undo_limit(),
        }
    }
}

fn default_undo_limit() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// tracing filter directive, used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Ask before clearing the whole list
    #[serde(default = "default_true")]
    pub confirm_clear: bool,
    /// Color overrides by theme slot name (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            confirm_clear: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
