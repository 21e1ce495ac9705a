use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::ops::task_ops::SortKey;

#[derive(Parser)]
#[command(name = "tm", about = concat!("tm v", env!("CARGO_PKG_VERSION"), " - tasks in a plain text file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Task file (default: [file] default from taskman.toml)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,

    /// Read configuration from this file instead of ./taskman.toml
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    List(ListArgs),
    /// Add a task to the end of the list
    Add(AddArgs),
    /// Remove a task by its number
    Remove(RemoveArgs),
    /// Reorder the file by name or due date
    Sort(SortArgs),
    /// Remove every task
    Clear(ClearArgs),
    /// Validate the task file
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    Due,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> SortKey {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Due => SortKey::DueDate,
        }
    }
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Only completed tasks
    #[arg(long, conflicts_with = "incomplete")]
    pub completed: bool,
    /// Only incomplete tasks
    #[arg(long)]
    pub incomplete: bool,
    /// Print in this order (the file is not changed)
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    pub name: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: String,
    /// Task description
    #[arg(long, default_value = "")]
    pub desc: String,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Task number as shown by `tm list`
    pub id: usize,
}

#[derive(Args)]
pub struct SortArgs {
    /// Sort key
    #[arg(value_enum)]
    pub by: SortArg,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Confirm removing every task
    #[arg(long, short)]
    pub yes: bool,
}
