use std::path::{Path, PathBuf};

use clap::Parser;
use taskman::cli::commands::Cli;
use taskman::cli::handlers;
use taskman::io::config_io::{self, CONFIG_FILE};
use taskman::model::config::Config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = match config_io::read_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        None => {
            // No subcommand → launch TUI; the terminal belongs to ratatui,
            // so logs go to a file.
            let _guard = init_file_logging(&config, &std::env::temp_dir().join("taskman.log"));
            let path = handlers::resolve_path(cli.file.as_deref(), &config);
            if let Err(e) = taskman::tui::run(path, &config) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(command) => {
            init_stderr_logging(&config);
            let path = handlers::resolve_path(cli.file.as_deref(), &config);
            if let Err(e) = handlers::dispatch(command, &path, cli.json) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// `RUST_LOG` if set, else `[log] level` from the config
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level))
}

fn init_stderr_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(config))
        .with_target(false)
        .init();
}

fn init_file_logging(config: &Config, log_path: &Path) -> Option<WorkerGuard> {
    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter(config))
        .with_ansi(false)
        .init();

    Some(guard)
}
