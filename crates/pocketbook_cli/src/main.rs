//! Pocketbook command-line entry point.
//!
//! # Responsibility
//! - Resolve data and log locations from flags or environment.
//! - Start logging, open the three collections, and run the menus.

mod console;
mod menu;

use anyhow::Context;
use clap::Parser;
use console::Console;
use log::info;
use pocketbook_core::{default_log_level, init_logging, Pocketbook, StoreConfig};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "pocketbook", version, about = "Personal notes, tasks and contacts")]
struct Cli {
    /// Directory holding notes.json, tasks.json and contacts.json.
    #[arg(long, env = "POCKETBOOK_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// trace|debug|info|warn|error
    #[arg(long, env = "POCKETBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log directory; defaults to `<data-dir>/logs`.
    #[arg(long, env = "POCKETBOOK_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = std::path::absolute(&cli.data_dir)
        .with_context(|| format!("invalid data directory `{}`", cli.data_dir.display()))?;
    let log_dir = match cli.log_dir {
        Some(dir) => std::path::absolute(&dir)
            .with_context(|| format!("invalid log directory `{}`", dir.display()))?,
        None => data_dir.join("logs"),
    };
    let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
    start_logging(level, &log_dir)?;

    let config = StoreConfig::new(data_dir);
    let mut book = Pocketbook::open(&config)
        .with_context(|| format!("failed to open data in `{}`", config.data_dir().display()))?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    menu::run(&mut console, &mut book)?;

    info!("event=app_exit module=cli status=ok");
    Ok(())
}

fn start_logging(level: &str, log_dir: &Path) -> anyhow::Result<()> {
    init_logging(level, log_dir).context("failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::start_logging;
    use pocketbook_core::LoggingError;
    use std::path::Path;

    #[test]
    fn logging_failure_keeps_typed_cause() {
        let err = start_logging("info", Path::new("relative/logs")).unwrap_err();
        assert_eq!(err.to_string(), "failed to initialize logging");
        assert!(matches!(
            err.downcast_ref::<LoggingError>(),
            Some(LoggingError::RelativeLogDir(_))
        ));
        assert_eq!(err.chain().count(), 2);
    }
}
