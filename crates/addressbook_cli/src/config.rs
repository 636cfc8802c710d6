//! Command-line configuration.
//!
//! # Invariants
//! - The resolved log directory is absolute, as required by core logging.

use addressbook_core::default_log_level;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "addressbook.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Parser)]
#[command(name = "addressbook", version, about = "Keep track of your contacts")]
pub struct Args {
    /// SQLite database file holding the address book.
    #[arg(long, default_value = DEFAULT_DB_FILE_NAME)]
    pub db: PathBuf,

    /// Directory for rolling log files. Defaults to `logs/` next to the database.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let db_path = std::path::absolute(&args.db)
            .with_context(|| format!("cannot resolve database path `{}`", args.db.display()))?;

        let log_dir = match args.log_dir {
            Some(dir) => std::path::absolute(&dir)
                .with_context(|| format!("cannot resolve log directory `{}`", dir.display()))?,
            None => db_path
                .parent()
                .map(|parent| parent.join(LOG_DIR_NAME))
                .context("database path has no parent directory")?,
        };

        let log_level = args
            .log_level
            .unwrap_or_else(|| default_log_level().to_string());

        Ok(Self {
            db_path,
            log_dir,
            log_level,
        })
    }
}
