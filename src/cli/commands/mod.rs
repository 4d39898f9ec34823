pub mod add;
pub mod add_batch;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod find;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod move_;
pub mod settings;

use crate::config::Config;
use crate::core::session::{LoadReport, Session};
use crate::db::initialize::open_store;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Strict table-number parsing for CLI arguments.
pub(crate) fn parse_table(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidTable(raw.to_string()))
}

/// Open the configured database and load the admin session.
pub(crate) fn open_admin(cfg: &Config) -> AppResult<Session<DbPool>> {
    let pool = open_store(&cfg.database)?;
    let session = Session::load(pool);
    warn_fallbacks(session.report());
    Ok(session)
}

pub(crate) fn warn_fallbacks(report: LoadReport) {
    if report.sample_guests {
        warning("Guest list could not be loaded: showing sample guests.");
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
