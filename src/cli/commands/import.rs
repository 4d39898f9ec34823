use crate::cli::commands::open_admin;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::CsvImport;
use crate::core::session::{Command, Outcome};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{hint, success, warning};
use crate::utils::path::expand_tilde;
use crate::utils::plural;
use std::fs;

/// Import guests from CSV (`first, last, table` per line).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, text } = cmd {
        let blob = match (file, text) {
            (Some(path), _) => fs::read_to_string(expand_tilde(path))?,
            (None, Some(t)) => t.clone(),
            (None, None) => {
                return Err(AppError::Other(
                    "import needs --file PATH or --text CSV".into(),
                ));
            }
        };

        let mut session = open_admin(cfg)?;

        let lines = blob.lines().filter(|l| !l.trim().is_empty()).count();
        let accepted = CsvImport::parse(&blob, session.guests().max_id()).len();

        match session.apply(Command::ImportCsv(blob))? {
            Outcome::Added(stored) => {
                success(format!("Imported {}", plural(stored.len(), "guest")));
                if lines > accepted {
                    hint(format!("Skipped {}", plural(lines - accepted, "malformed line")));
                }
            }
            _ => warning("No valid lines found (expected `first, last, table`)."),
        }
    }
    Ok(())
}
