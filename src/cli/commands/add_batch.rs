use crate::cli::commands::{open_admin, parse_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Command, Outcome};
use crate::errors::{AppError, AppResult};
use crate::models::guest::GuestEntry;
use crate::ui::messages::{hint, success, warning};
use crate::utils::plural;

/// Parse one `NAME=TABLE` argument. An empty table part is kept as a
/// missing table so the row is filtered like a half-filled form row.
pub(crate) fn parse_entry(raw: &str) -> AppResult<GuestEntry> {
    let (name, table) = raw
        .rsplit_once('=')
        .ok_or_else(|| AppError::InvalidEntry(raw.to_string()))?;

    let table_number = if table.trim().is_empty() {
        None
    } else {
        Some(parse_table(table)?)
    };
    Ok(GuestEntry::new(name, table_number))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::AddBatch { entries } = cmd {
        let parsed = entries
            .iter()
            .map(|e| parse_entry(e))
            .collect::<AppResult<Vec<_>>>()?;

        let mut session = open_admin(cfg)?;
        match session.apply(Command::AddGuests(parsed))? {
            Outcome::Added(stored) => {
                success(format!("Added {}", plural(stored.len(), "guest")));
                for g in &stored {
                    hint(format!("#{} {} → table {}", g.id, g.name, g.table_number));
                }
            }
            _ => warning("Nothing added: no entry had both a name and a table number."),
        }
    }
    Ok(())
}
