use crate::cli::commands::{open_admin, parse_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Command, Outcome};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// Edit a guest's name and/or table. Omitted fields keep their value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, name, table } = cmd {
        if name.is_none() && table.is_none() {
            info("Nothing to change: pass --name and/or --table.");
            return Ok(());
        }
        let new_table = table.as_deref().map(parse_table).transpose()?;

        let mut session = open_admin(cfg)?;
        let current = session
            .guests()
            .get(*id)
            .cloned()
            .ok_or(AppError::GuestNotFound(*id))?;

        let outcome = session.apply(Command::EditGuest {
            id: *id,
            name: name.clone().unwrap_or(current.name),
            table_number: new_table.unwrap_or(current.table_number),
        })?;

        match outcome {
            Outcome::Edited(Some(g)) => success(format!(
                "Guest #{} is now {} at table {}",
                g.id, g.name, g.table_number
            )),
            Outcome::Edited(None) => warning(format!("Guest #{} was not in the list.", id)),
            _ => warning("Nothing changed: the name cannot be empty."),
        }
    }
    Ok(())
}
