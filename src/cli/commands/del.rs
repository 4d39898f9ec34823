use crate::cli::commands::{ask_confirmation, open_admin};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Command, Outcome};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::plural;

/// Delete one guest, or the selection built from ids and whole tables.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ids, tables, force } = cmd {
        if ids.is_empty() && tables.is_empty() {
            info("Nothing to delete: pass guest ids and/or --table.");
            return Ok(());
        }

        let mut session = open_admin(cfg)?;

        let prompt = if tables.is_empty() && ids.len() == 1 {
            format!("Delete guest #{}? This action is irreversible.", ids[0])
        } else {
            let mut n = ids.len();
            for t in tables {
                n += session.guests().ids_at_table(*t).len();
            }
            format!("Delete up to {}? This action is irreversible.", plural(n, "guest"))
        };

        if cfg.confirm_deletes && !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let outcome = if tables.is_empty() && ids.len() == 1 {
            session.apply(Command::DeleteGuest(ids[0]))?
        } else {
            for id in ids {
                if !session.selection().contains(*id) {
                    session.apply(Command::ToggleSelection(*id))?;
                }
            }
            for t in tables {
                session.apply(Command::SelectTable(*t))?;
            }
            session.apply(Command::DeleteSelected)?
        };

        match outcome {
            Outcome::Deleted(0) => warning("No matching guests were in the list."),
            Outcome::Deleted(n) => success(format!("Deleted {}", plural(n, "guest"))),
            _ => warning("Nothing selected."),
        }
    }
    Ok(())
}
