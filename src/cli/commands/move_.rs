use crate::cli::commands::{open_admin, parse_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Command, Outcome};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::plural;

/// Reassign the selection (ids plus whole tables) to another table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move { to, ids, tables } = cmd {
        let destination = parse_table(to)?;

        let mut session = open_admin(cfg)?;
        for id in ids {
            if !session.selection().contains(*id) {
                session.apply(Command::ToggleSelection(*id))?;
            }
        }
        for t in tables {
            session.apply(Command::SelectTable(*t))?;
        }

        match session.apply(Command::MoveSelected(Some(destination)))? {
            Outcome::Moved {
                count,
                table_number,
            } => success(format!(
                "Moved {} to table {}",
                plural(count, "guest"),
                table_number
            )),
            _ => warning("Nothing selected: pass guest ids and/or --table."),
        }
    }
    Ok(())
}
