use crate::cli::commands::{open_admin, parse_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Command, Outcome};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Add one guest.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, table } = cmd {
        let table_number = table.as_deref().map(parse_table).transpose()?;

        let mut session = open_admin(cfg)?;
        let outcome = session.apply(Command::AddGuest {
            name: name.clone(),
            table_number,
        })?;

        match outcome {
            Outcome::Added(stored) => {
                for g in stored {
                    success(format!(
                        "Added #{} {} at table {}",
                        g.id, g.name, g.table_number
                    ));
                }
            }
            _ => warning("Nothing added: a name and a table number are both required."),
        }
    }
    Ok(())
}
