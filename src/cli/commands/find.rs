use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::card::{render_card, render_heading};
use crate::ui::messages::{info, warning};

/// Public lookup: table card and tablemates for each matching guest.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Find { term } = cmd {
        let pool = open_store(&cfg.database)?;
        let session = Session::load_public(pool);

        print!("{}", render_heading(session.settings()));

        if term.trim().is_empty() {
            info("Type part of your name to find your table.");
            return Ok(());
        }

        let hits = session.guests().search(term, cfg.search_result_limit);
        if hits.is_empty() {
            warning(format!("No guest found matching '{}'.", term.trim()));
            return Ok(());
        }

        for guest in &hits {
            let mates = session.guests().tablemates(guest);
            print!("{}", render_card(session.settings(), guest, &mates));
        }
    }
    Ok(())
}
