use crate::cli::commands::open_admin;
use crate::cli::parser::Commands;
use crate::config::{Config, ListView};
use crate::core::guests::{EmptyTermPolicy, sorted_by_table};
use crate::errors::AppResult;
use crate::models::guest::Guest;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::plural;
use crate::utils::table::{Column, Table};

/// Admin listing: every guest, optionally filtered by name.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, view } = cmd {
        let session = open_admin(cfg)?;
        let term = filter.as_deref().unwrap_or("");
        let guests = session
            .guests()
            .filter_by_name(term, EmptyTermPolicy::MatchAll);

        if guests.is_empty() {
            if term.is_empty() {
                info("No guests yet. Add some with `seatfinder add` or `seatfinder import`.");
            } else {
                info(format!("No guests match '{}'.", term));
            }
            return Ok(());
        }

        match view.unwrap_or(cfg.default_view) {
            ListView::Table => print_by_table(&guests),
            ListView::List => print_flat(&guests),
        }

        println!(
            "{}{} of {}{}",
            GREY,
            plural(guests.len(), "guest"),
            session.guests().len(),
            RESET
        );
    }
    Ok(())
}

fn print_by_table(guests: &[Guest]) {
    for group in sorted_by_table(guests) {
        header(format!(
            "Table {} ({})",
            group.table_number,
            plural(group.guests.len(), "guest")
        ));
        for g in &group.guests {
            println!("  {}#{:<4}{} {}", CYAN, g.id, RESET, g.name);
        }
        println!();
    }
}

fn print_flat(guests: &[Guest]) {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("Name", 20),
        Column::new("Table", 5),
    ]);
    for g in guests {
        table.add_row(vec![
            g.id.to_string(),
            g.name.clone(),
            g.table_number.to_string(),
        ]);
    }
    table.fit();
    print!("{}", table.render());
}
