use crate::db::pool::DbPool;
use crate::db::queries::{count_guests, count_tables};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) GUESTS / TABLES
    //
    let guests = count_guests(&pool.conn)?;
    let tables = count_tables(&pool.conn)?;
    println!("{}• Guests:{} {}{}{}", CYAN, RESET, GREEN, guests, RESET);
    println!("{}• Tables:{} {}{}{}", CYAN, RESET, GREEN, tables, RESET);

    //
    // 3) LARGEST TABLE
    //
    let largest: Option<(i64, i64)> = pool
        .conn
        .query_row(
            "SELECT table_number, COUNT(*) AS n FROM guests
             GROUP BY table_number ORDER BY n DESC, table_number ASC LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match largest {
        Some((table, n)) => println!(
            "{}• Largest table:{} #{} ({} guests)",
            CYAN, RESET, table, n
        ),
        None => println!("{}• Largest table:{} {GREY}--{RESET}", CYAN, RESET),
    }

    if tables > 0 {
        println!(
            "{}• Average guests/table:{} {:.2}",
            CYAN,
            RESET,
            guests as f64 / tables as f64
        );
    }

    //
    // 4) SETTINGS ROW
    //
    let settings_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM app_settings", [], |row| row.get(0))?;
    let state = if settings_rows > 0 {
        format!("{GREEN}stored{RESET}")
    } else {
        format!("{GREY}defaults{RESET}")
    };
    println!("{}• Settings:{} {}", CYAN, RESET, state);

    println!();
    Ok(())
}
