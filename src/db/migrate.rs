use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn create_guests_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS guests (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            table_number INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS app_settings (
            id                                  INTEGER PRIMARY KEY AUTOINCREMENT,
            title                               TEXT,
            subtitle                            TEXT,
            background_image                    TEXT,
            background_size                     TEXT,
            background_position                 TEXT,
            background_opacity                  INTEGER,
            table_card_background_image         TEXT,
            table_card_background_size          TEXT,
            table_card_background_position      TEXT,
            table_card_background_opacity       INTEGER,
            title_font                          TEXT,
            subtitle_font                       TEXT,
            title_background_opacity            INTEGER,
            subtitle_background_opacity         INTEGER,
            table_card_icon_color               TEXT,
            table_card_header_text              TEXT,
            table_card_subtext                  TEXT,
            table_card_table_prefix             TEXT,
            table_card_celebration_message      TEXT,
            table_card_header_color             TEXT,
            table_card_table_number_color       TEXT,
            table_card_subtext_color            TEXT,
            table_card_celebration_text_color   TEXT,
            table_card_celebration_box_opacity  INTEGER,
            table_card_table_number_box_opacity INTEGER
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Schema changes are recorded in `log` only.
fn note_schema(conn: &Connection, table: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'schema', ?1, 'Table created')",
        [table],
    )?;
    Ok(())
}

/// The first settings schema did not persist the body text and accent
/// colors of the table card.
fn migrate_add_card_colors(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_add_table_card_text_and_accent_colors";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    for column in ["table_card_text_color", "table_card_accent_color"] {
        if !table_has_column(conn, "app_settings", column)? {
            conn.execute(
                &format!("ALTER TABLE app_settings ADD COLUMN {} TEXT", column),
                [],
            )?;
        }
    }

    mark_applied(conn, version, "Added text/accent color columns to app_settings")?;
    Ok(())
}

fn migrate_add_table_index(conn: &Connection) -> Result<()> {
    let version = "20250301_0003_index_guests_table_number";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_guests_table_number ON guests(table_number);",
    )?;

    mark_applied(conn, version, "Indexed guests by table_number")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "guests")? {
        create_guests_table(conn)?;
        note_schema(conn, "guests")?;
    }

    if !table_exists(conn, "app_settings")? {
        create_settings_table(conn)?;
        note_schema(conn, "app_settings")?;
    }

    migrate_add_card_colors(conn)?;
    migrate_add_table_index(conn)?;

    Ok(())
}
