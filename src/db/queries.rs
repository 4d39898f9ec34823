use crate::errors::AppResult;
use crate::models::guest::{Guest, NewGuest};
use crate::models::settings::SettingsRecord;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

pub fn map_guest(row: &Row) -> Result<Guest> {
    Ok(Guest {
        id: row.get("id")?,
        name: row.get("name")?,
        table_number: row.get("table_number")?,
    })
}

pub fn load_guests(conn: &Connection) -> AppResult<Vec<Guest>> {
    let mut stmt = conn.prepare("SELECT id, name, table_number FROM guests ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_guest)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_guests_by_name(conn: &Connection) -> AppResult<Vec<Guest>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, table_number FROM guests
         ORDER BY name COLLATE NOCASE ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_guest)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert every row inside one transaction; nothing is kept on failure.
pub fn insert_guests(conn: &Connection, guests: &[NewGuest]) -> AppResult<Vec<Guest>> {
    let tx = conn.unchecked_transaction()?;
    let mut inserted = Vec::with_capacity(guests.len());
    {
        let mut stmt =
            tx.prepare_cached("INSERT INTO guests (name, table_number) VALUES (?1, ?2)")?;
        for g in guests {
            stmt.execute(params![g.name, g.table_number])?;
            inserted.push(Guest::new(tx.last_insert_rowid(), g.name.clone(), g.table_number));
        }
    }
    tx.commit()?;
    Ok(inserted)
}

pub fn update_guest(conn: &Connection, id: i64, name: &str, table_number: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE guests SET name = ?1, table_number = ?2 WHERE id = ?3",
        params![name, table_number, id],
    )?;
    Ok(())
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

pub fn update_table_for_ids(conn: &Connection, ids: &[i64], table_number: i64) -> AppResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let sql = format!(
        "UPDATE guests SET table_number = ? WHERE id IN ({})",
        placeholders(ids.len())
    );
    let values = std::iter::once(table_number).chain(ids.iter().copied());
    conn.execute(&sql, params_from_iter(values))?;
    Ok(())
}

pub fn delete_guest(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM guests WHERE id = ?1", [id])?;
    Ok(())
}

pub fn delete_guests(conn: &Connection, ids: &[i64]) -> AppResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let sql = format!("DELETE FROM guests WHERE id IN ({})", placeholders(ids.len()));
    conn.execute(&sql, params_from_iter(ids.iter()))?;
    Ok(())
}

pub fn map_settings(row: &Row) -> Result<SettingsRecord> {
    Ok(SettingsRecord {
        title: row.get("title")?,
        subtitle: row.get("subtitle")?,
        background_image: row.get("background_image")?,
        background_size: row.get("background_size")?,
        background_position: row.get("background_position")?,
        background_opacity: row.get("background_opacity")?,
        table_card_background_image: row.get("table_card_background_image")?,
        table_card_background_size: row.get("table_card_background_size")?,
        table_card_background_position: row.get("table_card_background_position")?,
        table_card_background_opacity: row.get("table_card_background_opacity")?,
        title_font: row.get("title_font")?,
        subtitle_font: row.get("subtitle_font")?,
        title_background_opacity: row.get("title_background_opacity")?,
        subtitle_background_opacity: row.get("subtitle_background_opacity")?,
        table_card_icon_color: row.get("table_card_icon_color")?,
        table_card_header_text: row.get("table_card_header_text")?,
        table_card_subtext: row.get("table_card_subtext")?,
        table_card_table_prefix: row.get("table_card_table_prefix")?,
        table_card_celebration_message: row.get("table_card_celebration_message")?,
        table_card_text_color: row.get("table_card_text_color")?,
        table_card_accent_color: row.get("table_card_accent_color")?,
        table_card_header_color: row.get("table_card_header_color")?,
        table_card_table_number_color: row.get("table_card_table_number_color")?,
        table_card_subtext_color: row.get("table_card_subtext_color")?,
        table_card_celebration_text_color: row.get("table_card_celebration_text_color")?,
        table_card_celebration_box_opacity: row.get("table_card_celebration_box_opacity")?,
        table_card_table_number_box_opacity: row.get("table_card_table_number_box_opacity")?,
    })
}

/// First settings row, if any.
pub fn load_settings(conn: &Connection) -> AppResult<Option<SettingsRecord>> {
    let rec = conn
        .query_row(
            "SELECT * FROM app_settings ORDER BY id ASC LIMIT 1",
            [],
            map_settings,
        )
        .optional()?;
    Ok(rec)
}

pub fn delete_settings(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM app_settings", [])?;
    Ok(())
}

pub fn insert_settings(conn: &Connection, r: &SettingsRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO app_settings (
            title, subtitle,
            background_image, background_size, background_position, background_opacity,
            table_card_background_image, table_card_background_size,
            table_card_background_position, table_card_background_opacity,
            title_font, subtitle_font, title_background_opacity, subtitle_background_opacity,
            table_card_icon_color, table_card_header_text, table_card_subtext,
            table_card_table_prefix, table_card_celebration_message,
            table_card_text_color, table_card_accent_color, table_card_header_color,
            table_card_table_number_color, table_card_subtext_color,
            table_card_celebration_text_color,
            table_card_celebration_box_opacity, table_card_table_number_box_opacity
         ) VALUES (
            ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
            ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27
         )",
        params![
            r.title,
            r.subtitle,
            r.background_image,
            r.background_size,
            r.background_position,
            r.background_opacity,
            r.table_card_background_image,
            r.table_card_background_size,
            r.table_card_background_position,
            r.table_card_background_opacity,
            r.title_font,
            r.subtitle_font,
            r.title_background_opacity,
            r.subtitle_background_opacity,
            r.table_card_icon_color,
            r.table_card_header_text,
            r.table_card_subtext,
            r.table_card_table_prefix,
            r.table_card_celebration_message,
            r.table_card_text_color,
            r.table_card_accent_color,
            r.table_card_header_color,
            r.table_card_table_number_color,
            r.table_card_subtext_color,
            r.table_card_celebration_text_color,
            r.table_card_celebration_box_opacity,
            r.table_card_table_number_box_opacity,
        ],
    )?;
    Ok(())
}

pub fn count_guests(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM guests", [], |row| row.get(0))
}

pub fn count_tables(conn: &Connection) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(DISTINCT table_number) FROM guests",
        [],
        |row| row.get(0),
    )
}
