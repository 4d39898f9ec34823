use crate::cli::commands::open_admin;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Command, Session};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::settings::{FieldKind, SettingsField};
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, RESET, paint_hex};
use crate::utils::formatting::percent_label;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

/// View or change presentation settings. Changes are saved once, after all
/// requested edits were applied.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        json,
        set,
        image,
        clear,
        reset,
    } = cmd
    {
        let mut session = open_admin(cfg)?;
        let mut changed = false;

        if *reset {
            session.apply(Command::ResetSettings)?;
            changed = true;
        }

        if let Some([key, value]) = set.as_deref() {
            let field: SettingsField = key.parse()?;
            session.apply(Command::SetSetting {
                field,
                value: value.clone(),
            })?;
            changed = true;
        }

        if let Some([key, file]) = image.as_deref() {
            let field = image_field(key)?;
            let value = image_data_uri(&expand_tilde(file))?;
            session.apply(Command::SetSetting { field, value })?;
            changed = true;
        }

        if let Some(key) = clear {
            let field = image_field(key)?;
            session.apply(Command::SetSetting {
                field,
                value: String::new(),
            })?;
            changed = true;
        }

        if changed {
            session.apply(Command::SaveSettings)?;
            success("Settings saved.");
        }

        if *print || !changed {
            print_settings(&session, *json)?;
        }
    }
    Ok(())
}

fn image_field(key: &str) -> AppResult<SettingsField> {
    let field: SettingsField = key.parse()?;
    if field.kind() != FieldKind::Image {
        return Err(AppError::InvalidSetting {
            key: field.key().to_string(),
            reason: "not an image setting".into(),
        });
    }
    Ok(field)
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Read an image file into a `data:` URI.
pub(crate) fn image_data_uri(path: &Path) -> AppResult<String> {
    let bytes = fs::read(path)?;
    Ok(format!(
        "data:{};base64,{}",
        mime_for(path),
        STANDARD.encode(bytes)
    ))
}

fn print_settings(session: &Session<DbPool>, json: bool) -> AppResult<()> {
    let settings = session.settings();

    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
        return Ok(());
    }

    if session.report().default_settings {
        info("No settings stored yet: showing defaults.");
    }

    let mut table = Table::new(vec![Column::new("Key", 24), Column::new("Value", 20)]);
    for field in SettingsField::ALL {
        let raw = settings.get(field);
        let shown = match field.kind() {
            FieldKind::Color(c) => format!(
                "{} {} {}({}){}",
                paint_hex("■", &raw),
                raw,
                GREY,
                c.label(),
                RESET
            ),
            FieldKind::Fraction => match raw.parse::<f64>() {
                Ok(f) => format!("{} {}({}){}", raw, GREY, percent_label(f), RESET),
                Err(_) => raw,
            },
            FieldKind::Percent => format!("{}%", raw),
            _ => raw,
        };
        table.add_row(vec![field.key().to_string(), shown]);
    }
    table.fit();
    print!("{}", table.render());
    Ok(())
}
