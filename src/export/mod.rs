mod csv_writer;
mod fs_utils;
mod json_writer;

use crate::core::guests::sorted_by_table;
use crate::errors::{AppError, AppResult};
use crate::models::guest::Guest;
use crate::ui::messages::{hint, success, warning};
use crate::utils::plural;
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use fs_utils::ensure_writable;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// High-level export of the guest list.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `guests`, ordered by table then insertion order, to `file`.
    ///
    /// CSV follows the import convention (`first,last,table`, no header,
    /// no quoting). Names that convention cannot hold (a single word, or a
    /// comma inside) are left out of the CSV with a warning; JSON keeps
    /// every guest.
    pub fn export(guests: &[Guest], format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();

        if guests.is_empty() {
            warning("No guests to export.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        let ordered: Vec<Guest> = sorted_by_table(guests)
            .into_iter()
            .flat_map(|t| t.guests)
            .collect();

        let skipped = match format {
            ExportFormat::Csv => csv_writer::write_csv(path, &ordered)?,
            ExportFormat::Json => {
                json_writer::write_json(path, &ordered)?;
                Vec::new()
            }
        };

        if !skipped.is_empty() {
            warning(format!(
                "{} not exported: the CSV import format needs a first and last name without commas.",
                plural(skipped.len(), "guest")
            ));
            for g in &skipped {
                hint(format!("#{} {} (table {})", g.id, g.name, g.table_number));
            }
            hint("Use --format json to keep every guest.");
        }

        notify_export_success(format.as_str(), ordered.len() - skipped.len(), path);
        Ok(())
    }
}

fn notify_export_success(label: &str, count: usize, path: &Path) {
    success(format!(
        "{} export completed: {} guests → {}",
        label.to_uppercase(),
        count,
        path.display()
    ));
}

pub(crate) fn export_error(msg: impl Into<String>) -> AppError {
    AppError::Export(msg.into())
}
