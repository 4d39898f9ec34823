use crate::errors::AppResult;
use crate::models::guest::Guest;
use csv::{QuoteStyle, WriterBuilder};
use std::path::Path;

/// `first,last` fields for a guest, when the import convention can carry
/// the name: both parts non-empty and free of commas.
fn import_fields(g: &Guest) -> Option<(&str, &str)> {
    let (first, last) = g.split_name();
    if first.is_empty() || last.is_empty() || first.contains(',') || last.contains(',') {
        return None;
    }
    Some((first, last))
}

/// Write guests as unquoted `first,last,table` lines, no header.
/// Returns the guests left out because their name has no such form.
pub fn write_csv(path: &Path, guests: &[Guest]) -> AppResult<Vec<Guest>> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_path(path)?;

    let mut skipped = Vec::new();
    for g in guests {
        match import_fields(g) {
            Some((first, last)) => {
                wtr.write_record([first, last, &g.table_number.to_string()])?
            }
            None => skipped.push(g.clone()),
        }
    }

    wtr.flush()?;
    Ok(skipped)
}
