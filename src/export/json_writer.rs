use crate::errors::AppResult;
use crate::export::export_error;
use crate::models::guest::Guest;
use std::path::Path;

/// Write guests as a pretty-printed JSON array.
pub fn write_json(path: &Path, guests: &[Guest]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(guests)?;
    std::fs::write(path, json)
        .map_err(|e| export_error(format!("cannot write {}: {}", path.display(), e)))
}
