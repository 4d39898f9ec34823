//! CSV guest import.
//!
//! One guest per line: `first, last, table`. No header row and no quoting;
//! surrounding whitespace is ignored. Lines missing a field or whose table
//! is not a whole number ("3.5", "12a") are skipped without notice.

use crate::models::guest::Guest;
use csv::{ReaderBuilder, Trim};

pub struct CsvImport;

impl CsvImport {
    /// Parse `text` into guests with provisional ids `next_after + 1, + 2, ...`.
    ///
    /// The ids only keep rows distinct inside the batch; the store assigns
    /// the real ones on insert.
    pub fn parse(text: &str, next_after: i64) -> Vec<Guest> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(text.trim().as_bytes());

        let mut max_id = next_after.max(0);
        let mut out = Vec::new();

        for record in rdr.records().filter_map(Result::ok) {
            let field = |i: usize| record.get(i).unwrap_or("");
            let (first, last, table) = (field(0), field(1), field(2));

            if first.is_empty() || last.is_empty() || table.is_empty() {
                continue;
            }
            let Ok(table_number) = table.parse::<i64>() else {
                continue;
            };

            max_id += 1;
            out.push(Guest::new(max_id, format!("{} {}", first, last), table_number));
        }

        out
    }
}
