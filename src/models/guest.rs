use serde::{Deserialize, Serialize};

/// A guest row as held by the store: the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub table_number: i64,
}

impl Guest {
    pub fn new(id: i64, name: impl Into<String>, table_number: i64) -> Self {
        Self {
            id,
            name: name.into(),
            table_number,
        }
    }

    /// Split the display name into (first, last) at the first space.
    /// Used by the CSV export, which writes the import convention.
    pub fn split_name(&self) -> (&str, &str) {
        match self.name.trim().split_once(' ') {
            Some((first, last)) => (first, last.trim()),
            None => (self.name.trim(), ""),
        }
    }
}

/// Insert shape for the store (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGuest {
    pub name: String,
    pub table_number: i64,
}

impl NewGuest {
    pub fn new(name: impl Into<String>, table_number: i64) -> Self {
        Self {
            name: name.into(),
            table_number,
        }
    }
}

impl From<&Guest> for NewGuest {
    fn from(g: &Guest) -> Self {
        Self::new(g.name.clone(), g.table_number)
    }
}

/// A raw form entry before validation: the table may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestEntry {
    pub name: String,
    pub table_number: Option<i64>,
}

impl GuestEntry {
    pub fn new(name: impl Into<String>, table_number: Option<i64>) -> Self {
        Self {
            name: name.into(),
            table_number,
        }
    }

    /// Returns the insert shape when the entry is complete
    /// (non-empty trimmed name and a table value).
    pub fn validated(&self) -> Option<NewGuest> {
        let name = self.name.trim();
        match self.table_number {
            Some(t) if !name.is_empty() => Some(NewGuest::new(name, t)),
            _ => None,
        }
    }
}
