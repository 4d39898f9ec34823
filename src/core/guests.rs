//! In-memory mirror of the guest list.
//!
//! The list only ever reflects confirmed-persisted state: the session calls
//! the mutators below after the store reported success.

use crate::models::guest::Guest;

/// How an empty search term is treated.
///
/// The admin list shows everything for an empty filter; the public lookup
/// shows nothing until the guest starts typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyTermPolicy {
    MatchAll,
    MatchNone,
}

/// Guests sharing one table number, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGroup {
    pub table_number: i64,
    pub guests: Vec<Guest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestList {
    guests: Vec<Guest>,
}

impl GuestList {
    pub fn new(guests: Vec<Guest>) -> Self {
        Self { guests }
    }

    /// Fixed list shown when the store cannot be read.
    pub fn sample() -> Self {
        let rows = [
            (1, "John Smith", 1),
            (2, "Sarah Johnson", 1),
            (3, "Michael Brown", 1),
            (4, "Emily Davis", 2),
            (5, "David Wilson", 2),
            (6, "Lisa Anderson", 2),
            (7, "Robert Taylor", 3),
            (8, "Jennifer Martinez", 3),
            (9, "William Garcia", 3),
            (10, "Amanda Rodriguez", 4),
            (11, "Christopher Lee", 4),
            (12, "Michelle White", 4),
        ];
        Self::new(
            rows.iter()
                .map(|(id, name, table)| Guest::new(*id, *name, *table))
                .collect(),
        )
    }

    pub fn all(&self) -> &[Guest] {
        &self.guests
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    /// Highest id in the list, 0 when empty.
    pub fn max_id(&self) -> i64 {
        self.guests.iter().map(|g| g.id).max().unwrap_or(0).max(0)
    }

    pub fn append(&mut self, added: impl IntoIterator<Item = Guest>) {
        self.guests.extend(added);
    }

    /// Replace name (trimmed) and table of the matching guest.
    /// Returns false when the id is unknown.
    pub fn replace(&mut self, id: i64, name: &str, table_number: i64) -> bool {
        match self.guests.iter_mut().find(|g| g.id == id) {
            Some(g) => {
                g.name = name.trim().to_string();
                g.table_number = table_number;
                true
            }
            None => false,
        }
    }

    /// Move every guest whose id is in `ids` to `table_number`.
    /// Returns the number of guests touched.
    pub fn reassign(&mut self, ids: &[i64], table_number: i64) -> usize {
        let mut touched = 0;
        for g in self.guests.iter_mut().filter(|g| ids.contains(&g.id)) {
            g.table_number = table_number;
            touched += 1;
        }
        touched
    }

    /// Remove every guest whose id is in `ids`. Unknown ids are ignored.
    pub fn remove(&mut self, ids: &[i64]) -> usize {
        let before = self.guests.len();
        self.guests.retain(|g| !ids.contains(&g.id));
        before - self.guests.len()
    }

    pub fn ids_at_table(&self, table_number: i64) -> Vec<i64> {
        self.guests
            .iter()
            .filter(|g| g.table_number == table_number)
            .map(|g| g.id)
            .collect()
    }

    pub fn filter_by_name(&self, term: &str, policy: EmptyTermPolicy) -> Vec<Guest> {
        filter_by_name(&self.guests, term, policy)
    }

    /// Public lookup: empty term finds nothing, results ordered by name
    /// (case-insensitive, then id, as the store orders them) and capped at
    /// `limit`.
    pub fn search(&self, term: &str, limit: usize) -> Vec<Guest> {
        let mut hits = filter_by_name(&self.guests, term, EmptyTermPolicy::MatchNone);
        hits.sort_by_cached_key(|g| (g.name.to_lowercase(), g.id));
        hits.truncate(limit);
        hits
    }

    /// Everyone else seated at the guest's table.
    pub fn tablemates(&self, guest: &Guest) -> Vec<Guest> {
        self.guests
            .iter()
            .filter(|g| g.table_number == guest.table_number && g.id != guest.id)
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring match on the guest name.
///
/// With `MatchNone` a blank (whitespace-only) term yields nothing; with
/// `MatchAll` the term is used as typed, so an empty term keeps everyone.
pub fn filter_by_name(guests: &[Guest], term: &str, policy: EmptyTermPolicy) -> Vec<Guest> {
    if policy == EmptyTermPolicy::MatchNone && term.trim().is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    guests
        .iter()
        .filter(|g| g.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Group guests by table number: tables in first-seen order, guests in
/// insertion order within each table.
pub fn group_by_table(guests: &[Guest]) -> Vec<TableGroup> {
    let mut groups: Vec<TableGroup> = Vec::new();
    for g in guests {
        match groups.iter_mut().find(|t| t.table_number == g.table_number) {
            Some(group) => group.guests.push(g.clone()),
            None => groups.push(TableGroup {
                table_number: g.table_number,
                guests: vec![g.clone()],
            }),
        }
    }
    groups
}

/// `group_by_table` sorted numerically by table, as displayed.
pub fn sorted_by_table(guests: &[Guest]) -> Vec<TableGroup> {
    let mut groups = group_by_table(guests);
    groups.sort_by_key(|t| t.table_number);
    groups
}
