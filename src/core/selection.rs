use crate::core::guests::GuestList;
use std::collections::BTreeSet;

/// Set of selected guest ids, independent of the guest list itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<i64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one id in or out. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Union every guest id at `table_number` into the selection.
    /// Never removes anything.
    pub fn select_all_in_table(&mut self, guests: &GuestList, table_number: i64) -> usize {
        let before = self.ids.len();
        self.ids.extend(guests.ids_at_table(table_number));
        self.ids.len() - before
    }

    pub fn is_table_fully_selected(&self, guests: &GuestList, table_number: i64) -> bool {
        let at_table = guests.ids_at_table(table_number);
        !at_table.is_empty() && at_table.iter().all(|id| self.ids.contains(id))
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
