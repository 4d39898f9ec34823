//! Application state owned by a single controller.
//!
//! Every user action is a `Command` consumed by `Session::apply`. Mutations
//! that must persist call the store first and touch the in-memory mirror
//! only after the store reported success; a store failure is logged and
//! returned unchanged to the caller.

use crate::core::codec::SettingsCodec;
use crate::core::guests::GuestList;
use crate::core::import::CsvImport;
use crate::core::selection::Selection;
use crate::errors::AppResult;
use crate::models::guest::{Guest, GuestEntry, NewGuest};
use crate::models::settings::{AppSettings, SettingsField};
use crate::store::Store;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddGuest {
        name: String,
        table_number: Option<i64>,
    },
    AddGuests(Vec<GuestEntry>),
    EditGuest {
        id: i64,
        name: String,
        table_number: i64,
    },
    DeleteGuest(i64),
    BulkReassign {
        ids: Vec<i64>,
        table_number: Option<i64>,
    },
    BulkDelete(Vec<i64>),
    ToggleSelection(i64),
    SelectTable(i64),
    ClearSelection,
    MoveSelected(Option<i64>),
    DeleteSelected,
    ImportCsv(String),
    SetSetting {
        field: SettingsField,
        value: String,
    },
    ResetSettings,
    SaveSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Input rejected locally; nothing was sent to the store.
    Ignored,
    Added(Vec<Guest>),
    /// `None` when the id is not in the in-memory list.
    Edited(Option<Guest>),
    /// Number of guests removed from memory.
    Deleted(usize),
    Moved {
        count: usize,
        table_number: i64,
    },
    /// Selection size after the change.
    Selection(usize),
    SettingChanged(SettingsField),
    SettingsReset,
    SettingsSaved,
}

/// Where the in-memory state came from at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub sample_guests: bool,
    pub default_settings: bool,
}

pub struct Session<S: Store> {
    store: S,
    guests: GuestList,
    selection: Selection,
    settings: AppSettings,
    report: LoadReport,
}

impl<S: Store> Session<S> {
    /// Admin load: guests in store order; an unreadable store yields the
    /// sample list, unreadable settings yield defaults.
    pub fn load(store: S) -> Self {
        let (guests, sample_guests) = match store.select_all() {
            Ok(rows) => (GuestList::new(rows), false),
            Err(e) => {
                let _ = store.log_event("error", "load guests", &e.to_string());
                (GuestList::sample(), true)
            }
        };
        Self::finish_load(store, guests, sample_guests)
    }

    /// Public load: guests ordered by name; an unreadable or empty store
    /// yields the sample list.
    pub fn load_public(store: S) -> Self {
        let (guests, sample_guests) = match store.select_ordered_by_name() {
            Ok(rows) if !rows.is_empty() => (GuestList::new(rows), false),
            Ok(_) => (GuestList::sample(), true),
            Err(e) => {
                let _ = store.log_event("error", "load guests", &e.to_string());
                (GuestList::sample(), true)
            }
        };
        Self::finish_load(store, guests, sample_guests)
    }

    fn finish_load(store: S, guests: GuestList, sample_guests: bool) -> Self {
        let (settings, default_settings) = match store.select_one() {
            Ok(Some(rec)) => (SettingsCodec::decode(&rec), false),
            Ok(None) => (AppSettings::default(), true),
            Err(e) => {
                let _ = store.log_event("error", "load settings", &e.to_string());
                (AppSettings::default(), true)
            }
        };

        Self {
            store,
            guests,
            selection: Selection::new(),
            settings,
            report: LoadReport {
                sample_guests,
                default_settings,
            },
        }
    }

    /// Build a session from explicit state, without reading the store.
    pub fn with_state(store: S, guests: GuestList, settings: AppSettings) -> Self {
        Self {
            store,
            guests,
            selection: Selection::new(),
            settings,
            report: LoadReport::default(),
        }
    }

    pub fn guests(&self) -> &GuestList {
        &self.guests
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Single state-update entry point.
    pub fn apply(&mut self, cmd: Command) -> AppResult<Outcome> {
        match cmd {
            Command::AddGuest { name, table_number } => self.add(&name, table_number),
            Command::AddGuests(entries) => self.add_batch(&entries),
            Command::EditGuest {
                id,
                name,
                table_number,
            } => self.edit(id, &name, table_number),
            Command::DeleteGuest(id) => self.delete(id),
            Command::BulkReassign { ids, table_number } => self.bulk_reassign(&ids, table_number),
            Command::BulkDelete(ids) => self.bulk_delete(&ids),
            Command::ToggleSelection(id) => {
                self.selection.toggle(id);
                Ok(Outcome::Selection(self.selection.len()))
            }
            Command::SelectTable(table) => {
                self.selection.select_all_in_table(&self.guests, table);
                Ok(Outcome::Selection(self.selection.len()))
            }
            Command::ClearSelection => {
                self.selection.clear();
                Ok(Outcome::Selection(0))
            }
            Command::MoveSelected(table_number) => self.move_selected(table_number),
            Command::DeleteSelected => self.delete_selected(),
            Command::ImportCsv(text) => self.import_csv(&text),
            Command::SetSetting { field, value } => {
                self.settings.set(field, &value)?;
                Ok(Outcome::SettingChanged(field))
            }
            Command::ResetSettings => {
                self.settings = AppSettings::default();
                Ok(Outcome::SettingsReset)
            }
            Command::SaveSettings => self.save_settings(),
        }
    }

    /// Log a store failure and hand it back untouched.
    fn failed<T>(&self, operation: &str, target: &str, result: AppResult<T>) -> AppResult<T> {
        if let Err(e) = &result {
            let _ = self
                .store
                .log_event("error", operation, &format!("{}: {}", target, e));
        }
        result
    }

    fn note(&self, operation: &str, target: &str, message: &str) {
        let _ = self.store.log_event(operation, target, message);
    }

    pub fn add(&mut self, name: &str, table_number: Option<i64>) -> AppResult<Outcome> {
        let Some(new_guest) = GuestEntry::new(name, table_number).validated() else {
            return Ok(Outcome::Ignored);
        };

        let stored = self.failed(
            "add",
            &new_guest.name,
            self.store.insert_guests(std::slice::from_ref(&new_guest)),
        )?;

        self.note(
            "add",
            &new_guest.name,
            &format!("Added to table {}", new_guest.table_number),
        );
        self.guests.append(stored.iter().cloned());
        Ok(Outcome::Added(stored))
    }

    pub fn add_batch(&mut self, entries: &[GuestEntry]) -> AppResult<Outcome> {
        let valid: Vec<NewGuest> = entries.iter().filter_map(GuestEntry::validated).collect();
        self.insert_batch("add", valid)
    }

    fn insert_batch(&mut self, operation: &str, rows: Vec<NewGuest>) -> AppResult<Outcome> {
        if rows.is_empty() {
            return Ok(Outcome::Ignored);
        }

        let target = format!("{} guests", rows.len());
        let stored = self.failed(operation, &target, self.store.insert_guests(&rows))?;

        self.note(operation, &target, "Batch inserted");
        self.guests.append(stored.iter().cloned());
        Ok(Outcome::Added(stored))
    }

    pub fn edit(&mut self, id: i64, name: &str, table_number: i64) -> AppResult<Outcome> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Outcome::Ignored);
        }

        self.failed(
            "edit",
            &format!("#{}", id),
            self.store.update_by_id(id, name, table_number),
        )?;

        self.note(
            "edit",
            &format!("#{}", id),
            &format!("{} → table {}", name, table_number),
        );
        let found = self.guests.replace(id, name, table_number);
        Ok(Outcome::Edited(if found {
            self.guests.get(id).cloned()
        } else {
            None
        }))
    }

    pub fn delete(&mut self, id: i64) -> AppResult<Outcome> {
        self.failed("del", &format!("#{}", id), self.store.delete_by_id(id))?;

        self.note("del", &format!("#{}", id), "Guest deleted");
        self.selection_forget(&[id]);
        Ok(Outcome::Deleted(self.guests.remove(&[id])))
    }

    pub fn bulk_reassign(&mut self, ids: &[i64], table_number: Option<i64>) -> AppResult<Outcome> {
        let Some(table_number) = table_number else {
            return Ok(Outcome::Ignored);
        };
        if ids.is_empty() {
            return Ok(Outcome::Ignored);
        }

        let target = format!("{} guests", ids.len());
        self.failed(
            "move",
            &target,
            self.store.update_table_by_ids(ids, table_number),
        )?;

        self.note("move", &target, &format!("Moved to table {}", table_number));
        let count = self.guests.reassign(ids, table_number);
        Ok(Outcome::Moved {
            count,
            table_number,
        })
    }

    pub fn bulk_delete(&mut self, ids: &[i64]) -> AppResult<Outcome> {
        if ids.is_empty() {
            return Ok(Outcome::Ignored);
        }

        let target = format!("{} guests", ids.len());
        self.failed("del", &target, self.store.delete_by_ids(ids))?;

        self.note("del", &target, "Guests deleted");
        self.selection_forget(ids);
        Ok(Outcome::Deleted(self.guests.remove(ids)))
    }

    /// Bulk move of the current selection; the selection is cleared once
    /// the store accepted the change.
    pub fn move_selected(&mut self, table_number: Option<i64>) -> AppResult<Outcome> {
        let ids = self.selection.ids();
        let outcome = self.bulk_reassign(&ids, table_number)?;
        if outcome != Outcome::Ignored {
            self.selection.clear();
        }
        Ok(outcome)
    }

    pub fn delete_selected(&mut self) -> AppResult<Outcome> {
        let ids = self.selection.ids();
        let outcome = self.bulk_delete(&ids)?;
        self.selection.clear();
        Ok(outcome)
    }

    /// Parse CSV text and persist the accepted rows with one batch insert.
    pub fn import_csv(&mut self, text: &str) -> AppResult<Outcome> {
        let parsed = CsvImport::parse(text, self.guests.max_id());
        let rows = parsed.iter().map(NewGuest::from).collect();
        self.insert_batch("import", rows)
    }

    fn selection_forget(&mut self, ids: &[i64]) {
        for id in ids {
            if self.selection.contains(*id) {
                self.selection.toggle(*id);
            }
        }
    }

    /// Replace the stored settings row: delete all rows, then insert one.
    /// The two steps are not atomic.
    pub fn save_settings(&mut self) -> AppResult<Outcome> {
        let record = SettingsCodec::encode(&self.settings);

        self.failed("settings", "delete", self.store.delete_all_settings())?;
        self.failed("settings", "insert", self.store.insert_settings(&record))?;

        self.note("settings", "app_settings", "Settings saved");
        self.report.default_settings = false;
        Ok(Outcome::SettingsSaved)
    }
}
