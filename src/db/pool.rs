//! SQLite connection wrapper (lightweight for CLI usage) and the `Store`
//! implementation on top of it.

use crate::db::{log, queries};
use crate::errors::AppResult;
use crate::models::guest::{Guest, NewGuest};
use crate::models::settings::SettingsRecord;
use crate::store::{GuestStore, SettingsStore, Store};
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Private in-memory database, used by tests and previews.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        func(&mut self.conn)
    }
}

impl GuestStore for DbPool {
    fn select_all(&self) -> AppResult<Vec<Guest>> {
        queries::load_guests(&self.conn)
    }

    fn select_ordered_by_name(&self) -> AppResult<Vec<Guest>> {
        queries::load_guests_by_name(&self.conn)
    }

    fn insert_guests(&self, guests: &[NewGuest]) -> AppResult<Vec<Guest>> {
        queries::insert_guests(&self.conn, guests)
    }

    fn update_by_id(&self, id: i64, name: &str, table_number: i64) -> AppResult<()> {
        queries::update_guest(&self.conn, id, name, table_number)
    }

    fn update_table_by_ids(&self, ids: &[i64], table_number: i64) -> AppResult<()> {
        queries::update_table_for_ids(&self.conn, ids, table_number)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        queries::delete_guest(&self.conn, id)
    }

    fn delete_by_ids(&self, ids: &[i64]) -> AppResult<()> {
        queries::delete_guests(&self.conn, ids)
    }
}

impl SettingsStore for DbPool {
    fn select_one(&self) -> AppResult<Option<SettingsRecord>> {
        queries::load_settings(&self.conn)
    }

    fn delete_all_settings(&self) -> AppResult<()> {
        queries::delete_settings(&self.conn)
    }

    fn insert_settings(&self, record: &SettingsRecord) -> AppResult<()> {
        queries::insert_settings(&self.conn, record)
    }
}

impl Store for DbPool {
    fn log_event(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::ttlog(&self.conn, operation, target, message)
    }
}
