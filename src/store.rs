//! Persistence seam: the operations the session needs from a backing store.
//!
//! `db::pool::DbPool` implements these over SQLite.

use crate::errors::AppResult;
use crate::models::guest::{Guest, NewGuest};
use crate::models::settings::SettingsRecord;

pub trait GuestStore {
    fn select_all(&self) -> AppResult<Vec<Guest>>;

    fn select_ordered_by_name(&self) -> AppResult<Vec<Guest>>;

    /// Insert all rows or none; returns the stored rows with their ids,
    /// in input order.
    fn insert_guests(&self, guests: &[NewGuest]) -> AppResult<Vec<Guest>>;

    fn update_by_id(&self, id: i64, name: &str, table_number: i64) -> AppResult<()>;

    fn update_table_by_ids(&self, ids: &[i64], table_number: i64) -> AppResult<()>;

    fn delete_by_id(&self, id: i64) -> AppResult<()>;

    fn delete_by_ids(&self, ids: &[i64]) -> AppResult<()>;
}

pub trait SettingsStore {
    fn select_one(&self) -> AppResult<Option<SettingsRecord>>;

    fn delete_all_settings(&self) -> AppResult<()>;

    fn insert_settings(&self, record: &SettingsRecord) -> AppResult<()>;
}

pub trait Store: GuestStore + SettingsStore {
    /// Operational log line; callers treat failures as non-fatal.
    fn log_event(&self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}
