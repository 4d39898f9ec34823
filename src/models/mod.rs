pub mod guest;
pub mod settings;

pub use guest::{Guest, GuestEntry, NewGuest};
pub use settings::{AppSettings, ColorField, FieldKind, SettingsField, SettingsRecord};
