//! Persisted configuration

pub mod settings;
pub mod store;

pub use settings::Settings;
pub use store::{FileSettingsStore, SettingsStore};
