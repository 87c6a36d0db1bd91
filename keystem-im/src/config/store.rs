//! Key-value access to the persisted typing state.

use std::path::{Path, PathBuf};

use anyhow::Result;
use keystem_engine::{LanguageId, ModeId, TextCase};
use tracing::warn;

use super::settings::Settings;

/// Read/write access to the persisted language, mode and text case.
///
/// Getters return what was stored, which may be stale or invalid; callers
/// are expected to validate it.
pub trait SettingsStore {
    fn enabled_languages(&self) -> Vec<LanguageId>;
    fn save_enabled_languages(&mut self, ids: &[LanguageId]);

    fn language(&self) -> LanguageId;
    fn save_language(&mut self, id: LanguageId);

    fn input_mode(&self) -> ModeId;
    fn save_input_mode(&mut self, id: ModeId);

    /// Stored text case id
    fn text_case(&self) -> u32;
    fn save_text_case(&mut self, case: TextCase);
}

/// In-memory store
impl SettingsStore for Settings {
    fn enabled_languages(&self) -> Vec<LanguageId> {
        self.input.enabled_languages.clone()
    }

    fn save_enabled_languages(&mut self, ids: &[LanguageId]) {
        self.input.enabled_languages = ids.to_vec();
    }

    fn language(&self) -> LanguageId {
        self.input.language
    }

    fn save_language(&mut self, id: LanguageId) {
        self.input.language = id;
    }

    fn input_mode(&self) -> ModeId {
        self.input.input_mode
    }

    fn save_input_mode(&mut self, id: ModeId) {
        self.input.input_mode = id;
    }

    fn text_case(&self) -> u32 {
        self.input.text_case
    }

    fn save_text_case(&mut self, case: TextCase) {
        self.input.text_case = case.id();
    }
}

/// Store that writes every change through to a TOML file.
///
/// Write failures are logged and otherwise ignored: the in-memory state
/// stays authoritative for the rest of the session.
#[derive(Debug)]
pub struct FileSettingsStore {
    settings: Settings,
    path: PathBuf,
}

impl FileSettingsStore {
    /// Open the store at `path`, starting from defaults if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let settings = if path.exists() {
            Settings::load_from(&path)?
        } else {
            Settings::default()
        };
        Ok(Self { settings, path })
    }

    /// Open the store at the user's configuration file.
    pub fn open_default() -> Result<Self> {
        let Some(path) = Settings::config_file() else {
            anyhow::bail!("Could not determine config directory");
        };
        Self::open(path)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Err(e) = self.settings.save_to(&self.path) {
            warn!("Failed to save settings to {:?}: {}", self.path, e);
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn enabled_languages(&self) -> Vec<LanguageId> {
        self.settings.enabled_languages()
    }

    fn save_enabled_languages(&mut self, ids: &[LanguageId]) {
        self.settings.save_enabled_languages(ids);
        self.persist();
    }

    fn language(&self) -> LanguageId {
        self.settings.language()
    }

    fn save_language(&mut self, id: LanguageId) {
        self.settings.save_language(id);
        self.persist();
    }

    fn input_mode(&self) -> ModeId {
        self.settings.input_mode()
    }

    fn save_input_mode(&mut self, id: ModeId) {
        self.settings.save_input_mode(id);
        self.persist();
    }

    fn text_case(&self) -> u32 {
        self.settings.text_case()
    }

    fn save_text_case(&mut self, case: TextCase) {
        self.settings.save_text_case(case);
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::open(dir.path().join("config.toml")).unwrap();
        assert_eq!(store.settings(), &Settings::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_changes_are_written_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut store = FileSettingsStore::open(&path).unwrap();
        store.save_enabled_languages(&[7, 2]);
        store.save_language(7);
        store.save_input_mode(2);
        store.save_text_case(TextCase::Upper);

        let reopened = FileSettingsStore::open(&path).unwrap();
        assert_eq!(reopened.enabled_languages(), vec![7, 2]);
        assert_eq!(reopened.language(), 7);
        assert_eq!(reopened.input_mode(), 2);
        assert_eq!(reopened.text_case(), TextCase::Upper.id());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written as a file
        let mut store = FileSettingsStore::open(dir.path().join("config.toml")).unwrap();
        store.path = dir.path().to_path_buf();

        store.save_language(3);
        assert_eq!(store.language(), 3);
    }
}
