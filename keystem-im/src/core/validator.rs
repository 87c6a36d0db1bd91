//! Repair of persisted language, input mode and text case
//!
//! Stored state can go stale when languages are disabled or a field only
//! allows some modes. Each check here replaces an invalid value with the
//! nearest valid one, writes it back through the [`SettingsStore`] and logs
//! the correction. None of them fail.

use keystem_engine::{
    DEFAULT_LANGUAGE_ID, InputMode, InputModeKind, Language, LanguageCollection, LanguageId,
    ModeId,
};
use tracing::{debug, error, warn};

use crate::config::SettingsStore;

/// Keep only the enabled ids the runtime knows about. Never returns an empty list.
pub fn validate_enabled_languages(
    store: &mut impl SettingsStore,
    languages: &LanguageCollection,
    enabled: &[LanguageId],
) -> Vec<LanguageId> {
    let mut valid: Vec<LanguageId> = languages
        .get_all(enabled)
        .into_iter()
        .map(Language::id)
        .collect();

    if valid.is_empty() {
        valid.push(DEFAULT_LANGUAGE_ID);
        error!(
            "The language list seems to be corrupted: {:?}. Resetting to language {} only.",
            enabled, DEFAULT_LANGUAGE_ID
        );
    } else if valid.len() != enabled.len() {
        debug!("Dropped unknown or repeated language ids: {:?} -> {:?}", enabled, valid);
    }

    store.save_enabled_languages(&valid);
    valid
}

/// Ordered fallbacks for the current language: first enabled, default id, built-in English.
fn fallback_language(languages: &LanguageCollection, enabled: &[LanguageId]) -> Language {
    let resolvers: [&dyn Fn() -> Option<Language>; 3] = [
        &|| enabled.first().and_then(|id| languages.get(*id)).cloned(),
        &|| languages.get(DEFAULT_LANGUAGE_ID).cloned(),
        &|| Some(Language::english()),
    ];
    resolvers
        .iter()
        .find_map(|resolve| resolve())
        .unwrap_or_else(Language::english)
}

/// Return `language` if it is enabled, otherwise a fallback, which is persisted.
pub fn validate_language(
    store: &mut impl SettingsStore,
    languages: &LanguageCollection,
    language: Option<&Language>,
    enabled: &[LanguageId],
) -> Language {
    if let Some(language) = language
        && enabled.contains(&language.id())
    {
        return language.clone();
    }

    let valid = fallback_language(languages, enabled);
    store.save_language(valid.id());

    match language {
        Some(language) => warn!(
            "Language: {} is not enabled. Enforcing language: {}",
            language.id(),
            valid.id()
        ),
        None => warn!("Missing language. Enforcing language: {}", valid.id()),
    }

    valid
}

/// Return `mode` if the field allows it, otherwise the first allowed mode
/// (or the numeric mode when nothing is allowed), which is persisted.
pub fn validate_mode(store: &mut impl SettingsStore, mode: InputMode, allowed: &[ModeId]) -> InputMode {
    if allowed.contains(&mode.id()) {
        return mode;
    }

    let new_mode = allowed
        .first()
        .map_or(InputMode::new(InputModeKind::Numeric), |id| {
            InputMode::from_id(*id)
        });
    store.save_input_mode(new_mode.id());

    if new_mode.id() != mode.id() {
        warn!(
            "Invalid input mode: {}. Enforcing: {}",
            mode.id(),
            new_mode.id()
        );
    }

    new_mode
}

/// Apply the requested text case to `mode`, or its default when the mode
/// rejects it. The resulting case is always persisted.
pub fn validate_text_case(store: &mut impl SettingsStore, mode: &mut InputMode, requested: u32) {
    if let Err(e) = mode.set_text_case(requested) {
        mode.default_text_case();
        warn!(
            "Invalid text case: {} ({}). Enforcing: {:?}",
            requested,
            e,
            mode.text_case()
        );
    }

    store.save_text_case(mode.text_case());
}
