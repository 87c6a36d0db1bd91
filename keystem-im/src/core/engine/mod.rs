//! Input method engine - ties the text field session to the typing state
//!
//! This module contains the `InputMethodEngine` struct that owns the active
//! [`TextField`], the current language and input mode, and the settings
//! store they are persisted to.

#[cfg(test)]
mod tests;

use keystem_engine::{InputMode, Language, LanguageCollection, LanguageId, ModeId};
use tracing::{debug, warn};

use super::action::EditorAction;
use super::connection::{EditorInfo, InputConnection};
use super::field::TextField;
use super::validator::{
    validate_enabled_languages, validate_language, validate_mode, validate_text_case,
};
use crate::config::SettingsStore;

/// The main input method engine
pub struct InputMethodEngine<S, C> {
    /// Persisted language, mode and text case
    store: S,
    /// Languages known at runtime
    languages: LanguageCollection,
    /// Validated enabled language ids
    enabled_languages: Vec<LanguageId>,
    language: Language,
    mode: InputMode,
    /// Session over the focused field, replaced on every field switch
    field: TextField<C>,
}

impl<S: SettingsStore, C: InputConnection> InputMethodEngine<S, C> {
    /// Create an engine that is not attached to any field yet.
    ///
    /// State is read from `store` and validated on [`start_input`](Self::start_input).
    pub fn new(store: S, languages: LanguageCollection) -> Self {
        Self {
            store,
            languages,
            enabled_languages: Vec::new(),
            language: Language::english(),
            mode: InputMode::from_id(0),
            field: TextField::detached(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    pub fn enabled_languages(&self) -> &[LanguageId] {
        &self.enabled_languages
    }

    pub fn field(&self) -> &TextField<C> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut TextField<C> {
        &mut self.field
    }

    /// Attach to a new field and bring the persisted state back to a valid one.
    ///
    /// `allowed_modes` are the mode ids the new field accepts.
    pub fn start_input(
        &mut self,
        connection: Option<C>,
        editor: Option<EditorInfo>,
        allowed_modes: &[ModeId],
    ) {
        self.field = TextField::new(connection, editor);
        debug!(
            "start_input: composing supported={} allowed_modes={:?}",
            self.field.is_composing_supported(),
            allowed_modes
        );
        self.validate_state(allowed_modes);
    }

    /// Validate enabled languages, language, input mode and text case, in that order.
    pub fn validate_state(&mut self, allowed_modes: &[ModeId]) {
        let stored_enabled = self.store.enabled_languages();
        self.enabled_languages =
            validate_enabled_languages(&mut self.store, &self.languages, &stored_enabled);

        let stored_language = self.languages.get(self.store.language()).cloned();
        self.language = validate_language(
            &mut self.store,
            &self.languages,
            stored_language.as_ref(),
            &self.enabled_languages,
        );

        let stored_mode = self.store.input_mode();
        self.mode = validate_mode(&mut self.store, InputMode::from_id(stored_mode), allowed_modes);
        if self.store.input_mode() != self.mode.id() {
            // Unknown stored ids decode to the numeric mode, which may itself be allowed
            warn!(
                "Unknown input mode: {}. Enforcing: {}",
                stored_mode,
                self.mode.id()
            );
            self.store.save_input_mode(self.mode.id());
        }

        let stored_case = self.store.text_case();
        validate_text_case(&mut self.store, &mut self.mode, stored_case);
    }

    /// Switch to an enabled language. Returns false if `id` is not enabled.
    pub fn set_language(&mut self, id: LanguageId) -> bool {
        let Some(language) = self.languages.get(id) else {
            return false;
        };
        if !self.enabled_languages.contains(&id) {
            debug!("set_language: {} is not enabled", id);
            return false;
        }
        self.language = language.clone();
        self.store.save_language(id);
        true
    }

    /// Switch input mode, keeping the current text case when the new mode allows it.
    pub fn set_input_mode(&mut self, id: ModeId, allowed_modes: &[ModeId]) {
        let case = self.mode.text_case().id();
        let mode = if allowed_modes.contains(&id) {
            self.store.save_input_mode(id);
            InputMode::from_id(id)
        } else {
            validate_mode(&mut self.store, InputMode::from_id(id), allowed_modes)
        };
        self.mode = mode;
        validate_text_case(&mut self.store, &mut self.mode, case);
    }

    /// Request a text case by its stored id
    pub fn set_text_case(&mut self, case: u32) {
        validate_text_case(&mut self.store, &mut self.mode, case);
    }

    /// Update the typed prefix used for emphasis
    pub fn set_stem(&mut self, stem: &str, fuzzy: bool) {
        self.mode.set_stem(stem, fuzzy);
    }

    /// The word at the cursor, using the current language's rules
    pub fn surrounding_word(&self) -> String {
        self.field.surrounding_word(Some(&self.language))
    }

    /// Show a predicted word as composing text, emphasizing the current stem
    pub fn show_candidate(&mut self, word: &str) {
        self.field.set_composing_for_mode(word, &self.mode);
    }

    /// Accept the composing word and forget the stem
    pub fn finish_composing(&mut self) {
        self.field.finish_composing();
        self.mode.clear_stem();
    }

    pub fn commit(&mut self, text: &str) {
        self.field.commit_text(text);
    }

    /// The action the confirm key would trigger in the current field
    pub fn confirm_action(&self) -> EditorAction {
        self.field.action()
    }

    /// Finish composing and perform the field's confirm action.
    /// Returns whether the host accepted the action.
    pub fn confirm(&mut self) -> bool {
        self.finish_composing();
        let action = self.field.action();
        self.field.perform_action(action)
    }
}
