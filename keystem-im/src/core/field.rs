//! The text field currently bound to the input method
//!
//! [`TextField`] wraps one host connection and its editor metadata for the
//! lifetime of one editor attachment. Every operation degrades to a no-op
//! (or an empty/false result) when there is no connection.

use keystem_engine::{Language, SCAN_WINDOW, surrounding_word};
use tracing::trace;

use super::connection::{EditorInfo, InputConnection};
use super::preedit::ComposingText;

/// Session over one host text field
#[derive(Debug)]
pub struct TextField<C> {
    pub(super) connection: Option<C>,
    pub(super) editor: Option<EditorInfo>,
    /// False for numeric and length-limited fields; decided once per field
    pub(super) is_composing_supported: bool,
    /// Last composing text set, committed verbatim when composing is unsupported
    pub(super) composing_text: ComposingText,
}

impl<C: InputConnection> TextField<C> {
    pub fn new(connection: Option<C>, editor: Option<EditorInfo>) -> Self {
        let is_composing_supported = editor
            .as_ref()
            .is_none_or(|e| !e.input_type.numeric && !e.input_type.limited);
        Self {
            connection,
            editor,
            is_composing_supported,
            composing_text: ComposingText::new(),
        }
    }

    /// A session bound to nothing
    pub fn detached() -> Self {
        Self::new(None, None)
    }

    pub fn connection(&self) -> Option<&C> {
        self.connection.as_ref()
    }

    pub fn connection_mut(&mut self) -> Option<&mut C> {
        self.connection.as_mut()
    }

    pub fn editor_info(&self) -> Option<&EditorInfo> {
        self.editor.as_ref()
    }

    pub fn is_composing_supported(&self) -> bool {
        self.is_composing_supported
    }

    /// The last composing text set through this session
    pub fn composing_text(&self) -> &ComposingText {
        &self.composing_text
    }

    /// Check if this session is live and bound to the given field
    pub fn is_same_field(&self, editor: &EditorInfo) -> bool {
        self.connection.is_some() && self.editor.as_ref() == Some(editor)
    }

    /// True when there is no text on either side of the cursor
    pub fn is_empty(&self) -> bool {
        self.text_before(1).is_empty() && self.text_after(1).is_empty()
    }

    /// Up to `n` characters before the cursor
    pub fn text_before(&self, n: usize) -> String {
        self.connection
            .as_ref()
            .and_then(|c| c.text_before_cursor(n))
            .unwrap_or_default()
    }

    /// Up to `n` characters after the cursor
    pub fn text_after(&self, n: usize) -> String {
        self.connection
            .as_ref()
            .and_then(|c| c.text_after_cursor(n))
            .unwrap_or_default()
    }

    /// The text before the cursor, up to the word scan window
    pub fn text_before_default(&self) -> String {
        self.text_before(SCAN_WINDOW)
    }

    /// The word next to or around the cursor
    pub fn surrounding_word(&self, language: Option<&Language>) -> String {
        let before = self.text_before_default();
        let after = self.text_after(SCAN_WINDOW);
        surrounding_word(&before, &after, language)
    }

    /// Delete the space right before `word`, which must end at the cursor.
    ///
    /// Nothing happens at the start of the field or when the space is part
    /// of a double space.
    pub fn delete_preceding_space(&mut self, word: &str) {
        let Some(connection) = self.connection.as_mut() else {
            return;
        };

        let search_len = word.chars().count() + 1;
        let context_len = search_len + 1;

        connection.begin_batch_edit();

        let before: Vec<char> = connection
            .text_before_cursor(context_len)
            .unwrap_or_default()
            .chars()
            .collect();
        let has_single_space = before.len() >= context_len && {
            let start = before.len() - context_len;
            // [start] must not be a space, [start + 1] must be
            before[start + 1] == ' ' && before[start] != ' '
        };

        if has_single_space {
            trace!("deleting space before \"{}\"", word);
            connection.delete_surrounding_text(search_len, 0);
            connection.commit_text(word, 1);
        }

        connection.end_batch_edit();
    }

    /// Commit `text` and place the cursor after it
    pub fn commit_text(&mut self, text: &str) {
        if let Some(connection) = self.connection.as_mut() {
            connection.commit_text(text, 1);
        }
    }
}
