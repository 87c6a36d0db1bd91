//! Host-side collaborators: the text connection and the editor metadata.

use super::preedit::ComposingText;

/// Synchronous connection to the host's text field.
///
/// Mirrors the calls a platform input connection offers. Methods returning
/// `bool` report whether the host accepted the request. Character counts
/// are Unicode scalar values.
pub trait InputConnection {
    /// Up to `n` characters before the cursor, `None` if the host cannot tell
    fn text_before_cursor(&self, n: usize) -> Option<String>;
    /// Up to `n` characters after the cursor, `None` if the host cannot tell
    fn text_after_cursor(&self, n: usize) -> Option<String>;

    /// Replace the composing region with `text`. `cursor` follows the
    /// platform convention: `1` puts the cursor right after the text.
    fn set_composing_text(&mut self, text: &ComposingText, cursor: i32) -> bool;
    /// Accept the composing region as regular text
    fn finish_composing_text(&mut self) -> bool;
    fn commit_text(&mut self, text: &str, cursor: i32) -> bool;
    fn delete_surrounding_text(&mut self, before: usize, after: usize) -> bool;

    fn begin_batch_edit(&mut self) -> bool;
    fn end_batch_edit(&mut self) -> bool;

    fn perform_editor_action(&mut self, action_id: i32) -> bool;
}

/// Input type classification of the focused field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputType {
    /// Number, phone or date field
    pub numeric: bool,
    /// Field that rejects or truncates composing text (e.g. a length limit)
    pub limited: bool,
}

/// Metadata the host supplies about the focused field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorInfo {
    pub action_id: i32,
    pub action_label: Option<String>,
    pub ime_options: i32,
    pub input_type: InputType,
}

impl EditorInfo {
    pub fn new(ime_options: i32) -> Self {
        Self {
            ime_options,
            ..Self::default()
        }
    }

    pub fn with_action_id(mut self, action_id: i32) -> Self {
        self.action_id = action_id;
        self
    }

    pub fn with_action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }
}
