//! Editor action resolution for the confirm key

use tracing::trace;

use super::connection::{EditorInfo, InputConnection};
use super::field::TextField;

/// `EditorInfo` option and action constants, as defined by the platform
pub mod ime {
    pub const MASK_ACTION: i32 = 0x0000_00ff;
    pub const ACTION_UNSPECIFIED: i32 = 0;
    pub const ACTION_NONE: i32 = 1;
    pub const ACTION_GO: i32 = 2;
    pub const ACTION_SEARCH: i32 = 3;
    pub const ACTION_SEND: i32 = 4;
    pub const ACTION_NEXT: i32 = 5;
    pub const ACTION_DONE: i32 = 6;
    pub const ACTION_PREVIOUS: i32 = 7;
    pub const FLAG_NO_ENTER_ACTION: i32 = 0x4000_0000;
    /// Not a platform action: the confirm key should act as Enter
    pub const ACTION_ENTER: i32 = MASK_ACTION + 1;
}

/// What the confirm key does in the current field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    None,
    Unspecified,
    Go,
    Search,
    Send,
    Next,
    Done,
    Previous,
    /// Behave like a plain Enter key press
    Enter,
    /// Application-defined action id
    Custom(i32),
}

impl EditorAction {
    pub fn from_id(id: i32) -> Self {
        match id {
            ime::ACTION_UNSPECIFIED => Self::Unspecified,
            ime::ACTION_NONE => Self::None,
            ime::ACTION_GO => Self::Go,
            ime::ACTION_SEARCH => Self::Search,
            ime::ACTION_SEND => Self::Send,
            ime::ACTION_NEXT => Self::Next,
            ime::ACTION_DONE => Self::Done,
            ime::ACTION_PREVIOUS => Self::Previous,
            ime::ACTION_ENTER => Self::Enter,
            other => Self::Custom(other),
        }
    }

    pub fn id(self) -> i32 {
        match self {
            Self::Unspecified => ime::ACTION_UNSPECIFIED,
            Self::None => ime::ACTION_NONE,
            Self::Go => ime::ACTION_GO,
            Self::Search => ime::ACTION_SEARCH,
            Self::Send => ime::ACTION_SEND,
            Self::Next => ime::ACTION_NEXT,
            Self::Done => ime::ACTION_DONE,
            Self::Previous => ime::ACTION_PREVIOUS,
            Self::Enter => ime::ACTION_ENTER,
            Self::Custom(id) => id,
        }
    }
}

/// Pick the action for the confirm key.
///
/// Custom labels and "done" are treated as Enter, like common keyboards do.
/// Standard actions declared in the options are performed, including
/// "unspecified"; anything else, and any field with the no-enter-action
/// flag, falls back to Enter.
pub fn resolve(editor: &EditorInfo) -> EditorAction {
    if editor.action_id == ime::ACTION_DONE || editor.action_label.is_some() {
        return EditorAction::Enter;
    }
    if editor.action_id > 0 {
        return EditorAction::from_id(editor.action_id);
    }

    let standard = editor.ime_options & (ime::MASK_ACTION | ime::FLAG_NO_ENTER_ACTION);
    match standard {
        ime::ACTION_DONE
        | ime::ACTION_GO
        | ime::ACTION_NEXT
        | ime::ACTION_PREVIOUS
        | ime::ACTION_SEARCH
        | ime::ACTION_SEND
        | ime::ACTION_UNSPECIFIED => EditorAction::from_id(standard),
        _ => EditorAction::Enter,
    }
}

impl<C: InputConnection> TextField<C> {
    /// The confirm-key action for this field, `None` when no field is bound
    pub fn action(&self) -> EditorAction {
        self.editor
            .as_ref()
            .map_or(EditorAction::None, resolve)
    }

    /// Ask the host to perform `action`. Returns whether the host accepted it.
    pub fn perform_action(&mut self, action: EditorAction) -> bool {
        if action == EditorAction::None {
            return false;
        }
        let Some(connection) = self.connection.as_mut() else {
            return false;
        };
        trace!("performing editor action {:?}", action);
        connection.perform_editor_action(action.id())
    }
}
