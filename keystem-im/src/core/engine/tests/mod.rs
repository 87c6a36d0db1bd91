//! Tests for the text field session and the engine

use super::*;
use crate::config::Settings;
use crate::core::connection::InputType;
use crate::core::preedit::ComposingText;
use crate::core::testing::{Call, MockConnection};
use keystem_engine::{InputModeKind, TextCase};

mod field;

type Engine = InputMethodEngine<Settings, MockConnection>;

fn field(before: &str, after: &str) -> TextField<MockConnection> {
    TextField::new(
        Some(MockConnection::with_text(before, after)),
        Some(EditorInfo::default()),
    )
}

fn numeric_field(before: &str) -> TextField<MockConnection> {
    let editor = EditorInfo::default().with_input_type(InputType {
        numeric: true,
        limited: false,
    });
    TextField::new(Some(MockConnection::with_text(before, "")), Some(editor))
}

fn make_engine(settings: Settings) -> Engine {
    InputMethodEngine::new(settings, LanguageCollection::builtin())
}

fn calls(field: &TextField<MockConnection>) -> &[Call] {
    &field.connection().unwrap().calls
}
