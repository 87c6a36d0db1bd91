//! Recording in-memory `InputConnection` for tests

use super::connection::InputConnection;
use super::preedit::ComposingText;

/// Calls the mock has seen, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    SetComposing(String),
    FinishComposing,
    Commit(String),
    Delete(usize, usize),
    BeginBatch,
    EndBatch,
    Action(i32),
}

/// A text field: text before and after the cursor, with an optional
/// composing region at the end of `before`.
#[derive(Debug, Default)]
pub(crate) struct MockConnection {
    pub before: String,
    pub after: String,
    pub composing: Option<ComposingText>,
    pub calls: Vec<Call>,
    /// Return value of `perform_editor_action`
    pub accept_actions: bool,
    /// Simulate a host that cannot report surrounding text
    pub unreadable: bool,
}

impl MockConnection {
    pub fn with_text(before: &str, after: &str) -> Self {
        Self {
            before: before.to_string(),
            after: after.to_string(),
            accept_actions: true,
            ..Self::default()
        }
    }

    /// Full field content
    pub fn text(&self) -> String {
        format!("{}{}", self.before, self.after)
    }

    pub fn commits(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Commit(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn drop_composing(&mut self) {
        if let Some(composing) = self.composing.take() {
            let keep = self.before.chars().count().saturating_sub(composing.len());
            self.before = self.before.chars().take(keep).collect();
        }
    }
}

impl InputConnection for MockConnection {
    fn text_before_cursor(&self, n: usize) -> Option<String> {
        if self.unreadable {
            return None;
        }
        let len = self.before.chars().count();
        Some(self.before.chars().skip(len.saturating_sub(n)).collect())
    }

    fn text_after_cursor(&self, n: usize) -> Option<String> {
        if self.unreadable {
            return None;
        }
        Some(self.after.chars().take(n).collect())
    }

    fn set_composing_text(&mut self, text: &ComposingText, _cursor: i32) -> bool {
        self.calls.push(Call::SetComposing(text.text().to_string()));
        self.drop_composing();
        self.before.push_str(text.text());
        self.composing = Some(text.clone());
        true
    }

    fn finish_composing_text(&mut self) -> bool {
        self.calls.push(Call::FinishComposing);
        self.composing = None;
        true
    }

    fn commit_text(&mut self, text: &str, _cursor: i32) -> bool {
        self.calls.push(Call::Commit(text.to_string()));
        self.drop_composing();
        self.before.push_str(text);
        true
    }

    fn delete_surrounding_text(&mut self, before: usize, after: usize) -> bool {
        self.calls.push(Call::Delete(before, after));
        let keep = self.before.chars().count().saturating_sub(before);
        self.before = self.before.chars().take(keep).collect();
        self.after = self.after.chars().skip(after).collect();
        true
    }

    fn begin_batch_edit(&mut self) -> bool {
        self.calls.push(Call::BeginBatch);
        true
    }

    fn end_batch_edit(&mut self) -> bool {
        self.calls.push(Call::EndBatch);
        true
    }

    fn perform_editor_action(&mut self, action_id: i32) -> bool {
        self.calls.push(Call::Action(action_id));
        self.accept_actions
    }
}
