//! Composing text management
//!
//! The composing text is the candidate word shown in the field before it is
//! committed. Styling is carried as a list of spans; turning them into
//! formatted text is left to the host.

/// Style of an emphasis span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisStyle {
    /// Plain underline marking the whole uncommitted word
    Underline,
    /// Bold stem
    Bold,
    /// Bold italic stem, used when the stem was matched fuzzily
    BoldItalic,
}

/// A styled range of the composing text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmphasisSpan {
    /// Start position (character index)
    pub start: usize,
    /// End position (character index, exclusive)
    pub end: usize,
    pub style: EmphasisStyle,
}

impl EmphasisSpan {
    pub fn new(start: usize, end: usize, style: EmphasisStyle) -> Self {
        Self { start, end, style }
    }

    /// Create an underline span for the entire range
    pub fn underline(start: usize, end: usize) -> Self {
        Self::new(start, end, EmphasisStyle::Underline)
    }
}

/// Composing text with optional styling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposingText {
    text: String,
    spans: Vec<EmphasisSpan>,
}

impl ComposingText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unstyled composing text
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    pub fn with_spans(text: impl Into<String>, spans: Vec<EmphasisSpan>) -> Self {
        Self {
            text: text.into(),
            spans,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[EmphasisSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_styled(&self) -> bool {
        !self.spans.is_empty()
    }

    /// The span carrying the stem emphasis, if any
    pub fn stem_span(&self) -> Option<&EmphasisSpan> {
        self.spans
            .iter()
            .find(|s| s.style != EmphasisStyle::Underline)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.spans.clear();
    }
}

impl From<&str> for ComposingText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for ComposingText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}
