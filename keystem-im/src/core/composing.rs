//! Composing text with stem emphasis

use keystem_engine::{InputMode, Text};
use tracing::{debug, warn};

use super::connection::InputConnection;
use super::field::TextField;
use super::preedit::{ComposingText, EmphasisSpan, EmphasisStyle};

/// Style `word` with a whole-word underline and an emphasized `[start, end)`.
///
/// `fuzzy` selects bold italic instead of bold. The word is returned
/// unstyled when the range is invalid, when there is nothing to emphasize,
/// or when it starts with a non letter/digit, since styling would split
/// an emoji or symbol.
pub fn highlight_stem(word: &str, start: usize, end: usize, fuzzy: bool) -> ComposingText {
    if end <= start {
        warn!(
            "Cannot highlight invalid composing text range: [{}, {}]",
            start, end
        );
        return ComposingText::plain(word);
    }

    let text = Text::new(word);
    let len = text.len();
    if len <= start || !text.starts_with_letter_or_digit() {
        return ComposingText::plain(word);
    }

    let style = if fuzzy {
        EmphasisStyle::BoldItalic
    } else {
        EmphasisStyle::Bold
    };
    ComposingText::with_spans(
        word,
        vec![
            EmphasisSpan::underline(0, len),
            EmphasisSpan::new(start, end.min(len), style),
        ],
    )
}

impl<C: InputConnection> TextField<C> {
    /// Set the composing text, passing it to the host only if the field
    /// supports composing.
    pub fn set_composing_text(&mut self, text: ComposingText) {
        if self.is_composing_supported
            && let Some(connection) = self.connection.as_mut()
        {
            connection.set_composing_text(&text, 1);
        }
        self.composing_text = text;
    }

    /// Set `word` as composing text with its first `stem` characters emphasized
    pub fn set_composing_with_stem(&mut self, word: &str, stem: &str, fuzzy: bool) {
        let text = if stem.is_empty() {
            ComposingText::plain(word)
        } else {
            highlight_stem(word, 0, stem.chars().count(), fuzzy)
        };
        self.set_composing_text(text);
    }

    /// Like [`set_composing_with_stem`](Self::set_composing_with_stem), with
    /// the stem and fuzziness of `mode`
    pub fn set_composing_for_mode(&mut self, word: &str, mode: &InputMode) {
        self.set_composing_with_stem(word, mode.stem(), mode.is_stem_fuzzy());
    }

    /// Turn the composing text into regular text.
    ///
    /// Fields without composing support get the cached text committed
    /// instead. The cache is cleared either way, so a repeated call commits
    /// nothing.
    pub fn finish_composing(&mut self) {
        let Some(connection) = self.connection.as_mut() else {
            return;
        };

        let text = std::mem::take(&mut self.composing_text);
        if self.is_composing_supported {
            connection.finish_composing_text();
        } else if !text.is_empty() {
            debug!("emulating composing: committing \"{}\"", text.text());
            connection.commit_text(text.text(), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_bold_stem() {
        let text = highlight_stem("worked", 0, 4, false);
        assert_eq!(text.text(), "worked");
        assert_eq!(
            text.spans(),
            &[
                EmphasisSpan::underline(0, 6),
                EmphasisSpan::new(0, 4, EmphasisStyle::Bold),
            ]
        );
    }

    #[test]
    fn test_highlight_fuzzy_stem() {
        let text = highlight_stem("worked", 0, 4, true);
        assert_eq!(
            text.stem_span(),
            Some(&EmphasisSpan::new(0, 4, EmphasisStyle::BoldItalic))
        );
    }

    #[test]
    fn test_highlight_clamps_to_word() {
        let text = highlight_stem("cat", 0, 10, false);
        assert_eq!(
            text.stem_span(),
            Some(&EmphasisSpan::new(0, 3, EmphasisStyle::Bold))
        );
    }

    #[test]
    fn test_highlight_counts_characters() {
        let text = highlight_stem("ёжик", 0, 2, false);
        assert_eq!(text.spans()[0], EmphasisSpan::underline(0, 4));
        assert_eq!(
            text.stem_span(),
            Some(&EmphasisSpan::new(0, 2, EmphasisStyle::Bold))
        );
    }

    #[test]
    fn test_no_highlight_cases() {
        // invalid range
        assert!(!highlight_stem("word", 3, 3, false).is_styled());
        assert!(!highlight_stem("word", 3, 1, false).is_styled());
        // nothing to highlight in
        assert_eq!(highlight_stem("", 0, 1, false), ComposingText::plain(""));
        assert!(!highlight_stem("ab", 2, 4, false).is_styled());
        // emoji and symbols are never split
        let text = highlight_stem("😀abc", 0, 2, false);
        assert_eq!(text, ComposingText::plain("😀abc"));
        assert!(!highlight_stem("#tag", 0, 2, true).is_styled());
    }
}
