//! Text classification and slicing.
//!
//! A [`Text`] splits its content into grapheme clusters and tells letter/digit
//! runs apart from "graphic" runs (emoji, pictographs, symbols). Every slice
//! is taken on a cluster boundary, so a flag or a ZWJ family sequence is
//! never cut in half.

use unicode_segmentation::UnicodeSegmentation;

use crate::word::WordRules;

/// Typographic apostrophe, used in place of `'` by many keyboards
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';
/// Selects emoji presentation for the preceding character
const EMOJI_PRESENTATION: char = '\u{fe0f}';
const COMBINING_KEYCAP: char = '\u{20e3}';

/// Check if a single character is graphic.
///
/// Latin-1 is never graphic: ASCII punctuation such as `.` or `,` ends a
/// word but is not a token of its own. Neither is the typographic apostrophe.
pub fn is_graphic(ch: char) -> bool {
    ch as u32 > 0xff && ch != RIGHT_SINGLE_QUOTE && !ch.is_alphanumeric() && !ch.is_whitespace()
}

/// A grapheme cluster is graphic when its base character is, or when it is
/// drawn as an emoji (`❤️`, keycaps such as `#️⃣` whose base is ASCII).
fn is_graphic_cluster(cluster: &str) -> bool {
    cluster.chars().next().is_some_and(is_graphic)
        || cluster.contains([EMOJI_PRESENTATION, COMBINING_KEYCAP])
}

fn is_word_cluster(cluster: &str, rules: WordRules) -> bool {
    match cluster {
        "'" | "\u{2019}" => rules.keep_apostrophe,
        "\"" => rules.keep_quote,
        _ => {
            !is_graphic_cluster(cluster)
                && cluster.chars().next().is_some_and(char::is_alphanumeric)
        }
    }
}

/// Immutable view over a piece of text from around the cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn starts_with_graphic(&self) -> bool {
        self.text.graphemes(true).next().is_some_and(is_graphic_cluster)
    }

    pub fn ends_with_graphic(&self) -> bool {
        self.text
            .graphemes(true)
            .next_back()
            .is_some_and(is_graphic_cluster)
    }

    /// Check if the first character is a letter or a digit
    pub fn starts_with_letter_or_digit(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_alphanumeric)
    }

    /// The run of graphic clusters at the start of the text
    pub fn leading_graphics(&self) -> &str {
        self.leading_run(is_graphic_cluster)
    }

    /// The run of graphic clusters at the end of the text
    pub fn trailing_graphics(&self) -> &str {
        self.trailing_run(is_graphic_cluster)
    }

    /// The word fragment at the start of the text (text after the cursor)
    pub fn leading_word(&self, rules: WordRules) -> &str {
        self.leading_run(|cluster| is_word_cluster(cluster, rules))
    }

    /// The word fragment at the end of the text (text before the cursor)
    pub fn trailing_word(&self, rules: WordRules) -> &str {
        self.trailing_run(|cluster| is_word_cluster(cluster, rules))
    }

    fn leading_run(&self, keep: impl Fn(&str) -> bool) -> &str {
        let end = self
            .text
            .grapheme_indices(true)
            .find(|(_, cluster)| !keep(cluster))
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }

    fn trailing_run(&self, keep: impl Fn(&str) -> bool) -> &str {
        let start = self
            .text
            .grapheme_indices(true)
            .rev()
            .take_while(|(_, cluster)| keep(cluster))
            .last()
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[start..]
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
