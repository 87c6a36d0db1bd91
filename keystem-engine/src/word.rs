//! Word boundary detection around the cursor.

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::language::Language;
use crate::text::Text;

/// Maximum number of characters inspected on each side of the cursor
pub const SCAN_WINDOW: usize = 50;

/// Which punctuation counts as part of a word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordRules {
    /// `'` is a letter (Hebrew geresh, Ukrainian apostrophe)
    pub keep_apostrophe: bool,
    /// `"` is a letter (Hebrew gershayim)
    pub keep_quote: bool,
}

impl WordRules {
    pub fn for_language(language: Option<&Language>) -> Self {
        let Some(language) = language else {
            return Self::default();
        };
        Self {
            keep_apostrophe: language.is_hebrew() || language.is_ukrainian(),
            keep_quote: language.is_hebrew(),
        }
    }
}

fn last_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    let start = text.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i);
    &text[start..]
}

fn first_chars(text: &str, n: usize) -> &str {
    let end = text.char_indices().nth(n).map_or(text.len(), |(i, _)| i);
    &text[..end]
}

/// Move the cursor back to the start of the grapheme cluster it falls inside.
///
/// Hosts report text in code units, so the cursor may sit between a keycap
/// base and its combining marks or between the halves of a flag.
fn align_to_cluster(before: &str, after: &str) -> (String, String) {
    let joined = format!("{}{}", before, after);
    let cursor = before.len();
    let start = joined
        .grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|&i| i <= cursor)
        .last()
        .unwrap_or(0);
    let (before, after) = joined.split_at(start);
    (before.to_string(), after.to_string())
}

/// Reconstruct the token the cursor is in or next to.
///
/// `before` and `after` are the texts on either side of the cursor; only the
/// [`SCAN_WINDOW`] characters nearest to the cursor are looked at. Graphic
/// runs (emoji, symbols) win over words, so a cursor placed inside an emoji
/// sequence still yields the whole sequence.
pub fn surrounding_word(before: &str, after: &str, language: Option<&Language>) -> String {
    let (before, after) = align_to_cluster(
        last_chars(before, SCAN_WINDOW),
        first_chars(after, SCAN_WINDOW),
    );
    let before = Text::new(before);
    let after = Text::new(after);

    let before_graphic = before.ends_with_graphic();
    let after_graphic = after.starts_with_graphic();

    let word = match (before_graphic, after_graphic) {
        (true, true) => format!("{}{}", before.trailing_graphics(), after.leading_graphics()),
        (false, true) => after.leading_graphics().to_string(),
        (true, false) => before.trailing_graphics().to_string(),
        (false, false) => {
            let rules = WordRules::for_language(language);
            format!("{}{}", before.trailing_word(rules), after.leading_word(rules))
        }
    };
    trace!("surrounding word: \"{}\"", word);
    word
}
