//! Languages known to the input method.

/// Numeric language identity, as stored in settings
pub type LanguageId = u32;

/// The language every fallback chain ends with (English)
pub const DEFAULT_LANGUAGE_ID: LanguageId = 1;

/// A typing language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    id: LanguageId,
    name: String,
    /// BCP 47 style locale, e.g. "en", "uk-UA"
    locale: String,
}

impl Language {
    pub fn new(id: LanguageId, name: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            locale: locale.into(),
        }
    }

    /// The built-in language used when nothing else can be resolved
    pub fn english() -> Self {
        Self::new(DEFAULT_LANGUAGE_ID, "English", "en")
    }

    pub fn id(&self) -> LanguageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The language subtag of the locale ("uk" for "uk-UA")
    pub fn code(&self) -> &str {
        self.locale
            .split(['-', '_'])
            .next()
            .unwrap_or(&self.locale)
    }

    pub fn is_hebrew(&self) -> bool {
        // "iw" is the legacy code still reported by some platforms
        self.code().eq_ignore_ascii_case("he") || self.code().eq_ignore_ascii_case("iw")
    }

    pub fn is_ukrainian(&self) -> bool {
        self.code().eq_ignore_ascii_case("uk")
    }
}

/// The set of languages available at runtime
#[derive(Debug, Clone, Default)]
pub struct LanguageCollection {
    languages: Vec<Language>,
}

impl LanguageCollection {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// Languages shipped with the input method
    pub fn builtin() -> Self {
        Self::new(vec![
            Language::english(),
            Language::new(2, "Български", "bg"),
            Language::new(3, "Deutsch", "de"),
            Language::new(4, "Français", "fr"),
            Language::new(5, "Español", "es"),
            Language::new(6, "עברית", "he"),
            Language::new(7, "Українська", "uk"),
            Language::new(8, "Русский", "ru"),
        ])
    }

    pub fn get(&self, id: LanguageId) -> Option<&Language> {
        self.languages.iter().find(|l| l.id == id)
    }

    pub fn contains(&self, id: LanguageId) -> bool {
        self.get(id).is_some()
    }

    /// Look up every id in order, skipping unknown and repeated ones.
    pub fn get_all(&self, ids: &[LanguageId]) -> Vec<&Language> {
        let mut found: Vec<&Language> = Vec::with_capacity(ids.len());
        for id in ids {
            if found.iter().any(|l| l.id == *id) {
                continue;
            }
            if let Some(language) = self.get(*id) {
                found.push(language);
            }
        }
        found
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
