//! Input modes and text case.

use crate::error::{ModeError, Result};

/// Numeric input mode identity, as stored in settings
pub type ModeId = u32;

/// Kind of input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputModeKind {
    /// Digits only ("123")
    Numeric,
    /// Dictionary-backed predictive typing
    Predictive,
    /// Multi-tap letters ("ABC")
    Abc,
}

impl InputModeKind {
    pub const fn id(self) -> ModeId {
        match self {
            Self::Numeric => 0,
            Self::Predictive => 1,
            Self::Abc => 2,
        }
    }

    pub fn from_id(id: ModeId) -> Result<Self> {
        match id {
            0 => Ok(Self::Numeric),
            1 => Ok(Self::Predictive),
            2 => Ok(Self::Abc),
            other => Err(ModeError::UnknownMode(other)),
        }
    }

    /// Text cases this mode can produce; the first one is the default.
    pub fn allowed_text_cases(self) -> &'static [TextCase] {
        match self {
            Self::Numeric => &[TextCase::Lower],
            Self::Predictive => &[TextCase::Lower, TextCase::Capitalize, TextCase::Upper],
            Self::Abc => &[TextCase::Lower, TextCase::Upper],
        }
    }

    pub fn default_text_case(self) -> TextCase {
        self.allowed_text_cases()[0]
    }
}

/// Letter case applied to typed words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextCase {
    Upper,
    Capitalize,
    Lower,
}

impl TextCase {
    pub const fn id(self) -> u32 {
        match self {
            Self::Upper => 0,
            Self::Capitalize => 1,
            Self::Lower => 2,
        }
    }
}

impl TryFrom<u32> for TextCase {
    type Error = ModeError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::Upper),
            1 => Ok(Self::Capitalize),
            2 => Ok(Self::Lower),
            other => Err(ModeError::UnknownTextCase(other)),
        }
    }
}

/// The active input mode, with the stem typed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMode {
    kind: InputModeKind,
    text_case: TextCase,
    /// Already-typed prefix of the current word
    stem: String,
    /// Whether the stem filter also accepts near matches
    fuzzy_stem: bool,
}

impl InputMode {
    pub fn new(kind: InputModeKind) -> Self {
        Self {
            kind,
            text_case: kind.default_text_case(),
            stem: String::new(),
            fuzzy_stem: false,
        }
    }

    /// Build a mode from a stored id. Unknown ids give the numeric mode.
    pub fn from_id(id: ModeId) -> Self {
        Self::new(InputModeKind::from_id(id).unwrap_or(InputModeKind::Numeric))
    }

    pub fn id(&self) -> ModeId {
        self.kind.id()
    }

    pub fn kind(&self) -> InputModeKind {
        self.kind
    }

    pub fn text_case(&self) -> TextCase {
        self.text_case
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn is_stem_fuzzy(&self) -> bool {
        self.fuzzy_stem
    }

    pub fn set_stem(&mut self, stem: impl Into<String>, fuzzy: bool) {
        self.stem = stem.into();
        self.fuzzy_stem = fuzzy;
    }

    pub fn clear_stem(&mut self) {
        self.stem.clear();
        self.fuzzy_stem = false;
    }

    /// Switch to the text case with the given stored id.
    ///
    /// The current case is left untouched when the id is unknown or the
    /// case is not available in this mode.
    pub fn set_text_case(&mut self, case_id: u32) -> Result<()> {
        let case = TextCase::try_from(case_id)?;
        if !self.kind.allowed_text_cases().contains(&case) {
            return Err(ModeError::TextCaseNotAllowed {
                mode: self.kind,
                case,
            });
        }
        self.text_case = case;
        Ok(())
    }

    /// Reset the text case to this mode's default
    pub fn default_text_case(&mut self) {
        self.text_case = self.kind.default_text_case();
    }
}
