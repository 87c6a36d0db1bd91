pub mod error;
pub mod language;
pub mod mode;
pub mod text;
pub mod word;

pub use error::ModeError;
pub use language::{DEFAULT_LANGUAGE_ID, Language, LanguageCollection, LanguageId};
pub use mode::{InputMode, InputModeKind, ModeId, TextCase};
pub use text::Text;
pub use word::{SCAN_WINDOW, WordRules, surrounding_word};
