//! keystem-im: text field mediation for a predictive keypad input method
//!
//! This crate sits between a predictive-text engine and a host text field.
//! It finds the word at the cursor, shows candidates as composing text,
//! resolves what the confirm key should do and keeps the persisted typing
//! state valid. Text classification comes from keystem-engine.

pub mod config;
pub mod core;
pub mod logging;

pub use config::{FileSettingsStore, Settings, SettingsStore};
pub use crate::core::action::{EditorAction, resolve};
pub use crate::core::connection::{EditorInfo, InputConnection, InputType};
pub use crate::core::engine::InputMethodEngine;
pub use crate::core::field::TextField;
pub use crate::core::preedit::{ComposingText, EmphasisSpan, EmphasisStyle};
pub use logging::init_logging;
