//! Error types for input mode handling

use crate::mode::{InputModeKind, ModeId, TextCase};

/// Errors that can occur when building or adjusting an input mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModeError {
    #[error("unknown input mode id: {0}")]
    UnknownMode(ModeId),

    #[error("unknown text case: {0}")]
    UnknownTextCase(u32),

    #[error("text case {case:?} is not allowed in {mode:?} mode")]
    TextCaseNotAllowed { mode: InputModeKind, case: TextCase },
}

pub type Result<T> = std::result::Result<T, ModeError>;
