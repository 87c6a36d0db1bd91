//! Core input method functionality
//!
//! This module contains the text field session, composing text handling,
//! editor action resolution and state validation.

pub mod action;
pub mod composing;
pub mod connection;
pub mod engine;
pub mod field;
pub mod preedit;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;
