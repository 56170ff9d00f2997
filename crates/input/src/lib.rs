//! Terminal input module (session-facing).
//!
//! Maps one line of operator input onto a [`crate::types::SessionAction`] or a
//! program-level command. Slash-prefixed words are commands; any other
//! non-empty line is a decryption attempt.

pub mod map;

pub use cipher_terminal_types as types;

pub use map::{parse_command, InputCommand, HELP_TEXT};
