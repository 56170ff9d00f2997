//! Error types for the cipher engine and puzzle session.

use thiserror::Error;

use crate::types::CipherScheme;

/// Errors produced by the engine and the session API.
///
/// None of these are fatal to a running session: each is reported at the
/// boundary of the operation that detected it and leaves state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A scheme name did not match any member of the closed enumeration.
    #[error("invalid cipher scheme: {0}")]
    InvalidScheme(String),

    /// Hint requested without enough score to pay for it.
    #[error("insufficient resources: hint costs {required}, score is {score}")]
    InsufficientResources {
        /// Score at the time of the request
        score: u32,
        /// Score the hint costs
        required: u32,
    },

    /// Guess, hint, skip, or tick while the session is not accepting input.
    #[error("session is not active")]
    SessionInactive,

    /// Action is not valid in the session's current phase.
    #[error("cannot {action} while session is {phase}")]
    InvalidTransition {
        /// Action that was attempted
        action: &'static str,
        /// Phase the session was in
        phase: &'static str,
    },

    /// Built-in corpus and custom pool are both empty.
    #[error("word pool is empty")]
    EmptyWordPool,

    /// Ciphertext could not be turned back into plaintext.
    #[error("cannot decode {scheme} packet: {reason}")]
    Undecodable {
        /// Scheme the packet was decoded under
        scheme: CipherScheme,
        /// What went wrong
        reason: String,
    },
}

/// Errors produced when signing in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Username was empty after trimming.
    #[error("username is required")]
    EmptyUsername,
}
