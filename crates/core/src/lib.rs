//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the cipher engine, the word pool, the scoring rules,
//! and the puzzle session state machine. It has **no dependencies** on a
//! terminal, a clock, or any I/O: time advances only when the caller ticks.
//!
//! # Module Structure
//!
//! - [`cipher`]: The seven encodings, their hints, and reverse decoding
//! - [`words`]: Built-in corpus, custom keyword ingestion, selection pool
//! - [`scoring`]: Points, time bonus, penalties, and the level-up rule
//! - [`session`]: [`PuzzleSession`] and the [`reduce`] transition function
//! - [`snapshot`]: Word-free view of a session for presentation
//! - [`profile`]: Signed-in player and high score
//! - [`rng`]: Seedable random source
//!
//! # Example
//!
//! ```
//! use cipher_terminal_core::{PuzzleSession, WordPool};
//! use cipher_terminal_types::SessionAction;
//!
//! let mut session = PuzzleSession::new(WordPool::default(), 12345);
//! session.start();
//!
//! let word = session.puzzle().unwrap().word().to_string();
//! session.apply(SessionAction::Guess(word.to_lowercase())).unwrap();
//!
//! assert!(session.score() > 0);
//! assert_eq!(session.streak(), 1);
//! ```
//!
//! # Timing
//!
//! The countdown is one [`tick`](session::PuzzleSession::tick) per second.
//! Whoever owns the session decides where ticks come from.

pub mod cipher;
pub mod error;
pub mod profile;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod words;

pub use cipher_terminal_types as types;

// Re-export commonly used types for convenience
pub use cipher::{decode, encode, parse_scheme};
pub use error::{CipherError, ProfileError};
pub use profile::Profile;
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{reward_correct_guess, GuessReward};
pub use session::{reduce, GuessOutcome, Puzzle, PuzzleSession};
pub use snapshot::{SessionEvent, SessionPhase, SessionSnapshot};
pub use words::{extract_keywords, CustomPool, WordPool, BUILTIN_WORDS};
