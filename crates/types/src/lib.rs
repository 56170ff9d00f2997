//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies beyond `serde`, so
//! they can be used by the engine, the runtime, and any presentation layer.
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TIME_SECS` | 60 | Countdown at session start and retry |
//! | `MAX_TIME_SECS` | 99 | Cap applied when the time bonus is added |
//! | `TIME_BONUS_SECS` | 15 | Seconds returned on a correct guess |
//! | `HINT_COST` | 50 | Score spent on a hint (and the minimum to buy one) |
//! | `SKIP_PENALTY` | 100 | Score lost on skip (floored at 0) |
//! | `WRONG_PENALTY` | 25 | Score lost on a wrong guess (floored at 0) |
//! | `MAX_DIFFICULTY` | 10 | Highest difficulty level |
//!
//! # Examples
//!
//! ```
//! use cipher_terminal_types::{CipherScheme, SessionAction, eligible_schemes};
//!
//! // Parse from string (case-insensitive)
//! let scheme = CipherScheme::from_str("rot13").unwrap();
//! assert_eq!(scheme, CipherScheme::Rot13);
//!
//! // Level 1 only ever uses REVERSE
//! assert_eq!(eligible_schemes(1), &[CipherScheme::Reverse]);
//!
//! // Parse a session action
//! assert_eq!(SessionAction::from_str("skip"), Some(SessionAction::Skip));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Countdown at session start and after retry (seconds).
pub const INITIAL_TIME_SECS: u32 = 60;

/// Upper bound for the countdown when the time bonus is applied.
pub const MAX_TIME_SECS: u32 = 99;

/// Seconds added to the countdown after a correct guess.
pub const TIME_BONUS_SECS: u32 = 15;

/// Score spent on a hint.
pub const HINT_COST: u32 = 50;

/// Score lost when skipping a puzzle.
pub const SKIP_PENALTY: u32 = 100;

/// Score lost on a wrong guess.
pub const WRONG_PENALTY: u32 = 25;

/// Lowest difficulty level.
pub const MIN_DIFFICULTY: u32 = 1;

/// Highest difficulty level. Also the level whose table entry holds every scheme.
pub const MAX_DIFFICULTY: u32 = 10;

/// Consecutive correct guesses needed per difficulty step.
pub const STREAK_PER_LEVEL: u32 = 3;

/// Points per difficulty level on a correct guess.
pub const LEVEL_POINTS: u32 = 100;

/// Points per remaining second on a correct guess.
pub const TIME_POINTS: u32 = 2;

/// Points per streak step on a correct guess.
pub const STREAK_POINTS: u32 = 50;

/// Number of event log lines kept by a session.
pub const LOG_CAPACITY: usize = 5;

/// Maximum keywords taken from a single ingestion.
pub const MAX_KEYWORDS_PER_INGEST: usize = 50;

/// Minimum length of a corpus or keyword token.
pub const MIN_WORD_LEN: usize = 5;

/// The closed family of encodings a puzzle can use.
///
/// - **Reverse**: character order reversed
/// - **Caesar**: letters shifted forward by a difficulty-dependent amount
/// - **Atbash**: alphabet mirrored (A↔Z)
/// - **Base64**: standard padded Base64
/// - **Binary**: 8-bit code points separated by spaces
/// - **Hex**: 2-digit upper-case code points separated by spaces
/// - **Rot13**: Caesar with a fixed shift of 13
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CipherScheme {
    Reverse,
    Caesar,
    Atbash,
    Base64,
    Binary,
    Hex,
    Rot13,
}

impl CipherScheme {
    /// Every scheme, in declaration order.
    pub const ALL: [CipherScheme; 7] = [
        CipherScheme::Reverse,
        CipherScheme::Caesar,
        CipherScheme::Atbash,
        CipherScheme::Base64,
        CipherScheme::Binary,
        CipherScheme::Hex,
        CipherScheme::Rot13,
    ];

    /// Parse scheme from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cipher_terminal_types::CipherScheme;
    ///
    /// assert_eq!(CipherScheme::from_str("hex"), Some(CipherScheme::Hex));
    /// assert_eq!(CipherScheme::from_str("ATBASH"), Some(CipherScheme::Atbash));
    /// assert_eq!(CipherScheme::from_str("vigenere"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reverse" => Some(CipherScheme::Reverse),
            "caesar" => Some(CipherScheme::Caesar),
            "atbash" => Some(CipherScheme::Atbash),
            "base64" => Some(CipherScheme::Base64),
            "binary" => Some(CipherScheme::Binary),
            "hex" => Some(CipherScheme::Hex),
            "rot13" => Some(CipherScheme::Rot13),
            _ => None,
        }
    }

    /// Upper-case display name, as shown on the HUD.
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherScheme::Reverse => "REVERSE",
            CipherScheme::Caesar => "CAESAR",
            CipherScheme::Atbash => "ATBASH",
            CipherScheme::Base64 => "BASE64",
            CipherScheme::Binary => "BINARY",
            CipherScheme::Hex => "HEX",
            CipherScheme::Rot13 => "ROT13",
        }
    }

    /// Knowledge-base entry explaining how the scheme works.
    pub fn description(&self) -> &'static str {
        match self {
            CipherScheme::Reverse => "The text string has been reversed. Read it backwards.",
            CipherScheme::Caesar => {
                "Characters are shifted down the alphabet. Try shifting them back."
            }
            CipherScheme::Atbash => "Alphabet is mirrored (A=Z, B=Y). Flip the characters.",
            CipherScheme::Base64 => "Standard Base64 encoding. Ends with '=' usually.",
            CipherScheme::Binary => "8-bit ASCII binary representation. 0s and 1s.",
            CipherScheme::Hex => "Hexadecimal ASCII representation. Pairs of hex digits.",
            CipherScheme::Rot13 => "A specific Caesar cipher with a shift of 13 places.",
        }
    }
}

impl fmt::Display for CipherScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const LEVEL_1: &[CipherScheme] = &[CipherScheme::Reverse];
const LEVEL_2: &[CipherScheme] = &[CipherScheme::Reverse, CipherScheme::Caesar];
const LEVEL_3: &[CipherScheme] = &[CipherScheme::Caesar, CipherScheme::Atbash];
const LEVEL_4: &[CipherScheme] = &[CipherScheme::Atbash, CipherScheme::Rot13];
const LEVEL_5: &[CipherScheme] = &[CipherScheme::Rot13, CipherScheme::Base64];
const LEVEL_6: &[CipherScheme] = &[CipherScheme::Base64, CipherScheme::Hex];
const LEVEL_7: &[CipherScheme] = &[CipherScheme::Hex, CipherScheme::Binary];
const LEVEL_8: &[CipherScheme] = &[
    CipherScheme::Binary,
    CipherScheme::Caesar,
    CipherScheme::Reverse,
];
const LEVEL_9: &[CipherScheme] = &[CipherScheme::Base64, CipherScheme::Binary, CipherScheme::Hex];

/// Eligible schemes per difficulty level.
///
/// Index 0 = level 1, index 9 = level 10 (every scheme).
pub const LEVEL_CIPHER_TABLE: [&[CipherScheme]; 10] = [
    LEVEL_1,
    LEVEL_2,
    LEVEL_3,
    LEVEL_4,
    LEVEL_5,
    LEVEL_6,
    LEVEL_7,
    LEVEL_8,
    LEVEL_9,
    &CipherScheme::ALL,
];

/// Clamp a difficulty into `[MIN_DIFFICULTY, MAX_DIFFICULTY]`.
pub fn clamp_difficulty(difficulty: u32) -> u32 {
    difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// Eligible schemes for a difficulty (clamped into the table's range).
///
/// # Examples
///
/// ```
/// use cipher_terminal_types::{eligible_schemes, CipherScheme};
///
/// assert_eq!(eligible_schemes(2), &[CipherScheme::Reverse, CipherScheme::Caesar]);
/// assert_eq!(eligible_schemes(42).len(), 7);
/// ```
pub fn eligible_schemes(difficulty: u32) -> &'static [CipherScheme] {
    LEVEL_CIPHER_TABLE[(clamp_difficulty(difficulty) - 1) as usize]
}

/// Actions that can be applied to a puzzle session
///
/// These are produced by the text input layer and by the runtime's timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Begin the session (first puzzle, full timer)
    Start,
    /// One second elapsed
    Tick,
    /// Submit a decryption attempt
    Guess(String),
    /// Spend score for a hint on the current puzzle
    Hint,
    /// Abandon the current puzzle for a new one
    Skip,
    /// Restart after the countdown expired
    Retry,
}

impl SessionAction {
    /// Parse a command word (case-insensitive). Guesses carry text and are
    /// not produced here.
    ///
    /// # Examples
    ///
    /// ```
    /// use cipher_terminal_types::SessionAction;
    ///
    /// assert_eq!(SessionAction::from_str("HINT"), Some(SessionAction::Hint));
    /// assert_eq!(SessionAction::from_str("retry"), Some(SessionAction::Retry));
    /// assert_eq!(SessionAction::from_str("cyberpunk"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(SessionAction::Start),
            "tick" => Some(SessionAction::Tick),
            "hint" => Some(SessionAction::Hint),
            "skip" => Some(SessionAction::Skip),
            "retry" => Some(SessionAction::Retry),
            _ => None,
        }
    }

    /// Lower-case name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Start => "start",
            SessionAction::Tick => "tick",
            SessionAction::Guess(_) => "guess",
            SessionAction::Hint => "hint",
            SessionAction::Skip => "skip",
            SessionAction::Retry => "retry",
        }
    }
}

/// Category of a session event, as seen by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Correct guess
    Success,
    /// Wrong guess
    Failure,
    /// Countdown reached zero
    TimeExpired,
    /// Hint purchased
    Hint,
    /// Hint refused for lack of score
    HintRejected,
    /// Puzzle skipped
    Skip,
    /// Anything else worth showing (start, retry, custom pool notice)
    Info,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Success => "success",
            EventKind::Failure => "failure",
            EventKind::TimeExpired => "time_expired",
            EventKind::Hint => "hint",
            EventKind::HintRejected => "hint_rejected",
            EventKind::Skip => "skip",
            EventKind::Info => "info",
        }
    }
}
