//! Snapshot module - the read-only view of a session
//!
//! [`SessionSnapshot`] and [`SessionEvent`] are what leaves the core after a
//! transition. Both serialize with serde for the JSON output mode.

use serde::{Deserialize, Serialize};

use crate::types::{CipherScheme, EventKind, INITIAL_TIME_SECS, MIN_DIFFICULTY};

/// Lifecycle phase of a puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Created, not yet started.
    Idle,
    /// Accepting guesses; the countdown is running.
    Playing,
    /// Countdown expired. Only retry leaves this phase.
    Failed,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Playing => "playing",
            SessionPhase::Failed => "failed",
        }
    }
}

/// One line for the presentation layer, tagged with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub kind: EventKind,
    pub message: String,
}

impl SessionEvent {
    pub fn new(kind: EventKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Everything a UI needs to draw the session after a transition.
///
/// The plaintext word is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub encoded: String,
    pub scheme: Option<CipherScheme>,
    pub score: u32,
    pub time_remaining: u32,
    pub difficulty: u32,
    pub streak: u32,
    pub hints_used: u32,
    /// Custom words in the selection pool.
    pub custom_words: usize,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.phase = SessionPhase::Idle;
        self.encoded.clear();
        self.scheme = None;
        self.score = 0;
        self.time_remaining = INITIAL_TIME_SECS;
        self.difficulty = MIN_DIFFICULTY;
        self.streak = 0;
        self.hints_used = 0;
        self.custom_words = 0;
    }

    pub fn active(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn failed(&self) -> bool {
        self.phase == SessionPhase::Failed
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let mut s = Self {
            phase: SessionPhase::Idle,
            encoded: String::new(),
            scheme: None,
            score: 0,
            time_remaining: 0,
            difficulty: 0,
            streak: 0,
            hints_used: 0,
            custom_words: 0,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fresh_session() {
        let snap = SessionSnapshot::default();
        assert_eq!(snap.phase, SessionPhase::Idle);
        assert_eq!(snap.time_remaining, INITIAL_TIME_SECS);
        assert_eq!(snap.difficulty, MIN_DIFFICULTY);
        assert!(!snap.active());
        assert!(!snap.failed());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut snap = SessionSnapshot::default();
        snap.phase = SessionPhase::Playing;
        snap.scheme = Some(CipherScheme::Hex);
        snap.encoded = "41".into();

        let v: serde_json::Value = serde_json::to_value(&snap).unwrap();
        assert_eq!(v["phase"], "playing");
        assert_eq!(v["scheme"], "HEX");
        assert_eq!(v["encoded"], "41");
        assert!(v.get("word").is_none());
    }

    #[test]
    fn test_event_json_shape() {
        let event = SessionEvent::new(EventKind::TimeExpired, "TIME EXPIRED.");
        let v: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(v["kind"], "time_expired");
    }
}
