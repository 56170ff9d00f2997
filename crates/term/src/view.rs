//! View: maps a `core::SessionSnapshot` into lines of text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::{Profile, SessionPhase, SessionSnapshot};
use crate::types::EventKind;

/// Color for an event category.
pub fn event_color(kind: EventKind) -> Color {
    match kind {
        EventKind::Success => Color::Green,
        EventKind::Failure | EventKind::TimeExpired => Color::Red,
        EventKind::Hint => Color::Cyan,
        EventKind::HintRejected | EventKind::Skip => Color::Yellow,
        EventKind::Info => Color::DarkGreen,
    }
}

/// Counters line, e.g. `[THREAT 2 | SCORE 220 | STREAK 1 | T-75s]`.
pub fn status_line(snap: &SessionSnapshot) -> String {
    let mut line = format!(
        "[THREAT {} | SCORE {} | STREAK {} | T-{}s",
        snap.difficulty, snap.score, snap.streak, snap.time_remaining
    );
    if snap.hints_used > 0 {
        line.push_str(&format!(" | HINTS {}", snap.hints_used));
    }
    if snap.custom_words > 0 {
        line.push_str(&format!(" | SIGS {}", snap.custom_words));
    }
    line.push(']');
    line
}

/// The intercepted packet, or what to do when there is none.
pub fn packet_line(snap: &SessionSnapshot) -> String {
    match (snap.phase, snap.scheme) {
        (SessionPhase::Playing, Some(scheme)) => {
            format!("PACKET [{}] :: {}", scheme, snap.encoded)
        }
        (SessionPhase::Failed, _) => "CONNECTION LOST. /retry TO RECONNECT".to_string(),
        _ => "NO SIGNAL".to_string(),
    }
}

/// End-of-run summary.
pub fn summary_lines(profile: &Profile, snap: &SessionSnapshot) -> Vec<String> {
    vec![
        format!("OPERATIVE: {}", profile.username),
        format!("FINAL SCORE: {}", snap.score),
        format!("THREAT LEVEL REACHED: {}", snap.difficulty),
        format!("HIGH SCORE: {}", profile.high_score),
    ]
}
