//! Operative profile - the one piece of state shared with the session.

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// A signed-in player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub level: u32,
    pub xp: u32,
    pub high_score: u32,
    pub matches_played: u32,
}

impl Profile {
    /// Sign in as `username` (trimmed, upper-cased). A blank name is refused.
    pub fn login(username: &str) -> Result<Self, ProfileError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ProfileError::EmptyUsername);
        }

        Ok(Self {
            username: username.to_uppercase(),
            level: 1,
            xp: 0,
            high_score: 0,
            matches_played: 0,
        })
    }

    /// Store `score` as the new high score if it beats the current one.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_normalizes_name() {
        let p = Profile::login("  neo ").unwrap();
        assert_eq!(p.username, "NEO");
        assert_eq!(p.level, 1);
        assert_eq!(p.xp, 0);
        assert_eq!(p.high_score, 0);
        assert_eq!(p.matches_played, 0);
    }

    #[test]
    fn test_login_requires_name() {
        assert_eq!(Profile::login("   "), Err(ProfileError::EmptyUsername));
    }

    #[test]
    fn test_record_score_only_raises() {
        let mut p = Profile::login("trinity").unwrap();
        assert!(p.record_score(300));
        assert!(!p.record_score(300));
        assert!(!p.record_score(120));
        assert_eq!(p.high_score, 300);
    }
}
