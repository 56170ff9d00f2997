//! Scoring module - rewards, penalties, leveling, and the countdown bonus
//!
//! All arithmetic is unsigned and saturating: a penalty can take the score to
//! zero but never below it.

use crate::types::{
    LEVEL_POINTS, MAX_DIFFICULTY, MAX_TIME_SECS, STREAK_PER_LEVEL, STREAK_POINTS,
    TIME_BONUS_SECS, TIME_POINTS,
};

/// Result of a correct guess, computed from the state before the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessReward {
    /// Points awarded for this guess.
    pub points: u32,
    /// Streak after the guess.
    pub streak: u32,
    /// Difficulty after the guess.
    pub difficulty: u32,
    /// Countdown after the time bonus.
    pub time_remaining: u32,
    /// Whether the difficulty went up.
    pub leveled_up: bool,
}

/// Points for a correct guess.
///
/// `difficulty*100 + time_remaining*2 + streak*50`, using the streak from
/// before the guess.
pub fn correct_guess_points(difficulty: u32, time_remaining: u32, streak: u32) -> u32 {
    difficulty
        .saturating_mul(LEVEL_POINTS)
        .saturating_add(time_remaining.saturating_mul(TIME_POINTS))
        .saturating_add(streak.saturating_mul(STREAK_POINTS))
}

/// Difficulty after reaching `new_streak` consecutive correct guesses.
///
/// Steps up by one each time the streak hits a positive multiple of three,
/// stopping at [`MAX_DIFFICULTY`].
pub fn next_difficulty(difficulty: u32, new_streak: u32) -> u32 {
    if difficulty < MAX_DIFFICULTY && new_streak > 0 && new_streak % STREAK_PER_LEVEL == 0 {
        difficulty + 1
    } else {
        difficulty
    }
}

/// Countdown after the correct-guess bonus, capped at [`MAX_TIME_SECS`].
pub fn add_time_bonus(time_remaining: u32) -> u32 {
    time_remaining
        .saturating_add(TIME_BONUS_SECS)
        .min(MAX_TIME_SECS)
}

/// Subtract a penalty, flooring at zero.
pub fn apply_penalty(score: u32, penalty: u32) -> u32 {
    score.saturating_sub(penalty)
}

/// Everything a correct guess changes, in one place.
pub fn reward_correct_guess(difficulty: u32, time_remaining: u32, streak: u32) -> GuessReward {
    let points = correct_guess_points(difficulty, time_remaining, streak);
    let new_streak = streak.saturating_add(1);
    let new_difficulty = next_difficulty(difficulty, new_streak);

    GuessReward {
        points,
        streak: new_streak,
        difficulty: new_difficulty,
        time_remaining: add_time_bonus(time_remaining),
        leveled_up: new_difficulty > difficulty,
    }
}
