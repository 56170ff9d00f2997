//! Puzzle session module - the interactive game's state machine
//!
//! A [`PuzzleSession`] owns the active puzzle, the countdown, and the
//! score/streak/level economy. Every transition is either a method call or a
//! [`SessionAction`] fed through [`PuzzleSession::apply`] (or the by-value
//! [`reduce`]), so the whole game can be driven and tested without any UI.
//!
//! ```text
//! Idle --start--> Playing --tick (time hits 0)--> Failed
//!                  |  ^                             |
//!                  +--+ guess / hint / skip         +--retry--> Playing
//! ```

use arrayvec::ArrayVec;

use crate::cipher;
use crate::error::CipherError;
use crate::profile::Profile;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{apply_penalty, reward_correct_guess, GuessReward};
use crate::snapshot::{SessionEvent, SessionPhase, SessionSnapshot};
use crate::types::*;
use crate::words::WordPool;

/// One (word, encoded, scheme) triple, generated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    word: String,
    encoded: String,
    scheme: CipherScheme,
    difficulty: u32,
}

impl Puzzle {
    /// Draw a word and an eligible scheme for `difficulty`, then encode.
    pub fn generate<R: RandomSource + ?Sized>(
        pool: &WordPool,
        difficulty: u32,
        rng: &mut R,
    ) -> Self {
        let word = pool.pick(rng).to_string();
        // Every row of the level table is non-empty.
        let schemes = eligible_schemes(difficulty);
        let scheme = schemes[rng.next_range(schemes.len() as u32) as usize];
        let encoded = cipher::encode(&word, scheme, difficulty, rng);

        Self {
            word,
            encoded,
            scheme,
            difficulty,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn scheme(&self) -> CipherScheme {
        self.scheme
    }

    /// Difficulty the puzzle was encoded at.
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Whether `raw` (trimmed, case-insensitive) is the answer.
    pub fn is_solved_by(&self, raw: &str) -> bool {
        normalize_guess(raw) == self.word
    }

    pub fn hint(&self) -> String {
        cipher::hint(&self.word, &self.encoded, self.scheme)
    }
}

/// Trim and upper-case a raw guess.
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// What a submitted guess did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Right answer; a new puzzle is installed.
    Correct(GuessReward),
    /// Wrong answer; the same puzzle stays up.
    Incorrect {
        /// Score actually removed (less than the penalty near zero).
        deducted: u32,
    },
}

/// Single interactive game.
#[derive(Debug, Clone)]
pub struct PuzzleSession<R = SimpleRng> {
    phase: SessionPhase,
    puzzle: Option<Puzzle>,
    difficulty: u32,
    score: u32,
    time_remaining: u32,
    streak: u32,
    hints_used: u32,
    pool: WordPool,
    rng: R,
    /// Most recent first.
    log: ArrayVec<String, LOG_CAPACITY>,
    last_event: Option<SessionEvent>,
    /// High score already handed to the profile for this run.
    settled: bool,
}

impl PuzzleSession<SimpleRng> {
    /// Create a session drawing from `pool` with a seeded RNG.
    pub fn new(pool: WordPool, seed: u32) -> Self {
        Self::with_rng(pool, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> PuzzleSession<R> {
    /// Create a session with an injected random source.
    pub fn with_rng(pool: WordPool, rng: R) -> Self {
        let mut session = Self {
            phase: SessionPhase::Idle,
            puzzle: None,
            difficulty: MIN_DIFFICULTY,
            score: 0,
            time_remaining: INITIAL_TIME_SECS,
            streak: 0,
            hints_used: 0,
            pool,
            rng,
            log: ArrayVec::new(),
            last_event: None,
            settled: false,
        };
        session.push_log("SYSTEM INITIALIZED");
        session.push_log("WAITING FOR INPUT...");
        let custom = session.pool.custom_count();
        if custom > 0 {
            session.push_log(&format!("DETECTED {} CUSTOM SIGNATURES", custom));
        }
        session
    }

    /// Start the session and install the first puzzle.
    ///
    /// Returns `false` if the session was already started.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::Idle {
            return false;
        }

        self.phase = SessionPhase::Playing;
        self.time_remaining = INITIAL_TIME_SECS;
        self.score = 0;
        self.streak = 0;
        self.difficulty = MIN_DIFFICULTY;
        self.new_puzzle(MIN_DIFFICULTY);
        self.emit(EventKind::Info, "DECRYPTION SEQUENCE STARTED");
        true
    }

    /// Replace the current puzzle with a fresh one at `difficulty`.
    ///
    /// Score, streak, countdown, and the session difficulty are untouched.
    pub fn new_puzzle(&mut self, difficulty: u32) {
        let difficulty = difficulty.min(MAX_DIFFICULTY);
        self.puzzle = Some(Puzzle::generate(&self.pool, difficulty, &mut self.rng));
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `true` on the tick that expires the session. No-op unless
    /// playing.
    pub fn tick(&mut self) -> bool {
        if self.phase != SessionPhase::Playing {
            return false;
        }

        if self.time_remaining <= 1 {
            self.time_remaining = 0;
            self.phase = SessionPhase::Failed;
            self.emit(EventKind::TimeExpired, "TIME EXPIRED. CONNECTION TERMINATED.");
            return true;
        }

        self.time_remaining -= 1;
        false
    }

    /// Check a guess against the current word.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, CipherError> {
        if !self.active() {
            return Err(CipherError::SessionInactive);
        }

        let solved = self.puzzle.as_ref().is_some_and(|p| p.is_solved_by(raw));
        if solved {
            let reward = reward_correct_guess(self.difficulty, self.time_remaining, self.streak);
            self.score = self.score.saturating_add(reward.points);
            self.streak = reward.streak;
            self.difficulty = reward.difficulty;
            self.time_remaining = reward.time_remaining;
            self.emit(
                EventKind::Success,
                format!("DECRYPTION SUCCESSFUL. +{} XP", reward.points),
            );
            if reward.leveled_up {
                self.push_log(&format!("THREAT LEVEL {}", self.difficulty));
            }
            self.new_puzzle(self.difficulty);
            Ok(GuessOutcome::Correct(reward))
        } else {
            let before = self.score;
            self.score = apply_penalty(self.score, WRONG_PENALTY);
            self.streak = 0;
            self.emit(
                EventKind::Failure,
                format!("INVALID KEY. PENALTY -{}", WRONG_PENALTY),
            );
            Ok(GuessOutcome::Incorrect {
                deducted: before - self.score,
            })
        }
    }

    /// Buy a hint for the current puzzle.
    ///
    /// Refused with [`CipherError::InsufficientResources`] (score and hint
    /// count unchanged) when the score is below [`HINT_COST`].
    pub fn use_hint(&mut self) -> Result<String, CipherError> {
        if !self.active() {
            return Err(CipherError::SessionInactive);
        }

        if self.score < HINT_COST {
            self.emit(EventKind::HintRejected, "INSUFFICIENT RESOURCES FOR HINT");
            return Err(CipherError::InsufficientResources {
                score: self.score,
                required: HINT_COST,
            });
        }

        let hint = match &self.puzzle {
            Some(puzzle) => puzzle.hint(),
            None => return Err(CipherError::SessionInactive),
        };
        self.score -= HINT_COST;
        self.hints_used += 1;
        self.emit(EventKind::Hint, format!("HINT DEPLOYED. TIP: {}", hint));
        Ok(hint)
    }

    /// Abandon the current puzzle. Returns the score actually deducted.
    pub fn skip(&mut self) -> Result<u32, CipherError> {
        if !self.active() {
            return Err(CipherError::SessionInactive);
        }

        let before = self.score;
        self.score = apply_penalty(self.score, SKIP_PENALTY);
        self.streak = 0;
        self.emit(EventKind::Skip, "PROTOCOL BYPASSED");
        self.new_puzzle(self.difficulty);
        Ok(before - self.score)
    }

    /// Start over after the countdown expired.
    pub fn retry(&mut self) -> Result<(), CipherError> {
        if self.phase != SessionPhase::Failed {
            return Err(CipherError::InvalidTransition {
                action: "retry",
                phase: self.phase.as_str(),
            });
        }

        self.score = 0;
        self.difficulty = MIN_DIFFICULTY;
        self.streak = 0;
        self.time_remaining = INITIAL_TIME_SECS;
        self.phase = SessionPhase::Playing;
        self.settled = false;
        self.new_puzzle(MIN_DIFFICULTY);
        self.emit(EventKind::Info, "CONNECTION RE-ESTABLISHED");
        Ok(())
    }

    /// Apply one action and return the event it produced.
    ///
    /// `Ok(None)` means a quiet transition (a tick that only decremented the
    /// countdown). On `Err`, any event the action produced (such as a
    /// rejected hint) is still available from [`take_last_event`].
    ///
    /// [`take_last_event`]: PuzzleSession::take_last_event
    pub fn apply(&mut self, action: SessionAction) -> Result<Option<SessionEvent>, CipherError> {
        self.last_event = None;

        match action {
            SessionAction::Start => {
                if !self.start() {
                    return Err(CipherError::InvalidTransition {
                        action: "start",
                        phase: self.phase.as_str(),
                    });
                }
            }
            SessionAction::Tick => {
                if !self.active() {
                    return Err(CipherError::SessionInactive);
                }
                self.tick();
            }
            SessionAction::Guess(raw) => {
                self.submit_guess(&raw)?;
            }
            SessionAction::Hint => {
                self.use_hint()?;
            }
            SessionAction::Skip => {
                self.skip()?;
            }
            SessionAction::Retry => self.retry()?,
        }

        Ok(self.last_event.take())
    }

    /// Promote the score to the profile's high score, at most once per run.
    ///
    /// Call when the session fails and again when it is exited; only the
    /// first call after each start or retry has any effect. Returns the new
    /// high score if it was raised.
    pub fn settle_high_score(&mut self, profile: &mut Profile) -> Option<u32> {
        if self.settled || self.phase == SessionPhase::Idle {
            return None;
        }
        self.settled = true;

        if profile.record_score(self.score) {
            self.push_log("NEW HIGH SCORE");
            Some(self.score)
        } else {
            None
        }
    }

    /// Take and clear the last event.
    pub fn take_last_event(&mut self) -> Option<SessionEvent> {
        self.last_event.take()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether input is currently accepted.
    pub fn active(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn failed(&self) -> bool {
        self.phase == SessionPhase::Failed
    }

    pub fn settled(&self) -> bool {
        self.settled
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Event log, most recent first, `> ` prefixed.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.phase = self.phase;
        out.encoded.clear();
        if let Some(puzzle) = &self.puzzle {
            out.encoded.push_str(&puzzle.encoded);
        }
        out.scheme = self.puzzle.as_ref().map(|p| p.scheme);
        out.score = self.score;
        out.time_remaining = self.time_remaining;
        out.difficulty = self.difficulty;
        out.streak = self.streak;
        out.hints_used = self.hints_used;
        out.custom_words = self.pool.custom_count();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn emit(&mut self, kind: EventKind, message: impl Into<String>) {
        let event = SessionEvent::new(kind, message);
        self.push_log(&event.message);
        self.last_event = Some(event);
    }

    fn push_log(&mut self, message: &str) {
        if self.log.is_full() {
            self.log.pop();
        }
        self.log.insert(0, format!("> {}", message));
    }
}

/// By-value reducer: `(session, action) -> (session', result)`.
pub fn reduce<R: RandomSource>(
    mut session: PuzzleSession<R>,
    action: SessionAction,
) -> (PuzzleSession<R>, Result<Option<SessionEvent>, CipherError>) {
    let result = session.apply(action);
    (session, result)
}
