//! Environment configuration.
//!
//! Read once at start-up, the way the runtime reads everything else: parse
//! what is set, fall back to defaults for what is not.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::RuntimeError;

/// Operative name when `CIPHER_TERMINAL_USER` is unset.
pub const DEFAULT_USERNAME: &str = "GUEST";
/// Countdown period when `CIPHER_TERMINAL_TICK_MS` is unset.
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Runtime settings for the binary and the session driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// RNG seed (`CIPHER_TERMINAL_SEED`). `None` means seed from entropy.
    pub seed: Option<u32>,
    /// Text file mined for custom keywords (`CIPHER_TERMINAL_WORDS`).
    pub words_path: Option<PathBuf>,
    /// Name passed to `Profile::login` (`CIPHER_TERMINAL_USER`).
    pub username: String,
    /// Print transitions as JSON lines (`CIPHER_TERMINAL_JSON`).
    pub json: bool,
    /// One countdown second (`CIPHER_TERMINAL_TICK_MS`).
    pub tick: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            words_path: None,
            username: DEFAULT_USERNAME.to_string(),
            json: false,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl RuntimeConfig {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, RuntimeError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable lookup. Unset and blank variables take their
    /// defaults; set but malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RuntimeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match get("CIPHER_TERMINAL_SEED") {
            Some(s) => Some(s.parse().map_err(|_| RuntimeError::InvalidConfig {
                var: "CIPHER_TERMINAL_SEED",
                value: s,
            })?),
            None => None,
        };

        let tick_ms = match get("CIPHER_TERMINAL_TICK_MS") {
            Some(s) => match s.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    return Err(RuntimeError::InvalidConfig {
                        var: "CIPHER_TERMINAL_TICK_MS",
                        value: s,
                    })
                }
            },
            None => DEFAULT_TICK_MS,
        };

        let json = get("CIPHER_TERMINAL_JSON")
            .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            seed,
            words_path: get("CIPHER_TERMINAL_WORDS").map(PathBuf::from),
            username: get("CIPHER_TERMINAL_USER").unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            json,
            tick: Duration::from_millis(tick_ms),
        })
    }
}
