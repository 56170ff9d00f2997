//! Runtime module - drives a puzzle session in real time
//!
//! The core session never looks at a clock. This crate owns one session on a
//! tokio task and feeds it two streams:
//!
//! 1. **Ticks**: one [`SessionAction::Tick`](crate::types::SessionAction) per
//!    configured period while the session is playing
//! 2. **Commands**: actions sent through [`SessionDriver::send`]
//!
//! Every transition comes back as a [`DriverMessage`] carrying a fresh
//! snapshot, so the presentation layer never touches the session directly.
//!
//! # Environment Variables
//!
//! - `CIPHER_TERMINAL_SEED`: RNG seed (default: from entropy)
//! - `CIPHER_TERMINAL_WORDS`: text file to mine for custom keywords
//! - `CIPHER_TERMINAL_USER`: operative name (default: "GUEST")
//! - `CIPHER_TERMINAL_JSON`: set to "1" or "true" to print snapshots as JSON
//! - `CIPHER_TERMINAL_TICK_MS`: countdown period in ms (default: 1000)

pub mod config;
pub mod driver;
pub mod error;

pub use cipher_terminal_core as core;
pub use cipher_terminal_types as types;

pub use config::RuntimeConfig;
pub use driver::{DriverCommand, DriverMessage, SessionDriver};
pub use error::RuntimeError;
