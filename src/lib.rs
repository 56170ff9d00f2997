//! Cipher Terminal (workspace facade crate).
//!
//! Exposes `cipher_terminal::{core,input,runtime,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use cipher_terminal_core as core;
pub use cipher_terminal_input as input;
pub use cipher_terminal_runtime as runtime;
pub use cipher_terminal_term as term;
pub use cipher_terminal_types as types;
