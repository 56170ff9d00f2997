//! Terminal presentation module.
//!
//! A line-oriented renderer for the puzzle session: every transition prints
//! the event it produced in its category color, followed by a status line.
//! There is no full-screen redraw, so the output scrolls like a console log.
//!
//! - [`view`] is pure and builds the text
//! - [`renderer`] styles it with `crossterm` and writes it out

pub mod renderer;
pub mod view;

pub use cipher_terminal_core as core;
pub use cipher_terminal_types as types;

pub use renderer::LineRenderer;
pub use view::{event_color, packet_line, status_line, summary_lines};
