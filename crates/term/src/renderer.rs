//! LineRenderer: writes styled session output to any `Write`.
//!
//! Commands are queued into an internal buffer and flushed once per call, so
//! a transition reaches the terminal as a single write.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::{Profile, SessionEvent, SessionSnapshot};
use crate::view::{event_color, packet_line, status_line, summary_lines};

pub struct LineRenderer<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl LineRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(1024),
        }
    }

    /// One event in its category color.
    pub fn draw_event(&mut self, event: &SessionEvent) -> Result<()> {
        self.buf.clear();
        queue_line(&mut self.buf, event_color(event.kind), &format!("> {}", event.message))?;
        self.flush_buf()
    }

    /// Packet and counters for the current state.
    pub fn draw_state(&mut self, snap: &SessionSnapshot) -> Result<()> {
        self.buf.clear();
        queue_line(&mut self.buf, Color::Green, &packet_line(snap))?;
        queue_line(&mut self.buf, Color::DarkGrey, &status_line(snap))?;
        self.flush_buf()
    }

    /// Event log lines as kept by the session (newest first).
    pub fn draw_log(&mut self, lines: &[String]) -> Result<()> {
        self.buf.clear();
        for line in lines.iter().rev() {
            queue_line(&mut self.buf, Color::DarkGreen, line)?;
        }
        self.flush_buf()
    }

    /// Plain informational text.
    pub fn draw_text(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        for line in text.lines() {
            queue_line(&mut self.buf, Color::Grey, line)?;
        }
        self.flush_buf()
    }

    pub fn draw_summary(&mut self, profile: &Profile, snap: &SessionSnapshot) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Bold))?;
        for line in summary_lines(profile, snap) {
            queue_line(&mut self.buf, Color::Green, &line)?;
        }
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

fn queue_line(buf: &mut Vec<u8>, color: Color, text: &str) -> Result<()> {
    buf.queue(SetForegroundColor(color))?;
    buf.queue(Print(text))?;
    buf.queue(ResetColor)?;
    buf.queue(Print("\r\n"))?;
    Ok(())
}
