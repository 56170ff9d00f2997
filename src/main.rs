//! Cipher Terminal runner (default binary).
//!
//! Reads one command or guess per line from stdin and prints each session
//! transition as it happens. Configuration comes from the environment (see
//! [`RuntimeConfig`]); diagnostics go to stderr through `tracing`.

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cipher_terminal::core::{CustomPool, Profile, PuzzleSession, SimpleRng, WordPool};
use cipher_terminal::input::{parse_command, InputCommand, HELP_TEXT};
use cipher_terminal::runtime::{DriverMessage, RuntimeConfig, SessionDriver};
use cipher_terminal::term::LineRenderer;
use cipher_terminal::types::EventKind;

/// Quiet ticks are only drawn in the final seconds.
const COUNTDOWN_WARN_SECS: u32 = 5;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env()?;
    let profile = Profile::login(&config.username)?;

    let mut custom = CustomPool::new();
    if let Some(path) = &config.words_path {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading custom words from {}", path.display()))?;
        let added = custom.ingest(&text);
        if added == 0 {
            warn!(path = %path.display(), "no usable keywords in custom word file");
        } else {
            info!(path = %path.display(), added, "custom signatures ingested");
        }
    }
    let pool = WordPool::with_custom(&custom)?;

    let rng = config
        .seed
        .map(SimpleRng::new)
        .unwrap_or_else(SimpleRng::from_entropy);
    info!(seed = rng.seed(), operative = %profile.username, "connecting");

    let session = PuzzleSession::with_rng(pool, rng);
    let mut renderer = LineRenderer::stdout();
    renderer.draw_log(session.log())?;
    renderer.draw_text(HELP_TEXT)?;

    let mut driver = SessionDriver::spawn(session, profile, config.tick);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => match parse_command(&line) {
                    Some(InputCommand::Action(action)) => driver.send(action).await?,
                    Some(InputCommand::Help) => renderer.draw_text(HELP_TEXT)?,
                    Some(InputCommand::Quit) => break,
                    None => {}
                },
                None => break,
            },
            msg = driver.recv() => match msg {
                Some(msg) => present(&mut renderer, &msg, config.json)?,
                None => break,
            },
        }
    }

    let (snapshot, profile, _log) = driver.shutdown().await?;
    renderer.draw_summary(&profile, &snapshot)?;
    Ok(())
}

fn present<W: Write>(renderer: &mut LineRenderer<W>, msg: &DriverMessage, json: bool) -> Result<()> {
    if json {
        return renderer.draw_text(&message_json(msg)?.to_string());
    }

    match msg {
        DriverMessage::Transition { snapshot, event } => match event {
            Some(event) => {
                renderer.draw_event(event)?;
                renderer.draw_state(snapshot)?;
                if event.kind == EventKind::TimeExpired {
                    renderer.draw_text(&format!(
                        "FINAL SCORE: {} | THREAT LEVEL REACHED: {}",
                        snapshot.score, snapshot.difficulty
                    ))?;
                }
            }
            None if snapshot.time_remaining <= COUNTDOWN_WARN_SECS => {
                renderer.draw_state(snapshot)?;
            }
            None => {}
        },
        DriverMessage::Rejected {
            error,
            event,
            snapshot,
        } => {
            match event {
                Some(event) => renderer.draw_event(event)?,
                None => renderer.draw_text(&format!("> {}", error))?,
            }
            if !snapshot.active() {
                renderer.draw_state(snapshot)?;
            }
        }
        DriverMessage::HighScore { score } => {
            renderer.draw_text(&format!("> NEW HIGH SCORE: {}", score))?;
        }
        DriverMessage::Closed { .. } => {}
    }
    Ok(())
}

fn message_json(msg: &DriverMessage) -> Result<serde_json::Value> {
    let value = match msg {
        DriverMessage::Transition { snapshot, event } => serde_json::json!({
            "type": "transition",
            "event": event,
            "snapshot": snapshot,
        }),
        DriverMessage::Rejected {
            error,
            event,
            snapshot,
        } => serde_json::json!({
            "type": "rejected",
            "error": error.to_string(),
            "event": event,
            "snapshot": snapshot,
        }),
        DriverMessage::HighScore { score } => serde_json::json!({
            "type": "high_score",
            "score": score,
        }),
        DriverMessage::Closed {
            snapshot, profile, ..
        } => serde_json::json!({
            "type": "closed",
            "snapshot": snapshot,
            "profile": serde_json::to_value(profile)?,
        }),
    };
    Ok(value)
}
