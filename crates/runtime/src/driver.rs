//! Session driver: one session on a tokio task, fed by a ticker and a
//! command channel.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::core::{
    CipherError, Profile, PuzzleSession, RandomSource, SessionEvent, SessionPhase,
    SessionSnapshot,
};
use crate::error::RuntimeError;
use crate::types::SessionAction;

const MAX_PENDING_COMMANDS: usize = 32;

/// Command delivered to the driver task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCommand {
    Action(SessionAction),
    /// Settle the high score and stop.
    Exit,
}

/// Message from the driver task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverMessage {
    /// The session changed. `event` is `None` for a quiet tick.
    Transition {
        snapshot: SessionSnapshot,
        event: Option<SessionEvent>,
    },
    /// An action was refused; state is unchanged apart from `event`.
    Rejected {
        error: CipherError,
        event: Option<SessionEvent>,
        snapshot: SessionSnapshot,
    },
    /// The profile's high score was raised.
    HighScore { score: u32 },
    /// Last message before the task ends.
    Closed {
        snapshot: SessionSnapshot,
        profile: Profile,
        log: Vec<String>,
    },
}

/// Handle to a running session task.
pub struct SessionDriver {
    cmd_tx: mpsc::Sender<DriverCommand>,
    msg_rx: mpsc::UnboundedReceiver<DriverMessage>,
    task: JoinHandle<()>,
}

impl SessionDriver {
    /// Start `session` (if idle) on a new task, ticking every `tick`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<R>(session: PuzzleSession<R>, profile: Profile, tick: Duration) -> Self
    where
        R: RandomSource + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel(MAX_PENDING_COMMANDS);
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(run_session(session, profile, tick, cmd_rx, msg_tx));

        Self {
            cmd_tx,
            msg_rx,
            task,
        }
    }

    pub async fn send(&self, action: SessionAction) -> Result<(), RuntimeError> {
        self.cmd_tx
            .send(DriverCommand::Action(action))
            .await
            .map_err(|_| RuntimeError::DriverClosed)
    }

    /// Next message, or `None` once the task has ended.
    pub async fn recv(&mut self) -> Option<DriverMessage> {
        self.msg_rx.recv().await
    }

    /// Stop the task and return the final snapshot and profile.
    pub async fn shutdown(mut self) -> Result<(SessionSnapshot, Profile, Vec<String>), RuntimeError> {
        // If the task already ended, Closed is still queued.
        let _ = self.cmd_tx.send(DriverCommand::Exit).await;

        let mut closed = None;
        while let Some(msg) = self.msg_rx.recv().await {
            if let DriverMessage::Closed {
                snapshot,
                profile,
                log,
            } = msg
            {
                closed = Some((snapshot, profile, log));
            }
        }
        let _ = self.task.await;
        closed.ok_or(RuntimeError::DriverClosed)
    }
}

fn new_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(t) => {
            t.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

async fn run_session<R: RandomSource>(
    mut session: PuzzleSession<R>,
    mut profile: Profile,
    tick: Duration,
    mut cmd_rx: mpsc::Receiver<DriverCommand>,
    msg_tx: mpsc::UnboundedSender<DriverMessage>,
) {
    if session.phase() == SessionPhase::Idle {
        let event = session.apply(SessionAction::Start).ok().flatten();
        let _ = msg_tx.send(DriverMessage::Transition {
            snapshot: session.snapshot(),
            event,
        });
    }
    info!(
        operative = %profile.username,
        words = session.pool().len(),
        custom = session.pool().custom_count(),
        "session started"
    );

    let mut ticker = session.active().then(|| new_ticker(tick));

    loop {
        let action = tokio::select! {
            cmd = cmd_rx.recv() => match cmd {
                Some(DriverCommand::Action(action)) => action,
                Some(DriverCommand::Exit) | None => break,
            },
            _ = next_tick(&mut ticker) => SessionAction::Tick,
        };

        let was_active = session.active();
        debug!(action = action.as_str(), "apply");

        match session.apply(action) {
            Ok(event) => {
                let _ = msg_tx.send(DriverMessage::Transition {
                    snapshot: session.snapshot(),
                    event,
                });
            }
            Err(error) => {
                if matches!(error, CipherError::InsufficientResources { .. }) {
                    warn!(%error, "hint rejected");
                } else {
                    debug!(%error, "action rejected");
                }
                let _ = msg_tx.send(DriverMessage::Rejected {
                    error,
                    event: session.take_last_event(),
                    snapshot: session.snapshot(),
                });
            }
        }

        if was_active && session.failed() {
            ticker = None;
            info!(score = session.score(), "connection terminated");
            settle(&mut session, &mut profile, &msg_tx);
        } else if !was_active && session.active() {
            info!("connection re-established");
            ticker = Some(new_ticker(tick));
        }
    }

    settle(&mut session, &mut profile, &msg_tx);
    info!(
        score = session.score(),
        high_score = profile.high_score,
        "session closed"
    );
    let _ = msg_tx.send(DriverMessage::Closed {
        snapshot: session.snapshot(),
        profile,
        log: session.log().to_vec(),
    });
}

fn settle<R: RandomSource>(
    session: &mut PuzzleSession<R>,
    profile: &mut Profile,
    msg_tx: &mpsc::UnboundedSender<DriverMessage>,
) {
    if let Some(score) = session.settle_high_score(profile) {
        info!(score, "new high score");
        let _ = msg_tx.send(DriverMessage::HighScore { score });
    }
}
