use std::time::Duration;

use cipher_terminal::core::{CustomPool, Profile, PuzzleSession, WordPool};
use cipher_terminal::input::{parse_command, InputCommand};
use cipher_terminal::runtime::{DriverMessage, SessionDriver};
use cipher_terminal::types::{EventKind, SessionAction};

fn single_word_session(word: &str) -> PuzzleSession {
    let pool = WordPool::from_parts(&[word], &CustomPool::new()).unwrap();
    PuzzleSession::new(pool, 42)
}

async fn next_event(driver: &mut SessionDriver) -> DriverMessage {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(600), driver.recv())
            .await
            .expect("timeout waiting for message")
            .expect("driver closed");
        if !matches!(msg, DriverMessage::Transition { event: None, .. }) {
            return msg;
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_typed_lines_drive_session() {
    let profile = Profile::login("cypher").unwrap();
    let mut driver = SessionDriver::spawn(
        single_word_session("KERNEL"),
        profile,
        Duration::from_secs(1),
    );
    next_event(&mut driver).await;

    for line in ["wrong", "/skip", "Kernel"] {
        let Some(InputCommand::Action(action)) = parse_command(line) else {
            panic!("{} is not an action", line);
        };
        driver.send(action).await.unwrap();
    }

    let kinds: Vec<EventKind> = {
        let mut kinds = Vec::new();
        for _ in 0..3 {
            match next_event(&mut driver).await {
                DriverMessage::Transition {
                    event: Some(event), ..
                } => kinds.push(event.kind),
                other => panic!("unexpected {:?}", other),
            }
        }
        kinds
    };
    assert_eq!(kinds, vec![EventKind::Failure, EventKind::Skip, EventKind::Success]);

    let (snapshot, profile, _) = driver.shutdown().await.unwrap();
    assert_eq!(snapshot.streak, 1);
    assert_eq!(profile.high_score, snapshot.score);
}

#[tokio::test(start_paused = true)]
async fn test_high_score_reported_on_failure() {
    let profile = Profile::login("cypher").unwrap();
    let mut driver = SessionDriver::spawn(
        single_word_session("KERNEL"),
        profile,
        Duration::from_millis(100),
    );
    next_event(&mut driver).await;

    driver.send(SessionAction::Guess("kernel".into())).await.unwrap();
    let scored = match next_event(&mut driver).await {
        DriverMessage::Transition { snapshot, .. } => snapshot.score,
        other => panic!("unexpected {:?}", other),
    };

    match next_event(&mut driver).await {
        DriverMessage::Transition {
            event: Some(event),
            snapshot,
        } => {
            assert_eq!(event.kind, EventKind::TimeExpired);
            assert!(snapshot.failed());
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(
        next_event(&mut driver).await,
        DriverMessage::HighScore { score: scored }
    );

    // Input while failed is refused without touching state.
    driver.send(SessionAction::Guess("kernel".into())).await.unwrap();
    match next_event(&mut driver).await {
        DriverMessage::Rejected { snapshot, .. } => assert_eq!(snapshot.score, scored),
        other => panic!("unexpected {:?}", other),
    }

    // Exiting after failure does not settle twice.
    let (_, profile, log) = driver.shutdown().await.unwrap();
    assert_eq!(profile.high_score, scored);
    assert_eq!(log.iter().filter(|l| *l == "> NEW HIGH SCORE").count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_without_input() {
    let profile = Profile::login("cypher").unwrap();
    let driver = SessionDriver::spawn(
        single_word_session("KERNEL"),
        profile,
        Duration::from_secs(1),
    );
    let (snapshot, _, _) = driver.shutdown().await.unwrap();
    assert!(snapshot.active());
    assert_eq!(snapshot.score, 0);
}
