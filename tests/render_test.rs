use cipher_terminal::core::{Profile, PuzzleSession, SessionEvent, WordPool};
use cipher_terminal::term::{status_line, LineRenderer};
use cipher_terminal::types::{EventKind, SessionAction};

fn render<F>(draw: F) -> String
where
    F: FnOnce(&mut LineRenderer<Vec<u8>>),
{
    let mut renderer = LineRenderer::new(Vec::new());
    draw(&mut renderer);
    String::from_utf8(renderer.into_inner()).unwrap()
}

#[test]
fn test_render_live_session() {
    let mut session = PuzzleSession::new(WordPool::default(), 12345);
    let event = session.apply(SessionAction::Start).unwrap().unwrap();
    let snapshot = session.snapshot();

    let out = render(|r| {
        r.draw_event(&event).unwrap();
        r.draw_state(&snapshot).unwrap();
    });

    assert!(out.contains(&event.message));
    assert!(out.contains(&format!("PACKET [REVERSE] :: {}", snapshot.encoded)));
    assert!(out.contains(&status_line(&snapshot)));
    // The answer never reaches the screen.
    let word = session.puzzle().unwrap().word();
    assert!(!out.contains(&format!(":: {}\u{1b}", word)));
}

#[test]
fn test_render_initial_log() {
    let session = PuzzleSession::new(WordPool::default(), 1);
    let out = render(|r| r.draw_log(session.log()).unwrap());
    let init = out.find("> SYSTEM INITIALIZED").unwrap();
    let wait = out.find("> WAITING FOR INPUT...").unwrap();
    assert!(init < wait);
}

#[test]
fn test_render_summary() {
    let mut profile = Profile::login("neo").unwrap();
    let mut session = PuzzleSession::new(WordPool::default(), 3);
    session.start();
    let word = session.puzzle().unwrap().word().to_string();
    session.submit_guess(&word).unwrap();
    session.settle_high_score(&mut profile);

    let out = render(|r| r.draw_summary(&profile, &session.snapshot()).unwrap());
    assert!(out.contains("OPERATIVE: NEO"));
    assert!(out.contains(&format!("HIGH SCORE: {}", session.score())));
}

#[test]
fn test_render_rejection() {
    let event = SessionEvent::new(EventKind::HintRejected, "INSUFFICIENT RESOURCES FOR HINT");
    let out = render(|r| r.draw_event(&event).unwrap());
    assert!(out.contains("> INSUFFICIENT RESOURCES FOR HINT"));
}
