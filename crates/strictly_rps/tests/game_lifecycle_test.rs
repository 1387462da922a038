//! Tests for the Idle/Running/Finished game lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use strictly_rps::{ComputerPlayer, Game, Gesture, HumanPlayer, Phase, ScriptedPlayer, SessionError};

#[test]
fn test_lifecycle_transitions() {
    let mut game = Game::new(
        HumanPlayer::new("Alice", || Gesture::Rock),
        ComputerPlayer::default(),
    );
    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.current_session().is_none());

    game.new_session(2).expect("Valid round count");
    assert_eq!(game.phase(), Phase::Running);

    game.play_single_round().expect("First round");
    assert_eq!(game.phase(), Phase::Running);

    game.play_single_round().expect("Second round");
    assert_eq!(game.phase(), Phase::Finished);

    assert_eq!(game.play_single_round(), Err(SessionError::NoActiveSession));
    assert_eq!(game.phase(), Phase::Finished);
}

#[test]
fn test_play_without_session_fails_in_idle() {
    let mut game = Game::new(ComputerPlayer::new("A"), ComputerPlayer::new("B"));
    assert_eq!(game.play_single_round(), Err(SessionError::NoActiveSession));
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn test_sink_receives_start_and_round_messages() {
    let lines = Rc::new(RefCell::new(Vec::<String>::new()));
    let mut game = Game::new(
        HumanPlayer::new("Alice", || Gesture::Paper),
        ComputerPlayer::default(),
    );
    let sink = Rc::clone(&lines);
    game.set_output(move |line| sink.borrow_mut().push(line.to_string()));

    game.new_session(1).expect("Valid round count");
    game.play_single_round().expect("Only round");

    let lines = lines.borrow();
    assert!(lines.len() >= 2);
    assert_eq!(lines[0], "=== New Session (1 rounds) ===");
    assert!(lines[1].starts_with("Round 1: Paper vs "));
}

#[test]
fn test_no_sink_drops_messages() {
    let mut game = Game::new(ComputerPlayer::new("A"), ComputerPlayer::new("B"));
    game.new_session(3).expect("Valid round count");
    while game.phase() == Phase::Running {
        game.play_single_round().expect("Rounds remain");
    }
    assert_eq!(game.current_session().map(|s| s.rounds_played()), Some(3));
}

#[test]
fn test_new_session_replaces_finished_session() {
    let mut game = Game::new(
        ScriptedPlayer::new("Alice", vec![Gesture::Rock, Gesture::Paper])
            .expect("Non-empty script"),
        ScriptedPlayer::fixed("Computer", Gesture::Rock),
    );

    game.new_session(1).expect("Valid round count");
    game.play_single_round().expect("Only round");
    assert_eq!(game.phase(), Phase::Finished);

    game.new_session(4).expect("Valid round count");
    assert_eq!(game.phase(), Phase::Running);

    let session = game.current_session().expect("Session exists");
    assert_eq!(session.rounds_played(), 0);
    assert_eq!(session.total_rounds(), 4);

    // Each session starts from a fresh clone of the player templates.
    let record = game.play_single_round().expect("First round");
    assert_eq!(record.first().gesture(), Gesture::Rock);
}

#[test]
fn test_new_session_mid_session_discards_progress() {
    let mut game = Game::new(ComputerPlayer::new("A"), ComputerPlayer::new("B"));
    game.new_session(5).expect("Valid round count");
    game.play_single_round().expect("First round");
    game.play_single_round().expect("Second round");

    game.new_session(5).expect("Valid round count");
    let session = game.current_session().expect("Session exists");
    assert_eq!(session.rounds_played(), 0);
    assert_eq!(session.first_score() + session.second_score() + session.draws(), 0);
}
