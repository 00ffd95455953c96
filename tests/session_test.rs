//! Tests for session turn handling and scoring.

use gridlock::{
    BoardSize, Coord, GameMode, GameOutcome, GameSession, GameSettings, Mark, SessionError, Turn,
};

fn versus(size: BoardSize, mark: Mark) -> GameSettings {
    GameSettings::new(size, GameMode::VersusComputer, mark)
}

/// Plays the first empty cell until the game ends; returns the final outcome.
fn play_out(session: &mut GameSession) -> GameOutcome {
    while session.awaiting_human() {
        let coord = session.board().vacancies()[0];
        session.play(coord).expect("vacant cell on an unfinished board");
    }
    session.outcome()
}

#[test]
fn test_computer_blocks_human_threat() {
    let mut session = GameSession::start(versus(BoardSize::Three, Mark::X));
    // Nothing is decided within three plies of this opening, so the
    // computer takes the first empty cell.
    let turn = session.play(Coord::new(0, 0)).unwrap();
    assert_eq!(
        turn,
        Turn::Moved {
            reply: Some(Coord::new(0, 1)),
            outcome: GameOutcome::InProgress
        }
    );

    // X threatens the left column; O must answer at (2, 0).
    let turn = session.play(Coord::new(1, 0)).unwrap();
    let Turn::Moved { reply, outcome } = turn else {
        panic!("expected a move");
    };
    assert_eq!(reply, Some(Coord::new(2, 0)));
    assert_eq!(outcome, GameOutcome::InProgress);
}

#[test]
fn test_scoreboard_counts_each_game_once() {
    let mut session = GameSession::start(versus(BoardSize::Three, Mark::X));
    let outcome = play_out(&mut session);
    assert!(outcome.is_terminal());
    assert_eq!(session.scoreboard().games(), 1);

    // Further attempts are rejected and do not touch the score.
    let err = session.play(Coord::new(0, 0)).unwrap_err();
    assert!(matches!(err, SessionError::GameOver(_)));
    assert_eq!(session.scoreboard().games(), 1);

    session.new_game();
    play_out(&mut session);
    assert_eq!(session.scoreboard().games(), 2);
}

#[test]
fn test_computer_never_loses_first_cell_strategy() {
    // Playing the first empty cell every turn is easy to beat.
    let mut session = GameSession::start(versus(BoardSize::Three, Mark::O));
    let outcome = play_out(&mut session);
    assert_ne!(outcome, GameOutcome::Won(Mark::O));
    assert_eq!(*session.scoreboard().player_wins(), 0);
}

#[test]
fn test_history_alternates_marks() {
    let mut session = GameSession::start(versus(BoardSize::Three, Mark::O));
    play_out(&mut session);
    let history = session.history();
    assert_eq!(history[0].mark, Mark::X);
    for pair in history.windows(2) {
        assert_eq!(pair[1].mark, pair[0].mark.opponent());
    }
}
