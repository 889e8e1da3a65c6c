//! Tests for the game session state machine.

use noughts::{Cell, GameSession, GameStatus, Mark, RejectedMove};

/// Plays a scripted sequence of moves, asserting each is accepted.
fn play(moves: &[usize]) -> GameSession {
    let mut session = GameSession::new();
    for &index in moves {
        assert!(
            session.apply_move(index),
            "move at {index} should be accepted"
        );
    }
    session
}

#[test]
fn test_x_wins_left_column() {
    // X,O,X,O,X at 0,1,3,4,6 -> X O _ / X O _ / X _ _
    let session = play(&[0, 1, 3, 4, 6]);
    assert_eq!(session.status(), &GameStatus::Won(Mark::X, [0, 3, 6]));
    assert_eq!(session.winning_line(), Some([0, 3, 6]));
}

#[test]
fn test_o_wins_middle_row() {
    let session = play(&[0, 3, 1, 4, 8, 5]);
    assert_eq!(session.status(), &GameStatus::Won(Mark::O, [3, 4, 5]));
    assert_eq!(session.winning_line(), Some([3, 4, 5]));
}

#[test]
fn test_filling_the_board_without_a_line_is_a_draw() {
    let session = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(session.status(), &GameStatus::Draw);
    assert_eq!(session.winning_line(), None);
    assert!(session.board().is_full());
}

#[test]
fn test_winning_move_on_the_last_cell_is_a_win_not_a_draw() {
    // The ninth move fills the board and completes the top row.
    let session = play(&[5, 3, 6, 4, 0, 7, 1, 8, 2]);
    assert!(session.board().is_full());
    assert_eq!(session.status(), &GameStatus::Won(Mark::X, [0, 1, 2]));
}

#[test]
fn test_move_on_occupied_cell_is_a_no_op() {
    let mut session = GameSession::new();
    assert!(session.apply_move(4));
    let before = session.clone();

    assert!(!session.apply_move(4));
    assert_eq!(session, before);
    assert_eq!(session.validate_move(4), Err(RejectedMove::Occupied(4)));
}

#[test]
fn test_move_out_of_range_is_a_no_op() {
    let mut session = GameSession::new();
    let before = session.clone();

    assert!(!session.apply_move(9));
    assert_eq!(session, before);
    assert_eq!(session.validate_move(9), Err(RejectedMove::OutOfRange(9)));
}

#[test]
fn test_finished_game_ignores_further_moves() {
    let mut session = play(&[0, 1, 3, 4, 6]);
    let before = session.clone();

    assert!(!session.apply_move(8));
    assert_eq!(session, before);
    assert_eq!(session.validate_move(8), Err(RejectedMove::GameOver));
}

#[test]
fn test_draw_also_ignores_further_moves() {
    let mut session = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = session.clone();

    assert!(!session.apply_move(0));
    assert_eq!(session, before);
}

#[test]
fn test_reset_restores_the_initial_session() {
    let mut session = play(&[0, 1, 3, 4, 6]);
    session.reset();

    assert_eq!(session, GameSession::new());
    assert_eq!(session.status(), &GameStatus::InProgress);
    assert_eq!(session.next_mark(), Mark::X);
    assert!(session.board().cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_reset_mid_game() {
    let mut session = play(&[4, 0]);
    session.reset();
    assert_eq!(session, GameSession::new());
}

#[test]
fn test_mark_counts_stay_balanced() {
    let mut session = GameSession::new();
    for &index in &[4, 0, 8, 2, 6, 7, 5] {
        let x = session.board().mark_count(Mark::X);
        let o = session.board().mark_count(Mark::O);
        let expected = match session.next_mark() {
            Mark::X => 0,
            Mark::O => 1,
        };
        assert_eq!(x - o, expected);
        assert!(session.apply_move(index));
    }
}

#[test]
fn test_no_winner_in_any_four_move_opening() {
    // A line needs three of one mark; legal alternation cannot get
    // there before the fifth move.
    for a in 0..9 {
        for b in (0..9).filter(|&b| b != a) {
            for c in (0..9).filter(|&c| c != a && c != b) {
                for d in (0..9).filter(|&d| d != a && d != b && d != c) {
                    let session = play(&[a, b, c, d]);
                    assert_eq!(
                        session.status(),
                        &GameStatus::InProgress,
                        "opening {a},{b},{c},{d} should not finish the game"
                    );
                }
            }
        }
    }
}

#[test]
fn test_status_reads_are_idempotent() {
    let session = play(&[0, 1, 3, 4, 6]);
    let first = *session.status();
    let second = *session.status();
    assert_eq!(first, second);
    assert_eq!(session.winning_line(), session.winning_line());
}

#[test]
fn test_session_survives_json_round_trip() {
    let session = play(&[0, 1, 3, 4]);
    let json = serde_json::to_string(&session).unwrap();
    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}
