use bingo::{
    Board, BoardError, Difficulty, GameSession, GameStatus, Mark, Mode, MoveError, NumberSet,
    Side, TurnState,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn sequential_board() -> Board {
    Board::from_numbers(core::array::from_fn(|i| i as u8 + 1)).unwrap()
}

/// 21..25 on the main diagonal, 1..20 everywhere else in order.
fn diagonal_board() -> Board {
    Board::from_numbers([
        21, 1, 2, 3, 4, //
        5, 22, 6, 7, 8, //
        9, 10, 23, 11, 12, //
        13, 14, 15, 24, 16, //
        17, 18, 19, 20, 25,
    ])
    .unwrap()
}

/// Computer card that reaches three lines once 1..20 are called.
fn three_line_board() -> Board {
    Board::from_numbers([
        22, 1, 2, 3, 4, //
        5, 23, 6, 7, 8, //
        9, 10, 11, 12, 13, //
        14, 15, 16, 24, 17, //
        18, 19, 20, 21, 25,
    ])
    .unwrap()
}

fn set(numbers: &[u8]) -> NumberSet {
    NumberSet::from_numbers(numbers).unwrap()
}

fn first_numbers(n: u8) -> NumberSet {
    set(&(1..=n).collect::<Vec<_>>())
}

#[test]
fn test_new_session_waits_for_player() {
    let mut rng = SmallRng::seed_from_u64(1);
    let session = GameSession::vs_computer(&mut rng, Difficulty::Medium);
    assert_eq!(session.mode(), Mode::VsComputer);
    assert_eq!(session.turn(), TurnState::PlayerTurn);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.difficulty(), Difficulty::Medium);
    assert!(session.marked().is_empty());
    assert_eq!(session.player_lines(), 0);
    assert_eq!(session.computer_lines(), Some(0));
    assert_ne!(Some(session.player_board()), session.computer_board());
}

#[test]
fn test_solo_has_no_computer() {
    let mut rng = SmallRng::seed_from_u64(2);
    let session = GameSession::solo(&mut rng);
    assert_eq!(session.mode(), Mode::Solo);
    assert!(session.computer_board().is_none());
    assert_eq!(session.computer_lines(), None);
}

#[test]
fn test_human_move_hands_turn_to_computer() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut session = GameSession::vs_computer(&mut rng, Difficulty::Easy);
    let report = session.apply_human_move(7).unwrap();
    assert_eq!(report.mark, Some(Mark { number: 7, by: Side::Player }));
    assert_eq!(report.status, GameStatus::InProgress);
    assert!(report.pending.is_some());
    assert_eq!(session.turn(), TurnState::ComputerThinking);
    assert!(session.marked().contains(7));

    let err = session.apply_human_move(8).unwrap_err();
    assert_eq!(err, MoveError::NotPlayerTurn);
    assert!(!session.marked().contains(8));

    let reply = session
        .apply_computer_move(report.pending.unwrap(), &mut rng)
        .unwrap();
    let mark = reply.mark.unwrap();
    assert_eq!(mark.by, Side::Computer);
    assert_ne!(mark.number, 7);
    assert!(reply.pending.is_none());
    assert_eq!(session.turn(), TurnState::PlayerTurn);
    assert_eq!(session.marked().len(), 2);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_rejected_moves_leave_state_alone() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut session = GameSession::solo(&mut rng);
    assert_eq!(session.apply_human_move(0), Err(MoveError::OutOfRange(0)));
    assert_eq!(session.apply_human_move(26), Err(MoveError::OutOfRange(26)));
    session.apply_human_move(12).unwrap();
    assert_eq!(session.apply_human_move(12), Err(MoveError::AlreadyMarked(12)));
    assert_eq!(session.marked(), set(&[12]));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_solo_never_issues_tickets() {
    let mut session = GameSession::new(sequential_board(), None, Difficulty::Easy);
    for n in 1..=25 {
        let report = session.apply_human_move(n).unwrap();
        assert!(report.pending.is_none());
        assert_eq!(report.computer_lines, None);
        if session.is_over() {
            break;
        }
        assert_eq!(session.turn(), TurnState::PlayerTurn);
    }
    assert_eq!(session.winner(), Some(Side::Player));
    assert_eq!(session.player_lines(), 5);
    // rows 0-3 plus column 0 and the anti-diagonal arrive with 21
    assert_eq!(session.marked().len(), 21);
}

#[test]
fn test_player_wins_on_human_move() {
    let mut session = GameSession::resume(
        sequential_board(),
        Some(three_line_board()),
        Difficulty::Hard,
        first_numbers(20),
    );
    assert_eq!(session.player_lines(), 4);
    assert_eq!(session.computer_lines(), Some(3));
    assert!(!session.is_over());

    let report = session.apply_human_move(21).unwrap();
    assert_eq!(report.status, GameStatus::Won(Side::Player));
    assert_eq!(report.player_lines, 5);
    assert_eq!(report.computer_lines, Some(3));
    assert!(report.pending.is_none());
    assert_eq!(session.turn(), TurnState::GameOver);
    assert_eq!(session.apply_human_move(22), Err(MoveError::GameOver));
}

#[test]
fn test_computer_wins_on_its_move() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut session = GameSession::resume(
        diagonal_board(),
        Some(sequential_board()),
        Difficulty::Medium,
        first_numbers(19),
    );
    let report = session.apply_human_move(20).unwrap();
    assert_eq!(report.status, GameStatus::InProgress);
    assert!(report.player_lines <= 3);

    let reply = session
        .apply_computer_move(report.pending.unwrap(), &mut rng)
        .unwrap();
    let mark = reply.mark.unwrap();
    assert!((21..=25).contains(&mark.number));
    assert_eq!(reply.status, GameStatus::Won(Side::Computer));
    assert_eq!(reply.computer_lines, Some(5));
    assert!(reply.player_lines < 5);
    assert_eq!(session.turn(), TurnState::GameOver);
}

#[test]
fn test_simultaneous_bingo_goes_to_player() {
    let session = GameSession::resume(
        sequential_board(),
        Some(sequential_board()),
        Difficulty::Easy,
        first_numbers(21),
    );
    assert_eq!(session.player_lines(), 5);
    assert_eq!(session.computer_lines(), Some(5));
    assert_eq!(session.status(), GameStatus::Won(Side::Player));
    assert_eq!(session.turn(), TurnState::GameOver);
}

#[test]
fn test_restart_invalidates_pending_move() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut session = GameSession::vs_computer(&mut rng, Difficulty::Hard);
    let old_player = *session.player_board();
    let ticket = session.apply_human_move(5).unwrap().pending.unwrap();

    session.restart(&mut rng);
    assert_eq!(session.turn(), TurnState::PlayerTurn);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.marked().is_empty());
    assert!(session.history().is_empty());
    assert_ne!(*session.player_board(), old_player);

    assert_eq!(
        session.apply_computer_move(ticket, &mut rng),
        Err(MoveError::StaleMove)
    );
    assert!(session.marked().is_empty());
    assert_eq!(session.turn(), TurnState::PlayerTurn);
}

#[test]
fn test_ticket_from_another_session_is_refused() {
    let mut rng = SmallRng::seed_from_u64(14);
    let mut old = GameSession::vs_computer(&mut rng, Difficulty::Easy);
    let stale = old.apply_human_move(1).unwrap().pending.unwrap();

    let mut fresh = GameSession::vs_computer(&mut rng, Difficulty::Easy);
    let own = fresh.apply_human_move(2).unwrap().pending.unwrap();

    assert_eq!(
        fresh.apply_computer_move(stale, &mut rng),
        Err(MoveError::StaleMove)
    );
    assert_eq!(fresh.marked(), set(&[2]));
    assert_eq!(fresh.turn(), TurnState::ComputerThinking);

    let reply = fresh.apply_computer_move(own, &mut rng).unwrap();
    assert_eq!(reply.mark.unwrap().by, Side::Computer);
    assert_eq!(fresh.turn(), TurnState::PlayerTurn);
}

#[test]
fn test_restart_keeps_solo_mode() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut session = GameSession::solo(&mut rng);
    session.apply_human_move(3).unwrap();
    session.restart(&mut rng);
    assert_eq!(session.mode(), Mode::Solo);
    assert!(session.marked().is_empty());
}

#[test]
fn test_restart_custom_uses_new_card() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut session = GameSession::vs_computer(&mut rng, Difficulty::Easy);
    session.apply_human_move(1).unwrap();
    session.restart_custom(diagonal_board(), &mut rng);
    assert_eq!(*session.player_board(), diagonal_board());
    assert!(session.computer_board().is_some());
    assert!(session.marked().is_empty());
}

#[test]
fn test_custom_requires_valid_card() {
    let mut rng = SmallRng::seed_from_u64(10);
    let mut inputs: Vec<String> = (1..=25).rev().map(|n: u8| n.to_string()).collect();
    let session = GameSession::custom(&inputs, &mut rng, Difficulty::Hard).unwrap();
    assert_eq!(session.player_board().get(0, 0), Some(25));
    assert_eq!(session.difficulty(), Difficulty::Hard);
    assert_eq!(session.mode(), Mode::VsComputer);

    inputs[3] = "25".to_string();
    assert!(matches!(
        GameSession::custom(&inputs, &mut rng, Difficulty::Hard),
        Err(BoardError::DuplicateValue { value: 25 })
    ));
}

#[test]
fn test_ticket_is_single_use() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut session = GameSession::vs_computer(&mut rng, Difficulty::Easy);
    let ticket = session.apply_human_move(9).unwrap().pending.unwrap();
    session.apply_computer_move(ticket, &mut rng).unwrap();
    // a second computer move would need another ticket from a human move
    assert_eq!(session.turn(), TurnState::PlayerTurn);
}

#[test]
fn test_difficulty_locked_mid_game() {
    let mut rng = SmallRng::seed_from_u64(12);
    let mut session = GameSession::vs_computer(&mut rng, Difficulty::Easy);
    session.set_difficulty(Difficulty::Hard).unwrap();
    assert_eq!(session.difficulty(), Difficulty::Hard);

    let ticket = session.apply_human_move(4).unwrap().pending.unwrap();
    assert_eq!(
        session.set_difficulty(Difficulty::Easy),
        Err(MoveError::DifficultyLocked)
    );
    assert_eq!(session.difficulty(), Difficulty::Hard);
    let _ = session.apply_computer_move(ticket, &mut rng).unwrap();

    session.restart(&mut rng);
    session.set_difficulty(Difficulty::Medium).unwrap();
    assert_eq!(session.difficulty(), Difficulty::Medium);
}

#[test]
fn test_difficulty_unlocked_after_game_over() {
    let mut session = GameSession::resume(
        sequential_board(),
        Some(sequential_board()),
        Difficulty::Easy,
        first_numbers(21),
    );
    assert!(session.is_over());
    session.set_difficulty(Difficulty::Hard).unwrap();
    assert_eq!(session.difficulty(), Difficulty::Hard);
}

#[test]
fn test_snapshot_matches_session() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut session = GameSession::vs_computer(&mut rng, Difficulty::Medium);
    let ticket = session.apply_human_move(10).unwrap().pending.unwrap();
    let view = session.snapshot();
    assert_eq!(view.mode, Mode::VsComputer);
    assert_eq!(view.turn, TurnState::ComputerThinking);
    assert_eq!(view.marked, set(&[10]));
    assert_eq!(view.history, vec![Mark { number: 10, by: Side::Player }]);
    assert_eq!(view.player_board, *session.player_board());
    assert_eq!(view.computer_board.as_ref(), session.computer_board());
    drop(ticket);
}

#[test]
fn test_full_game_always_finishes() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut human = SmallRng::seed_from_u64(seed ^ 0xb1b0);
        let mut session = GameSession::vs_computer(&mut rng, Difficulty::Hard);
        while !session.is_over() {
            let n = bingo::select_move(
                &mut human,
                session.player_board(),
                None,
                session.marked(),
                Difficulty::Easy,
            )
            .unwrap();
            let report = session.apply_human_move(n).unwrap();
            if let Some(ticket) = report.pending {
                session.apply_computer_move(ticket, &mut rng).unwrap();
            }
        }
        assert!(session.marked().len() <= 25);
        assert_eq!(session.turn(), TurnState::GameOver);
        let lines = match session.winner().unwrap() {
            Side::Player => session.player_lines(),
            Side::Computer => session.computer_lines().unwrap(),
        };
        assert_eq!(lines, 5);
    }
}
