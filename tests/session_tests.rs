//! End-to-end game scenarios driven through commands, the way the shell
//! drives a real session.

use blockfall::core::{GameSession, SequenceRng, SessionEvent};
use blockfall::types::{GameCommand, Phase, BOARD_WIDTH};

/// Session whose every draw is an O piece in cyan.
fn o_session() -> GameSession<SequenceRng> {
    GameSession::with_rng(SequenceRng::new([1, 0]))
}

/// Session whose every draw is a T piece in cyan.
fn t_session() -> GameSession<SequenceRng> {
    GameSession::with_rng(SequenceRng::new([0, 0]))
}

/// Walk the active piece from the spawn column to `target_x`, then slam it.
fn drop_at(session: &mut GameSession<SequenceRng>, target_x: i8) {
    let spawn_x = session.active().map(|piece| piece.x).unwrap_or(0);
    let dx = target_x - spawn_x;
    let (command, steps) = if dx < 0 {
        (GameCommand::MoveLeft, -dx)
    } else {
        (GameCommand::MoveRight, dx)
    };
    for _ in 0..steps {
        session.apply(command);
    }
    session.apply(GameCommand::HardDrop);
}

/// One wave of six O pieces tiling the bottom two rows edge to edge.
fn drop_o_wave(session: &mut GameSession<SequenceRng>) {
    for target in [0, 2, 4, 6, 8, 10] {
        drop_at(session, target);
    }
}

#[test]
fn test_lifecycle_from_idle_through_game_over_and_back() {
    let mut session = t_session();
    assert_eq!(session.phase(), Phase::Idle);

    session.apply(GameCommand::Start);
    assert_eq!(session.phase(), Phase::Running);
    assert!(session.active().is_some());
    assert!(session.preview().is_some());

    // Straight-down drops stack one column region until the well tops out.
    for _ in 0..20 {
        if session.phase() == Phase::GameOver {
            break;
        }
        session.apply(GameCommand::HardDrop);
    }
    assert_eq!(session.phase(), Phase::GameOver);

    session.apply(GameCommand::Start);
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.score(), 0);
    assert!(session.board().cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_six_o_pieces_clear_the_bottom_two_rows() {
    let mut session = o_session();
    session.apply(GameCommand::Start);
    session.take_events();

    drop_o_wave(&mut session);

    assert_eq!(session.score(), 20);
    assert_eq!(session.level(), 1);
    assert!(session.board().cells().iter().all(|cell| cell.is_none()));

    let events = session.take_events();
    let locks = events
        .iter()
        .filter(|event| matches!(event, SessionEvent::Locked))
        .count();
    assert_eq!(locks, 6);

    let clears: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            SessionEvent::RowsCleared { rows } => Some(rows.as_slice().to_vec()),
            _ => None,
        })
        .collect();
    assert_eq!(clears, vec![vec![19, 19]]);
}

#[test]
fn test_forty_points_reach_level_two_and_speed_up_gravity() {
    let mut session = o_session();
    session.apply(GameCommand::Start);

    drop_o_wave(&mut session);
    assert_eq!(session.level(), 1);
    assert_eq!(session.fall_interval_ms(), 1000);

    drop_o_wave(&mut session);
    assert_eq!(session.score(), 40);
    assert_eq!(session.level(), 2);
    assert_eq!(session.fall_interval_ms(), 900);

    // Gravity now fires just past 900 ms, not at it.
    assert!(!session.tick(900));
    assert!(session.tick(1));
}

#[test]
fn test_soft_drops_walk_the_piece_to_a_lock() {
    let mut session = o_session();
    session.apply(GameCommand::Start);

    for _ in 0..18 {
        session.apply(GameCommand::SoftDrop);
    }
    assert_eq!(session.active().map(|piece| piece.y), Some(18));

    // The next one locks and hands over to a fresh piece at the top.
    session.apply(GameCommand::SoftDrop);
    assert_eq!(session.active().map(|piece| piece.y), Some(0));
    let occupied = session
        .board()
        .cells()
        .iter()
        .filter(|cell| cell.is_some())
        .count();
    assert_eq!(occupied, 4);
}

#[test]
fn test_manual_drops_and_the_gravity_counter() {
    let mut session = t_session();
    session.apply(GameCommand::Start);

    session.tick(700);
    assert_eq!(session.drop_counter_ms(), 700);

    // A soft drop restarts the countdown toward the next automatic step.
    session.apply(GameCommand::SoftDrop);
    assert_eq!(session.drop_counter_ms(), 0);

    // A hard drop does not touch it.
    session.tick(500);
    session.apply(GameCommand::HardDrop);
    assert_eq!(session.drop_counter_ms(), 500);
}

#[test]
fn test_pause_gates_movement_but_not_rotation_or_slams() {
    let mut session = t_session();
    session.apply(GameCommand::Start);
    session.apply(GameCommand::TogglePause);
    assert_eq!(session.phase(), Phase::Paused);

    let x_before = session.active().map(|piece| piece.x);
    session.apply(GameCommand::MoveLeft);
    session.apply(GameCommand::SoftDrop);
    assert_eq!(session.active().map(|piece| piece.x), x_before);
    assert_eq!(session.active().map(|piece| piece.y), Some(0));
    assert!(!session.tick(10_000));

    // Rotation and the slam still respond while paused.
    assert!(session.apply(GameCommand::RotateCw));
    assert!(session.apply(GameCommand::HardDrop));
    assert_eq!(session.phase(), Phase::Paused);
    assert!(session.board().cells().iter().any(|cell| cell.is_some()));

    session.apply(GameCommand::TogglePause);
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn test_rotation_kicks_away_from_the_left_wall() {
    let mut session = t_session();
    session.apply(GameCommand::Start);

    // East-form T parks at x = -1 because its left matrix column is empty.
    session.apply(GameCommand::RotateCw);
    for _ in 0..6 {
        session.apply(GameCommand::MoveLeft);
    }
    assert_eq!(session.active().map(|piece| piece.x), Some(-1));

    // Rotating against the wall succeeds one column to the right.
    assert!(session.apply(GameCommand::RotateCw));
    assert_eq!(session.active().map(|piece| piece.x), Some(0));
    assert_eq!(session.active().map(|piece| piece.y), Some(0));
}

#[test]
fn test_game_over_fires_exactly_once_and_freezes_input() {
    let mut session = t_session();
    session.apply(GameCommand::Start);

    let mut game_overs = 0;
    for _ in 0..20 {
        session.apply(GameCommand::HardDrop);
        game_overs += session
            .take_events()
            .iter()
            .filter(|event| matches!(event, SessionEvent::GameOver))
            .count();
        if session.phase() == Phase::GameOver {
            break;
        }
    }
    assert_eq!(game_overs, 1);

    let score = session.score();
    session.apply(GameCommand::MoveLeft);
    session.apply(GameCommand::RotateCw);
    session.apply(GameCommand::HardDrop);
    session.apply(GameCommand::SoftDrop);
    assert!(session.take_events().is_empty());
    assert_eq!(session.score(), score);
    assert_eq!(session.phase(), Phase::GameOver);
}

#[test]
fn test_same_seed_replays_the_same_game() {
    let script = [
        GameCommand::MoveLeft,
        GameCommand::MoveLeft,
        GameCommand::RotateCw,
        GameCommand::HardDrop,
        GameCommand::MoveRight,
        GameCommand::SoftDrop,
        GameCommand::TogglePause,
        GameCommand::RotateCw,
        GameCommand::TogglePause,
        GameCommand::HardDrop,
        GameCommand::RotateCw,
        GameCommand::MoveRight,
        GameCommand::HardDrop,
    ];

    let mut a = GameSession::new(2024);
    let mut b = GameSession::new(2024);
    a.start();
    b.start();
    for command in script {
        a.apply(command);
        b.apply(command);
        a.tick(120);
        b.tick(120);
    }

    assert_eq!(a.board(), b.board());
    assert_eq!(a.score(), b.score());
    assert_eq!(a.level(), b.level());
    assert_eq!(a.active(), b.active());
    assert_eq!(a.preview(), b.preview());
    assert_eq!(a.phase(), b.phase());
}

#[test]
fn test_different_seeds_produce_different_openers() {
    let mut a = GameSession::new(1);
    let mut b = GameSession::new(2);
    a.start();
    b.start();
    assert_ne!(
        a.active().map(|piece| piece.kind),
        b.active().map(|piece| piece.kind)
    );
}

#[test]
fn test_score_never_decreases_across_a_long_game() {
    let mut session = GameSession::new(99);
    session.start();

    let mut last_score = 0;
    let commands = [
        GameCommand::MoveLeft,
        GameCommand::RotateCw,
        GameCommand::MoveRight,
        GameCommand::MoveRight,
        GameCommand::HardDrop,
        GameCommand::MoveLeft,
        GameCommand::SoftDrop,
        GameCommand::HardDrop,
    ];
    for i in 0..200 {
        if session.phase() == Phase::GameOver {
            break;
        }
        session.apply(commands[i % commands.len()]);
        session.tick(60);
        assert!(session.score() >= last_score);
        last_score = session.score();
    }
}

#[test]
fn test_moves_stop_at_the_walls_under_command_spam() {
    let mut session = o_session();
    session.apply(GameCommand::Start);

    for _ in 0..40 {
        session.apply(GameCommand::MoveLeft);
    }
    assert_eq!(session.active().map(|piece| piece.x), Some(0));

    for _ in 0..40 {
        session.apply(GameCommand::MoveRight);
    }
    assert_eq!(
        session.active().map(|piece| piece.x),
        Some((BOARD_WIDTH - 2) as i8)
    );
}
