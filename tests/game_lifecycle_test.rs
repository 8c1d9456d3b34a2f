//! Integration tests for the game lifecycle

use std::time::{Duration, Instant};

use tui_flappy::clock::FrameClock;
use tui_flappy::core::{GameState, Gate, ObstacleSet, RecordingHost, Rect, TaskKind};
use tui_flappy::types::{
    Cue, GameAction, Mode, ACTOR_HEIGHT, ACTOR_START_X, ACTOR_START_Y, ACTOR_WIDTH, BOARD_HEIGHT,
    FRAME_MS, OBSTACLE_HEIGHT, OPENING_SPACE,
};

const EPS: f64 = 1e-9;

/// Advance one frame at a time for `ms` milliseconds.
fn run_for(state: &mut GameState, host: &mut RecordingHost, ms: u32) {
    let mut elapsed = 0;
    while elapsed < ms {
        state.advance(FRAME_MS, host);
        elapsed += FRAME_MS;
    }
}

#[test]
fn test_new_game_waits_on_start_screen() {
    let mut state = GameState::new(12345);
    let mut host = RecordingHost::new();

    assert_eq!(state.state(), Mode::NotStarted);
    assert_eq!(state.scheduled_task_count(), 0);
    assert!(!state.input_attached());

    // Nothing moves before start.
    assert_eq!(state.advance(5_000, &mut host), 0);
    assert_eq!(state.actor().y, ACTOR_START_Y);
    assert!(state.obstacles().is_empty());

    state.render(&mut host);
    assert_eq!(host.last_scene.as_ref().map(|s| s.mode), Some(Mode::NotStarted));
}

#[test]
fn test_first_tick_without_input() {
    let mut state = GameState::new(1);
    let mut host = RecordingHost::new();
    state.start();

    state.advance(FRAME_MS, &mut host);

    assert!((state.actor().velocity_y - 0.15).abs() < EPS);
    assert!((state.actor().y - 320.15).abs() < EPS);
    assert_eq!(host.draws, 1);
}

#[test]
fn test_falling_below_the_board_ends_the_game() {
    let mut state = GameState::new(1);
    let mut host = RecordingHost::new();
    state.start();

    // Let it drop to y >= 600 without flapping.
    while state.actor().y < 600.0 {
        state.advance(FRAME_MS, &mut host);
    }
    assert_eq!(state.state(), Mode::Running);

    while state.state() == Mode::Running {
        state.advance(FRAME_MS, &mut host);
    }

    assert_eq!(state.state(), Mode::Over);
    assert!(state.actor().y > BOARD_HEIGHT);
    assert_eq!(state.score(), 0.0);
    assert!(!state.input_attached());
    assert_eq!(state.scheduled_task_count(), 0);
    assert_eq!(host.cues, vec![Cue::Terminal]);

    let last = host.last_scene.clone().unwrap();
    assert_eq!(last.mode, Mode::Over);

    // Frozen: time passes, nothing changes.
    let draws = host.draws;
    let y = state.actor().y;
    state.advance(10_000, &mut host);
    assert_eq!(state.actor().y, y);
    assert_eq!(host.draws, draws);
}

#[test]
fn test_gate_members_are_an_opening_apart() {
    let gate = Gate::with_upper_y(100.0);
    assert_eq!(gate.upper.y, 100.0);
    assert_eq!(gate.lower.y, 772.0);
    assert_eq!(gate.lower.y - gate.upper.y, OBSTACLE_HEIGHT + OPENING_SPACE);
    assert_eq!(gate.opening(), OPENING_SPACE);
}

#[test]
fn test_passed_flips_once_and_scores_on_that_tick() {
    let mut set = ObstacleSet::new();
    set.push(Gate::with_upper_y(-200.0));
    // Actor sitting in the opening (312..472).
    let actor = Rect::new(ACTOR_START_X, 380.0, ACTOR_WIDTH, ACTOR_HEIGHT);

    let mut scored_at = Vec::new();
    for tick in 1..=200 {
        let outcome = set.step(2.0, &actor);
        assert!(!outcome.collided);
        if outcome.passed > 0 {
            // Both members pass together: +0.5 each.
            assert_eq!(outcome.passed, 2);
            scored_at.push(tick);
        }
    }

    // 360 - 2t + 64 < 45  =>  t > 189.5
    assert_eq!(scored_at, vec![190]);
    assert!(set.iter().all(|o| o.passed));
}

#[test]
fn test_double_start_keeps_one_timer_of_each_kind() {
    let mut state = GameState::new(1);
    state.start();
    state.start();

    assert_eq!(state.scheduled_count(TaskKind::Spawn), 1);
    assert_eq!(state.scheduled_count(TaskKind::Animate), 1);
    assert_eq!(state.scheduled_count(TaskKind::Frame), 1);
    assert_eq!(state.scheduled_task_count(), 3);
    assert_eq!(state.games_played(), 2);

    // Only one gate per spawn period.
    let mut host = RecordingHost::new();
    let mut elapsed = 0;
    while elapsed < 1504 {
        if state.actor().y > 400.0 {
            state.on_flap(&mut host);
        }
        state.advance(FRAME_MS, &mut host);
        elapsed += FRAME_MS;
    }
    assert_eq!(state.obstacles().gate_count(), 1);
}

#[test]
fn test_restart_after_game_over() {
    let mut state = GameState::new(7);
    let mut host = RecordingHost::new();
    state.start();
    run_for(&mut state, &mut host, 5_000);
    assert_eq!(state.state(), Mode::Over);

    assert!(!state.apply_action(GameAction::Flap, &mut host));
    assert!(state.apply_action(GameAction::Start, &mut host));

    assert_eq!(state.state(), Mode::Running);
    assert!(state.input_attached());
    assert_eq!(state.actor().y, ACTOR_START_Y);
    assert_eq!(state.actor().velocity_y, 0.0);
    assert_eq!(state.score(), 0.0);
    assert!(state.obstacles().is_empty());
    assert_eq!(state.scheduled_task_count(), 3);
}

#[test]
fn test_flap_cues_and_lift() {
    let mut state = GameState::new(1);
    let mut host = RecordingHost::new();
    state.start();

    assert!(state.on_flap(&mut host));
    state.advance(FRAME_MS, &mut host);
    assert!(state.actor().y < ACTOR_START_Y);
    assert_eq!(host.cues, vec![Cue::Flap]);
}

#[test]
fn test_collision_with_a_real_gate() {
    let mut state = GameState::new(3);
    let mut host = RecordingHost::new();
    state.start();

    // Hover near the top: every opening starts at least 128 units down,
    // so the first gate must be hit.
    while state.state() == Mode::Running {
        if state.actor().y > 20.0 {
            state.on_flap(&mut host);
        }
        state.advance(FRAME_MS, &mut host);
    }

    assert_eq!(state.score(), 0.0);
    assert_eq!(state.obstacles().gate_count(), 1);
    let cues: Vec<Cue> = host
        .cues
        .iter()
        .copied()
        .filter(|c| *c != Cue::Flap)
        .collect();
    assert_eq!(cues, vec![Cue::Collision, Cue::Terminal]);
}

#[test]
fn test_same_seed_same_game() {
    fn play(seed: u64) -> (Vec<f64>, u32) {
        let mut state = GameState::new(seed);
        let mut host = RecordingHost::new();
        state.start();
        let mut ticks = 0;
        while state.state() == Mode::Running && ticks < 2_000 {
            // Stay roughly mid-board.
            if state.actor().y > 330.0 {
                state.on_flap(&mut host);
            }
            state.advance(FRAME_MS, &mut host);
            ticks += 1;
        }
        let ys = state.obstacles().iter().map(|o| o.y).collect();
        (ys, state.half_points())
    }

    assert_eq!(play(99), play(99));
}

#[test]
fn test_first_frame_is_one_period_after_start() {
    let mut state = GameState::new(7);
    let mut host = RecordingHost::new();

    state.start();
    assert_eq!(state.advance(FRAME_MS - 1, &mut host), 0);
    assert_eq!(host.draws, 0);
    assert_eq!(state.actor().y, ACTOR_START_Y);

    assert_eq!(state.advance(1, &mut host), 1);
    assert_eq!(host.draws, 1);
}

#[test]
fn test_idle_time_before_start_is_not_replayed() {
    let mut state = GameState::new(7);
    let mut host = RecordingHost::new();
    let t0 = Instant::now();
    let mut clock = FrameClock::new(t0);

    // 200ms on the start screen, then the Start key.
    let pressed = t0 + Duration::from_millis(200);
    state.advance(clock.take(pressed), &mut host);
    state.start();
    clock.resync(pressed);

    let fired = state.advance(clock.take(pressed + Duration::from_millis(16)), &mut host);
    assert_eq!(fired, 1);
    assert_eq!(host.draws, 1);
    assert!((state.actor().y - (ACTOR_START_Y + 0.15)).abs() < EPS);
}
