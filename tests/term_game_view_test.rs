use tui_flappy::core::{GameSnapshot, GameState, ObstacleSnapshot, Rect, Score};
use tui_flappy::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_flappy::types::{Mode, OBSTACLE_HEIGHT, OBSTACLE_WIDTH};

// Default view: 36x32 playfield plus border => 38x34.
const FRAME: Viewport = Viewport {
    width: 38,
    height: 34,
};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn running_snapshot() -> GameSnapshot {
    let mut state = GameState::new(1);
    state.start();
    state.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, FRAME);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(37, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 33).unwrap().ch, '└');
    assert_eq!(fb.get(37, 33).unwrap().ch, '┘');
}

#[test]
fn term_view_start_screen_shows_prompts_only() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, FRAME);
    let text = screen_text(&fb);

    assert!(text.contains("FLAPPY"));
    assert!(text.contains("Enter: start"));
    assert!(!text.contains('█'));
}

#[test]
fn term_view_draws_actor_with_frame_glyph() {
    let snap = running_snapshot();
    let fb = GameView::default().render(&snap, FRAME);

    // Actor (45, 320, 34x24) covers columns 4..8 and rows 16..18; origin (1, 1).
    assert_eq!(fb.get(5, 17).unwrap().ch, '^');
    assert_eq!(fb.get(6, 17).unwrap().ch, '█');
    assert_eq!(fb.get(8, 18).unwrap().ch, '█');
    assert_eq!(fb.get(9, 17).unwrap().ch, ' ');

    let mut next = snap.clone();
    next.actor_frame = 2;
    let fb = GameView::default().render(&next, FRAME);
    assert_eq!(fb.get(5, 17).unwrap().ch, 'v');
}

#[test]
fn term_view_draws_score_top_left_while_running() {
    let mut snap = running_snapshot();
    snap.score = Score(5);
    let fb = GameView::default().render(&snap, FRAME);

    assert!(fb.row_text(1).starts_with("│ 2.5"));
}

#[test]
fn term_view_score_text_follows_each_frame() {
    let view = GameView::default();
    let wide = Viewport::new(70, 34);
    let mut fb = FrameBuffer::new(wide.width, wide.height);

    let mut snap = running_snapshot();
    snap.score = Score(23);
    view.render_into(&snap, wide, &mut fb);
    assert!(screen_text(&fb).contains("11.5"));

    // A shorter score in the same buffer leaves nothing behind.
    snap.score = Score(4);
    view.render_into(&snap, wide, &mut fb);
    let text = screen_text(&fb);
    assert!(!text.contains("11.5"));
    assert!(text.contains("│ 2 "));

    snap.mode = Mode::Over;
    view.render_into(&snap, wide, &mut fb);
    assert!(screen_text(&fb).contains("Score: 2"));
}

#[test]
fn term_view_clips_obstacles_to_the_playfield() {
    let mut snap = running_snapshot();
    snap.obstacles.push(ObstacleSnapshot {
        rect: Rect::new(100.0, -200.0, OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        upper: true,
        passed: false,
    });
    snap.obstacles.push(ObstacleSnapshot {
        rect: Rect::new(100.0, 472.0, OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        upper: false,
        passed: false,
    });
    // Entirely off the left edge.
    snap.obstacles.push(ObstacleSnapshot {
        rect: Rect::new(-70.0, -200.0, OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        upper: true,
        passed: true,
    });

    let fb = GameView::default().render(&snap, FRAME);

    // Upper covers rows 0..16, lower rows 23..32, columns 10..17.
    assert_eq!(fb.get(11, 1).unwrap().ch, '█');
    assert_eq!(fb.get(17, 16).unwrap().ch, '█');
    assert_eq!(fb.get(11, 17).unwrap().ch, ' ');
    assert_eq!(fb.get(11, 24).unwrap().ch, '█');
    assert_eq!(fb.get(18, 5).unwrap().ch, ' ');
    // Bottom border untouched.
    assert_eq!(fb.get(11, 33).unwrap().ch, '─');
}

#[test]
fn term_view_over_screen_shows_final_score() {
    let mut snap = running_snapshot();
    snap.mode = Mode::Over;
    snap.score = Score(3);
    let fb = GameView::default().render(&snap, FRAME);
    let text = screen_text(&fb);

    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Score: 1.5"));
    // The frozen frame still shows the actor.
    assert!(text.contains('█'));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = running_snapshot();
    snap.seed = 4242;
    let fb = GameView::default().render(&snap, Viewport::new(70, 34));
    let text = screen_text(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("SEED"));
    assert!(text.contains("4242"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(38, 40));
    assert_eq!(fb.get(0, 3).unwrap().ch, '┌');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(38, 40));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_survives_tiny_viewports() {
    let snap = running_snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}
