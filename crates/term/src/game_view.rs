//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! The board is 360x640 world units. Each terminal column covers `unit_w`
//! units and each row `unit_h` units; the default 10x20 compensates for the
//! usual 1:2 glyph aspect ratio and gives a 36x32 playfield.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Rect};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Mode, ACTOR_FRAMES, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Glyph shown at the actor's leading column for each animation frame.
const ACTOR_GLYPHS: [char; ACTOR_FRAMES as usize] = ['^', '-', 'v', '-'];

const SKY: Rgb = Rgb::new(20, 30, 50);
const OBSTACLE_FG: Rgb = Rgb::new(90, 200, 90);
const ACTOR_FG: Rgb = Rgb::new(250, 210, 60);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// World units per terminal column.
    unit_w: f64,
    /// World units per terminal row.
    unit_h: f64,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(10.0, 20.0)
    }
}

impl GameView {
    pub fn new(unit_w: f64, unit_h: f64) -> Self {
        Self {
            unit_w: unit_w.max(1.0),
            unit_h: unit_h.max(1.0),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Playfield size in cells, excluding the border.
    pub fn playfield_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH / self.unit_w).ceil() as u16,
            (BOARD_HEIGHT / self.unit_h).ceil() as u16,
        )
    }

    /// Column and row span `[start, end)` covered by a world rectangle,
    /// clipped to the playfield. `None` if nothing is visible.
    pub fn cell_span(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let (cols, rows) = self.playfield_size();
        let (x0, x1) = span(rect.x, rect.right(), self.unit_w, cols)?;
        let (y0, y1) = span(rect.y, rect.bottom(), self.unit_h, rows)?;
        Some((x0, x1, y0, y1))
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only
    /// reallocated when the viewport size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (cols, rows) = self.playfield_size();
        let frame_w = cols + 2;
        let frame_h = rows + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let origin = (start_x + 1, start_y + 1);

        fb.fill_rect(origin.0, origin.1, cols, rows, ' ', CellStyle::new(SKY, SKY));

        for obstacle in &snap.obstacles {
            let mut style = CellStyle::new(OBSTACLE_FG, SKY);
            if obstacle.passed {
                style = style.dim();
            }
            self.fill_world_rect(fb, origin, &obstacle.rect, '█', style);
        }

        if snap.mode != Mode::NotStarted {
            self.draw_actor(fb, origin, snap);
        }

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        match snap.mode {
            Mode::NotStarted => self.draw_start_screen(fb, origin, cols, rows),
            Mode::Running => {
                let score = CellStyle::new(Rgb::new(255, 255, 255), SKY).bold();
                fb.put_str(origin.0 + 1, origin.1, &snap.score.to_string(), score);
            }
            Mode::Over => self.draw_over_screen(fb, origin, cols, rows, snap),
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_world_rect(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        rect: &Rect,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((x0, x1, y0, y1)) = self.cell_span(rect) {
            fb.fill_rect(origin.0 + x0, origin.1 + y0, x1 - x0, y1 - y0, ch, style);
        }
    }

    fn draw_actor(&self, fb: &mut FrameBuffer, origin: (u16, u16), snap: &GameSnapshot) {
        let style = CellStyle::new(ACTOR_FG, SKY).bold();
        self.fill_world_rect(fb, origin, &snap.actor, '█', style);

        if let Some((x0, _, y0, _)) = self.cell_span(&snap.actor) {
            let glyph = ACTOR_GLYPHS[usize::from(snap.actor_frame % ACTOR_FRAMES)];
            fb.put_char(origin.0 + x0, origin.1 + y0, glyph, style);
        }
    }

    fn draw_start_screen(&self, fb: &mut FrameBuffer, origin: (u16, u16), cols: u16, rows: u16) {
        let title = CellStyle::new(ACTOR_FG, SKY).bold();
        let hint = CellStyle::new(Rgb::new(200, 200, 200), SKY);
        let mid = origin.1 + rows / 2;

        fb.put_str_centered(origin.0, cols, mid.saturating_sub(3), "FLAPPY", title);
        fb.put_str_centered(origin.0, cols, mid.saturating_sub(1), "Space/Up: flap", hint);
        fb.put_str_centered(origin.0, cols, mid, "Enter: start", hint);
        fb.put_str_centered(origin.0, cols, mid + 1, "q: quit", hint);
    }

    fn draw_over_screen(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        cols: u16,
        rows: u16,
        snap: &GameSnapshot,
    ) {
        let title = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let hint = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let mid = origin.1 + rows / 2;

        let summary = format!("Score: {}", snap.score);
        fb.put_str_centered(origin.0, cols, mid.saturating_sub(1), "GAME OVER", title);
        fb.put_str_centered(origin.0, cols, mid, &summary, hint);
        fb.put_str_centered(origin.0, cols, mid + 2, "Enter: play again", hint);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_str(panel_x, y + 1, &snap.score.to_string(), value);
        y += 3;

        fb.put_str(panel_x, y, "GAME", label);
        fb.put_str(panel_x, y + 1, &snap.games_played.to_string(), value);
        y += 3;

        fb.put_str(panel_x, y, "SEED", label);
        fb.put_str(panel_x, y + 1, &snap.seed.to_string(), value);
    }
}

/// Cell range `[start, end)` covering world interval `[lo, hi)`, clipped to `0..max`.
fn span(lo: f64, hi: f64, unit: f64, max: u16) -> Option<(u16, u16)> {
    let a = (lo / unit).floor().max(0.0);
    let b = (hi / unit).ceil().min(f64::from(max));
    if b <= a {
        return None;
    }
    Some((a as u16, b as u16))
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
