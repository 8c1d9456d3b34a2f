//! TerminalHost: the [`Host`] the binary hands to the game.
//!
//! Drawing happens inside the game's tick, which cannot fail, so the first
//! I/O error is kept here and surfaced by [`TerminalHost::take_error`] on the
//! next turn of the run loop.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{GameSnapshot, Host};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::Cue;

pub struct TerminalHost<W: Write = io::Stdout> {
    view: GameView,
    renderer: TerminalRenderer<W>,
    fb: FrameBuffer,
    viewport: Viewport,
    bell: bool,
    frames: u64,
    error: Option<anyhow::Error>,
}

impl TerminalHost<io::Stdout> {
    pub fn new(viewport: Viewport, bell: bool) -> Self {
        Self::with_renderer(TerminalRenderer::new(), viewport, bell)
    }
}

impl<W: Write> TerminalHost<W> {
    pub fn with_renderer(renderer: TerminalRenderer<W>, viewport: Viewport, bell: bool) -> Self {
        Self {
            view: GameView::default(),
            renderer,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            bell,
            frames: 0,
            error: None,
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// New terminal size: the next draw repaints everything.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.renderer.invalidate();
    }

    /// Return (and clear) the first output error since the last call.
    pub fn take_error(&mut self) -> Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record(&mut self, result: Result<()>) {
        if let Err(err) = result {
            log::error!("terminal output failed: {err:#}");
            self.error.get_or_insert(err);
        }
    }
}

impl<W: Write> Host for TerminalHost<W> {
    fn draw(&mut self, scene: &GameSnapshot) {
        self.view.render_into(scene, self.viewport, &mut self.fb);
        let result = self.renderer.draw_swap(&mut self.fb);
        self.record(result);
        self.frames += 1;
    }

    fn cue(&mut self, cue: Cue) {
        log::debug!("cue {}", cue.as_str());
        if cue == Cue::Terminal && self.bell {
            let result = self.renderer.bell();
            self.record(result);
        }
    }
}
