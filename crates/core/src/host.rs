//! Host boundary - what the core calls out to
//!
//! The core never draws or plays sounds itself. It hands a [`GameSnapshot`]
//! to [`Host::draw`] once per rendered frame and signals discrete [`Cue`]s to
//! [`Host::cue`]. Implementations own pixels, glyphs and audio.

use crate::snapshot::GameSnapshot;
use crate::types::Cue;

pub trait Host {
    /// Draw one frame.
    fn draw(&mut self, scene: &GameSnapshot);

    /// Audio trigger. Ignored by default.
    fn cue(&mut self, _cue: Cue) {}
}

/// A host that discards everything (benchmarks, headless runs).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl Host for NullHost {
    fn draw(&mut self, _scene: &GameSnapshot) {}
}

/// A host that remembers what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub draws: usize,
    pub last_scene: Option<GameSnapshot>,
    pub cues: Vec<Cue>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }
}

impl Host for RecordingHost {
    fn draw(&mut self, scene: &GameSnapshot) {
        self.draws += 1;
        match self.last_scene.as_mut() {
            Some(last) => last.clone_from(scene),
            None => self.last_scene = Some(scene.clone()),
        }
    }

    fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
