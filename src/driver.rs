//! Frame scheduler
//!
//! Stands in for the display's animation callback: while active and the game
//! is running, every frame advances the simulation and then renders. The
//! driver switches itself off as soon as the game leaves `Running` (pause,
//! lost life, game over, win), so a halted game costs nothing per frame.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::game::Game;
use crate::sim::GamePhase;

/// Scheduler handle owned by the presentation side
#[derive(Debug, Default)]
pub struct FrameDriver {
    active: bool,
    accumulator: f32,
    /// Frames rendered since creation
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin scheduling frames. Returns false if already active.
    pub fn start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.accumulator = 0.0;
        log::debug!("Frame driver started");
        true
    }

    /// Stop scheduling frames. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.accumulator = 0.0;
        log::debug!("Frame driver stopped after {} frames", self.frames);
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start or stop to match the game's phase (call after commands)
    pub fn sync(&mut self, game: &Game) {
        if game.phase() == GamePhase::Running {
            self.start();
        } else {
            self.stop();
        }
    }

    /// One display refresh: a single tick, then render
    pub fn frame<F: FnMut(&Game)>(&mut self, game: &mut Game, mut render: F) {
        if !self.active {
            return;
        }
        game.advance_frame();
        render(game);
        self.frames += 1;
        self.sync(game);
    }

    /// Variable-rate refresh: run as many fixed ticks as `dt` seconds cover,
    /// then render once.
    pub fn advance<F: FnMut(&Game)>(&mut self, game: &mut Game, dt: f32, mut render: F) {
        if !self.active {
            return;
        }
        // NaN would stick in the accumulator and stall every later frame
        if dt.is_finite() {
            self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
        }

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            if !game.advance_frame() {
                break;
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        render(game);
        self.frames += 1;
        self.sync(game);
    }
}
