//! Game state machine
//!
//! Owns the current episode and decides when the physics may run. Phases:
//!
//! ```text
//! Idle ──start──▶ Running ──pause──▶ Paused ──start──▶ Running
//!                    │ ball lost, lives left ──▶ Paused
//!                    │ ball lost, last life  ──▶ GameOver
//!                    │ last brick            ──▶ Won
//! any ──reset──▶ Idle
//! ```
//!
//! Commands that don't apply in the current phase are ignored, never errors.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clamp_speed_multiplier;
use crate::consts::BASE_SPEED;
use crate::settings::Settings;
use crate::sim::{
    Ball, Brick, GameEvent, GamePhase, GameState, InputFlags, Paddle, Steer, TickOutcome, tick,
};
use crate::snapshot::Snapshot;

/// Whether a command changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Ignored,
}

impl CommandOutcome {
    pub fn applied(&self) -> bool {
        *self == CommandOutcome::Applied
    }
}

/// Status line for the presentation layer to localize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusMessage {
    /// Waiting for the first start
    PressStart,
    /// Halted by the player
    Paused,
    /// A life was lost; resume to continue
    LivesRemaining(u8),
    GameOver,
    /// Every brick destroyed
    Cleared,
}

/// A game session: the current episode plus what survives resets
pub struct Game {
    state: GameState,
    phase: GamePhase,
    best_score: u64,
    speed_multiplier: f32,
    input: InputFlags,
    message: Option<StatusMessage>,
    events: Vec<GameEvent>,
    rng: Pcg32,
}

impl Game {
    /// Create a game with the given settings
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.resolve_seed();
        let speed_multiplier = clamp_speed_multiplier(settings.speed_multiplier).unwrap_or(1.0);
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(BASE_SPEED * speed_multiplier, &mut rng);
        log::info!("New game (seed {}, speed {:.1}x)", seed, speed_multiplier);
        Self {
            state,
            phase: GamePhase::Idle,
            best_score: 0,
            speed_multiplier,
            input: InputFlags::default(),
            message: Some(StatusMessage::PressStart),
            events: Vec::new(),
            rng,
        }
    }

    /// Create a game with default settings and a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&Settings {
            seed: Some(seed),
            ..Settings::default()
        })
    }

    // === Commands ===

    /// Idle/Paused -> Running, if there is anything left to play for
    pub fn start(&mut self) -> CommandOutcome {
        let resumable = matches!(self.phase, GamePhase::Idle | GamePhase::Paused);
        if !resumable || self.state.lives() == 0 || self.state.bricks_left() == 0 {
            return CommandOutcome::Ignored;
        }
        log::info!("{:?} -> Running", self.phase);
        self.phase = GamePhase::Running;
        self.message = None;
        CommandOutcome::Applied
    }

    /// Running -> Paused
    pub fn pause(&mut self) -> CommandOutcome {
        if self.phase != GamePhase::Running {
            return CommandOutcome::Ignored;
        }
        log::info!("Running -> Paused");
        self.phase = GamePhase::Paused;
        self.message = Some(StatusMessage::Paused);
        CommandOutcome::Applied
    }

    /// Pause while running, otherwise start (the single start/pause button)
    pub fn toggle(&mut self) -> CommandOutcome {
        if self.phase == GamePhase::Running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Any -> Idle with a fresh grid, score and lives. Best score survives.
    pub fn reset(&mut self) -> CommandOutcome {
        self.state = GameState::new(self.ball_speed(), &mut self.rng);
        self.phase = GamePhase::Idle;
        self.message = Some(StatusMessage::PressStart);
        log::info!("Game reset (best score {})", self.best_score);
        CommandOutcome::Applied
    }

    /// Change the ball speed, rescaling the ball in flight.
    ///
    /// Values are clamped to the playable range; non-finite values are ignored.
    pub fn set_speed_multiplier(&mut self, multiplier: f32) -> CommandOutcome {
        let Some(multiplier) = clamp_speed_multiplier(multiplier) else {
            return CommandOutcome::Ignored;
        };
        self.speed_multiplier = multiplier;
        let speed = self.ball_speed();
        self.state.ball.rescale_speed(speed);
        log::debug!("Speed multiplier {:.2} (ball speed {:.2})", multiplier, speed);
        CommandOutcome::Applied
    }

    /// Press or release a steering key. Takes effect on the next running tick.
    pub fn set_steer(&mut self, steer: Steer, pressed: bool) {
        self.input.set(steer, pressed);
    }

    /// Replace both steering flags at once
    pub fn set_input(&mut self, input: InputFlags) {
        self.input = input;
    }

    // === Simulation ===

    /// Run one physics tick if the game is running.
    ///
    /// Returns whether a tick was simulated.
    pub fn advance_frame(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        let speed = self.ball_speed();
        let outcome = tick(&mut self.state, &self.input, speed, &mut self.events);
        self.best_score = self.best_score.max(self.state.score());

        match outcome {
            TickOutcome::Continue => {}
            TickOutcome::BallLost => self.on_ball_lost(),
            TickOutcome::Cleared => self.on_cleared(),
        }
        true
    }

    fn on_ball_lost(&mut self) {
        let remaining = self.state.lose_life();
        let speed = self.ball_speed();
        self.state.serve(speed, &mut self.rng);

        if remaining == 0 {
            self.best_score = self.best_score.max(self.state.score());
            self.phase = GamePhase::GameOver;
            self.message = Some(StatusMessage::GameOver);
            self.events.push(GameEvent::GameOver);
            log::info!("Game over (score {}, best {})", self.state.score(), self.best_score);
        } else {
            self.phase = GamePhase::Paused;
            self.message = Some(StatusMessage::LivesRemaining(remaining));
            self.events.push(GameEvent::LifeLost { remaining });
            log::info!("Ball lost, {} lives remaining", remaining);
        }
    }

    fn on_cleared(&mut self) {
        self.best_score = self.best_score.max(self.state.score());
        self.phase = GamePhase::Won;
        self.message = Some(StatusMessage::Cleared);
        self.events.push(GameEvent::Won);
        log::info!("All bricks cleared (score {})", self.state.score());
    }

    /// Drain notifications raised since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score()
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn lives(&self) -> u8 {
        self.state.lives()
    }

    pub fn bricks_left(&self) -> usize {
        self.state.bricks_left()
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    /// Target ball speed for the current multiplier
    pub fn ball_speed(&self) -> f32 {
        BASE_SPEED * self.speed_multiplier
    }

    pub fn message(&self) -> Option<StatusMessage> {
        self.message
    }

    pub fn input(&self) -> InputFlags {
        self.input
    }

    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.state.paddle
    }

    pub fn bricks(&self) -> &[Brick] {
        self.state.bricks()
    }

    /// Current episode
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Place the ball in flight. Bricks, score and lives stay untouched.
    pub fn stage_ball(&mut self, pos: Vec2, vel: Vec2) {
        self.state.ball.pos = pos;
        self.state.ball.vel = vel;
    }

    /// Owned, serializable view of everything the presentation layer draws
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
