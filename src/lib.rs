//! Brick Breaker - A rectangular arena arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, physics tick, entities)
//! - `game`: Game state machine, commands and events
//! - `driver`: Frame scheduler that pumps the simulation while running
//! - `controls`: Keyboard mapping onto game commands
//! - `snapshot`: Read-only view for the presentation layer
//! - `settings`: Serde-backed configuration

pub mod controls;
pub mod driver;
pub mod game;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use controls::Key;
pub use driver::FrameDriver;
pub use game::{CommandOutcome, Game, StatusMessage};
pub use settings::Settings;
pub use snapshot::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 720.0;
    pub const ARENA_HEIGHT: f32 = 520.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 16.0;
    /// Gap between the paddle's bottom edge and the arena floor
    pub const PADDLE_FLOOR_GAP: f32 = 12.0;
    pub const PADDLE_TOP: f32 = ARENA_HEIGHT - PADDLE_HEIGHT - PADDLE_FLOOR_GAP;
    /// Paddle travel per tick while a steer key is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Ball speed at multiplier 1.0 (units per tick)
    pub const BASE_SPEED: f32 = 4.2;
    /// Serve height above the arena floor
    pub const SERVE_FLOOR_OFFSET: f32 = 90.0;
    /// Horizontal component of the serve direction relative to the vertical
    pub const SERVE_SLANT: f32 = 0.7;
    /// Paddle edge hits leave at this angle from vertical (60 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Speed multiplier bounds
    pub const MIN_SPEED_MULTIPLIER: f32 = 0.6;
    pub const MAX_SPEED_MULTIPLIER: f32 = 1.6;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 9;
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 24.0;
    pub const BRICK_GAP: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 32.0;
    /// Row colours (0xRRGGBB), repeating if there are more rows than entries
    pub const BRICK_COLORS: [u32; 5] = [0xffda79, 0xff9f68, 0xef5b5b, 0x59c9a5, 0x64b5ff];
    /// Points per destroyed brick
    pub const BRICK_SCORE: u64 = 10;

    /// Lives at the start of every episode
    pub const STARTING_LIVES: u8 = 3;
}

/// Clamp a speed multiplier into the playable range.
///
/// Returns `None` for non-finite input so callers can ignore it.
#[inline]
pub fn clamp_speed_multiplier(multiplier: f32) -> Option<f32> {
    use consts::{MAX_SPEED_MULTIPLIER, MIN_SPEED_MULTIPLIER};
    if !multiplier.is_finite() {
        return None;
    }
    Some(multiplier.clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER))
}
