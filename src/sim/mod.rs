//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must be pure and deterministic:
//! - One fixed step per tick, velocities in units per tick
//! - Seeded RNG only
//! - Stable iteration order (bricks scanned in grid order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod geometry;
pub mod state;
pub mod tick;

pub use geometry::{
    BounceAxis, Penetration, Rect, circle_rect_overlap, paddle_bounce_velocity, penetration_depths,
};
pub use state::{
    Ball, Brick, GameEvent, GamePhase, GameState, InputFlags, Paddle, Steer, build_bricks,
    serve_position,
};
pub use tick::{TickOutcome, tick};
