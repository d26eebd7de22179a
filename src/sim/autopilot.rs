//! Demo mode: steer the paddle toward the ball
//!
//! Produces the same [`InputFlags`] a player would, so the simulation cannot
//! tell it apart from keyboard input.

use super::state::{GameState, InputFlags};
use crate::consts::PADDLE_STEP;
use crate::sim::Paddle;

/// Steering for the next tick
pub fn steer(state: &GameState) -> InputFlags {
    let ball = &state.ball;

    // Lead the ball while it falls; drift back to center while it rises
    let target = if ball.vel.y > 0.0 {
        let ticks_to_paddle = ((Paddle::Y - ball.bottom()) / ball.vel.y).max(0.0);
        ball.pos.x + ball.vel.x * ticks_to_paddle.min(30.0)
    } else {
        ball.pos.x
    };

    // Oscillating offset so the ball doesn't settle into a loop
    let time_factor = state.time_ticks as f32 * 0.01;
    let offset = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15) * Paddle::WIDTH / 2.0;
    let target = target + offset;

    let center = state.paddle.center_x();
    InputFlags {
        left: center > target + PADDLE_STEP,
        right: center < target - PADDLE_STEP,
    }
}
