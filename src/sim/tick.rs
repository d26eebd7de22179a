//! Fixed timestep simulation tick
//!
//! Advances one episode by a single discrete step. The order of the steps
//! matters: each stage sees the ball where the previous one left it.

use super::geometry::{circle_rect_overlap, paddle_bounce_velocity, penetration_depths, reflect};
use super::state::{GameEvent, GameState, InputFlags, Paddle};
use crate::consts::*;

/// What the state machine has to act on after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing phase-changing happened
    Continue,
    /// Ball dropped below the floor; the tick stopped there
    BallLost,
    /// The last live brick was destroyed
    Cleared,
}

/// Advance the episode by one tick
///
/// `fallback_speed` is used for a paddle bounce if the ball has somehow come
/// to rest. Events are appended to `events`.
pub fn tick(
    state: &mut GameState,
    input: &InputFlags,
    fallback_speed: f32,
    events: &mut Vec<GameEvent>,
) -> TickOutcome {
    state.time_ticks += 1;

    state.paddle.steer(input);

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Side walls
    if ball.pos.x + ball.radius >= ARENA_WIDTH || ball.pos.x - ball.radius <= 0.0 {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = ball.pos.x.max(ball.radius).min(ARENA_WIDTH - ball.radius);
    }

    // Ceiling
    if ball.top() <= 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.radius;
    }

    // Paddle - only while falling, so an overlapping ball can't re-trigger
    let paddle = &state.paddle;
    if ball.bottom() >= Paddle::Y
        && ball.bottom() <= Paddle::Y + Paddle::HEIGHT
        && ball.pos.x >= paddle.x
        && ball.pos.x <= paddle.x + Paddle::WIDTH
        && ball.vel.y > 0.0
    {
        let offset = ball.pos.x - paddle.center_x();
        let speed = match ball.speed() {
            s if s > 0.0 => s,
            _ => fallback_speed,
        };
        ball.vel = paddle_bounce_velocity(offset, Paddle::WIDTH / 2.0, speed, MAX_BOUNCE_ANGLE);
        ball.pos.y = Paddle::Y - ball.radius - 1.0;
        log::debug!(
            "Paddle bounce at offset {:.1}, velocity ({:.2}, {:.2})",
            offset,
            ball.vel.x,
            ball.vel.y
        );
        events.push(GameEvent::PaddleBounce);
    }

    if ball.top() > ARENA_HEIGHT {
        return TickOutcome::BallLost;
    }

    collide_bricks(state, events)
}

/// Destroy at most one brick: the first overlapping one in grid order
fn collide_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) -> TickOutcome {
    let ball = state.ball;
    let hit = state
        .bricks()
        .iter()
        .position(|b| !b.destroyed && circle_rect_overlap(ball.pos, ball.radius, &b.rect));

    let Some(index) = hit else {
        return TickOutcome::Continue;
    };

    let rect = state.bricks()[index].rect;
    state.destroy_brick(index);

    let axis = penetration_depths(ball.pos, ball.radius, &rect).bounce_axis();
    state.ball.vel = reflect(state.ball.vel, axis);

    log::debug!(
        "Brick {} destroyed ({:?} bounce), {} left",
        index,
        axis,
        state.bricks_left()
    );
    events.push(GameEvent::BrickDestroyed {
        index,
        score: state.score(),
    });

    if state.bricks_left() == 0 {
        events.push(GameEvent::BricksCleared);
        return TickOutcome::Cleared;
    }

    TickOutcome::Continue
}
