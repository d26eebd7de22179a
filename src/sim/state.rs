//! Game state and core simulation types
//!
//! Everything that belongs to a single episode lives in [`GameState`]; it is
//! rebuilt wholesale on reset.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh game, waiting for the first start
    #[default]
    Idle,
    /// Active gameplay, the frame driver is ticking
    Running,
    /// Halted by the player or after losing a life
    Paused,
    /// Out of lives; only reset leaves this phase
    GameOver,
    /// Every brick destroyed; only reset leaves this phase
    Won,
}

impl GamePhase {
    /// Terminal phases ignore start/pause until reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball came off the paddle
    PaddleBounce,
    /// A brick was destroyed (grid index, score after award)
    BrickDestroyed { index: usize, score: u64 },
    /// The last brick was destroyed
    BricksCleared,
    /// Ball fell through the floor, lives remain
    LifeLost { remaining: u8 },
    /// Ball fell through the floor on the last life
    GameOver,
    /// Episode ended with every brick destroyed
    Won,
}

/// Horizontal steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steer {
    Left,
    Right,
}

/// Held steering keys. Both may be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub left: bool,
    pub right: bool,
}

impl InputFlags {
    pub fn set(&mut self, steer: Steer, pressed: bool) {
        match steer {
            Steer::Left => self.left = pressed,
            Steer::Right => self.right = pressed,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the serve position, aimed up and to one side at `speed`
    pub fn served(speed: f32, rng: &mut impl Rng) -> Self {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            pos: serve_position(),
            vel: Vec2::new(SERVE_SLANT * direction, -1.0).normalize() * speed,
            radius: BALL_RADIUS,
        }
    }

    /// Current speed magnitude
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Replace the speed magnitude, keeping the direction.
    /// A stationary ball has no direction and is left alone.
    pub fn rescale_speed(&mut self, speed: f32) {
        let magnitude = self.speed();
        if magnitude == 0.0 {
            return;
        }
        self.vel = self.vel / magnitude * speed;
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Canonical serve position
#[inline]
pub fn serve_position() -> Vec2 {
    Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT - SERVE_FLOOR_OFFSET)
}

/// The player's paddle. Only `x` moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: Self::centered_x(),
        }
    }
}

impl Paddle {
    pub const Y: f32 = PADDLE_TOP;
    pub const WIDTH: f32 = PADDLE_WIDTH;
    pub const HEIGHT: f32 = PADDLE_HEIGHT;
    /// Rightmost legal `x`
    pub const MAX_X: f32 = ARENA_WIDTH - PADDLE_WIDTH;

    pub fn centered_x() -> f32 {
        (ARENA_WIDTH - PADDLE_WIDTH) / 2.0
    }

    /// Horizontal center of the paddle
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + Self::WIDTH / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, Self::Y, Self::WIDTH, Self::HEIGHT)
    }

    /// Move one step for each held direction, clamped to the arena
    pub fn steer(&mut self, input: &InputFlags) {
        if input.left {
            self.x = (self.x - PADDLE_STEP).max(0.0);
        }
        if input.right {
            self.x = (self.x + PADDLE_STEP).min(Self::MAX_X);
        }
    }
}

/// A brick in the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub destroyed: bool,
    /// Display colour, 0xRRGGBB
    pub color: u32,
}

impl Brick {
    /// Brick at grid cell (row, col)
    pub fn at(row: usize, col: usize) -> Self {
        let x = BRICK_OFFSET_LEFT + col as f32 * (BRICK_WIDTH + BRICK_GAP);
        let y = BRICK_OFFSET_TOP + row as f32 * (BRICK_HEIGHT + BRICK_GAP);
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            destroyed: false,
            color: BRICK_COLORS[row % BRICK_COLORS.len()],
        }
    }
}

/// Build the fixed brick layout in row-major order
pub fn build_bricks() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            bricks.push(Brick::at(row, col));
        }
    }
    bricks
}

/// State of one episode (deterministic, serializable)
///
/// Bricks, score and lives only change through [`GameState::destroy_brick`]
/// and [`GameState::lose_life`], which keeps `bricks_left` equal to the
/// number of standing bricks.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Grid in row-major order; collision scan order follows it
    bricks: Vec<Brick>,
    /// Player lives
    lives: u8,
    score: u64,
    /// Live brick counter, kept in step with `bricks`
    bricks_left: usize,
}

impl GameState {
    /// Fresh episode with a full grid and a served ball
    pub fn new(speed: f32, rng: &mut impl Rng) -> Self {
        let bricks = build_bricks();
        let bricks_left = bricks.len();
        Self {
            ball: Ball::served(speed, rng),
            paddle: Paddle::default(),
            bricks,
            lives: STARTING_LIVES,
            score: 0,
            time_ticks: 0,
            bricks_left,
        }
    }

    /// Number of bricks not yet destroyed
    pub fn bricks_left(&self) -> usize {
        self.bricks_left
    }

    /// Brick grid in row-major order
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Take away one life (never below zero) and return what remains
    pub fn lose_life(&mut self) -> u8 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    /// Destroy a live brick and award its points.
    ///
    /// Returns false (and changes nothing) if the brick is already gone.
    pub fn destroy_brick(&mut self, index: usize) -> bool {
        let Some(brick) = self.bricks.get_mut(index) else {
            return false;
        };
        if brick.destroyed {
            return false;
        }
        brick.destroyed = true;
        self.bricks_left -= 1;
        self.score += BRICK_SCORE;
        true
    }

    /// Re-center the paddle and put a fresh ball at the serve position
    pub fn serve(&mut self, speed: f32, rng: &mut impl Rng) {
        self.ball = Ball::served(speed, rng);
        self.paddle = Paddle::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_grid_layout() {
        let bricks = build_bricks();
        assert_eq!(bricks.len(), 45);
        assert_eq!(bricks[0].rect, Rect::new(32.0, 60.0, 60.0, 24.0));
        // Last brick: row 4, col 8
        assert_eq!(bricks[44].rect, Rect::new(592.0, 196.0, 60.0, 24.0));
        assert_eq!(bricks[9].color, 0xff9f68);
        assert!(bricks.iter().all(|b| !b.destroyed));
    }

    #[test]
    fn test_serve_speed_and_direction() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..16 {
            let ball = Ball::served(BASE_SPEED, &mut rng);
            assert_eq!(ball.pos, serve_position());
            assert!((ball.speed() - BASE_SPEED).abs() < 1e-5);
            assert!(ball.vel.y < 0.0);
            assert!((ball.vel.x.abs() / ball.vel.y.abs() - SERVE_SLANT).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rescale_keeps_direction() {
        let mut ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::new(3.0, -4.0),
            radius: BALL_RADIUS,
        };
        ball.rescale_speed(10.0);
        assert!((ball.vel - Vec2::new(6.0, -8.0)).length() < 1e-5);

        ball.vel = Vec2::ZERO;
        ball.rescale_speed(10.0);
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_paddle_clamps() {
        let mut paddle = Paddle { x: 3.0 };
        paddle.steer(&InputFlags {
            left: true,
            right: false,
        });
        assert_eq!(paddle.x, 0.0);

        paddle.x = Paddle::MAX_X - 2.0;
        paddle.steer(&InputFlags {
            left: false,
            right: true,
        });
        assert_eq!(paddle.x, Paddle::MAX_X);
    }

    #[test]
    fn test_paddle_both_keys_apply_independently() {
        let mut paddle = Paddle::default();
        let start = paddle.x;
        paddle.steer(&InputFlags {
            left: true,
            right: true,
        });
        assert_eq!(paddle.x, start);

        // Pinned at the left wall, right still applies after left clamps
        paddle.x = 2.0;
        paddle.steer(&InputFlags {
            left: true,
            right: true,
        });
        assert_eq!(paddle.x, PADDLE_STEP);
    }

    #[test]
    fn test_destroy_brick_once() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new(BASE_SPEED, &mut rng);
        assert!(state.destroy_brick(3));
        assert!(!state.destroy_brick(3));
        assert!(!state.destroy_brick(999));
        assert_eq!(state.bricks_left(), 44);
        assert_eq!(state.score(), BRICK_SCORE);
        let live = state.bricks().iter().filter(|b| !b.destroyed).count();
        assert_eq!(live, state.bricks_left());
    }

    #[test]
    fn test_lose_life_stops_at_zero() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = GameState::new(BASE_SPEED, &mut rng);
        assert_eq!(state.lose_life(), 2);
        assert_eq!(state.lose_life(), 1);
        assert_eq!(state.lose_life(), 0);
        assert_eq!(state.lose_life(), 0);
        assert_eq!(state.lives(), 0);
    }
}
