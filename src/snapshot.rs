//! Read-only view of a game for rendering and HUD updates

use serde::{Deserialize, Serialize};

use crate::game::{Game, StatusMessage};
use crate::sim::{Ball, Brick, GamePhase, Paddle};

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub best_score: u64,
    pub lives: u8,
    pub bricks_left: usize,
    pub speed_multiplier: f32,
    pub message: Option<StatusMessage>,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
}

impl Snapshot {
    pub fn capture(game: &Game) -> Self {
        Self {
            phase: game.phase(),
            score: game.score(),
            best_score: game.best_score(),
            lives: game.lives(),
            bricks_left: game.bricks_left(),
            speed_multiplier: game.speed_multiplier(),
            message: game.message(),
            ball: *game.ball(),
            paddle: *game.paddle(),
            bricks: game.bricks().to_vec(),
        }
    }

    /// Bricks still standing, for drawing
    pub fn live_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.destroyed)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
