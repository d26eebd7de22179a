//! Collision geometry for the rectangular arena
//!
//! The ball is tested against bricks with an axis-aligned approximation: its
//! bounding square must overlap the rectangle on both axes. Near corners this
//! reports hits a true circle would miss. That looseness is part of the game's
//! feel and is kept as-is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (origin at top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Which velocity component a collision negates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceAxis {
    /// Negate dx (hit a left or right face)
    Horizontal,
    /// Negate dy (hit a top or bottom face)
    Vertical,
}

/// Overlap of the ball's bounding square past each edge of a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Penetration {
    /// Smallest of the four overlaps
    pub fn min(&self) -> f32 {
        self.left.min(self.right).min(self.top).min(self.bottom)
    }

    /// Pick the axis with the shallowest penetration.
    ///
    /// The minimum is compared against the horizontal overlaps first, so a tie
    /// between a side face and a top/bottom face resolves as `Horizontal`.
    pub fn bounce_axis(&self) -> BounceAxis {
        let min = self.min();
        if min == self.left || min == self.right {
            BounceAxis::Horizontal
        } else {
            BounceAxis::Vertical
        }
    }
}

/// Approximate circle/rectangle overlap (bounding square vs rectangle, strict)
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let within_x = center.x + radius > rect.x && center.x - radius < rect.right();
    let within_y = center.y + radius > rect.y && center.y - radius < rect.bottom();
    within_x && within_y
}

/// Overlap depths along each rectangle edge
///
/// Only meaningful when [`circle_rect_overlap`] holds; then all four are positive.
pub fn penetration_depths(center: Vec2, radius: f32, rect: &Rect) -> Penetration {
    Penetration {
        left: center.x + radius - rect.x,
        right: rect.right() - (center.x - radius),
        top: center.y + radius - rect.y,
        bottom: rect.bottom() - (center.y - radius),
    }
}

/// Reflect a velocity across the given axis
#[inline]
pub fn reflect(velocity: Vec2, axis: BounceAxis) -> Vec2 {
    match axis {
        BounceAxis::Horizontal => Vec2::new(-velocity.x, velocity.y),
        BounceAxis::Vertical => Vec2::new(velocity.x, -velocity.y),
    }
}

/// Velocity leaving the paddle.
///
/// `offset` is the ball center's horizontal distance from the paddle center.
/// It is normalized by the half width and mapped linearly onto
/// `[-max_angle, max_angle]` from vertical. The result always points upward.
pub fn paddle_bounce_velocity(offset: f32, half_width: f32, speed: f32, max_angle: f32) -> Vec2 {
    let normalized = offset / half_width;
    let angle = normalized * max_angle;
    Vec2::new(speed * angle.sin(), -(speed * angle.cos()).abs())
}
