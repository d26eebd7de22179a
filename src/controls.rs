//! Keyboard mapping
//!
//! Arrow keys or A/D steer, Space starts or pauses, R resets.

use serde::{Deserialize, Serialize};

use crate::game::{CommandOutcome, Game};
use crate::sim::Steer;

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    A,
    D,
    Space,
    R,
}

impl Key {
    /// Parse a DOM-style key code ("ArrowLeft", "KeyA", "Space", ...)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "KeyA" => Some(Key::A),
            "KeyD" => Some(Key::D),
            "Space" => Some(Key::Space),
            "KeyR" => Some(Key::R),
            _ => None,
        }
    }

    /// Steering direction held by this key, if any
    pub fn steer(&self) -> Option<Steer> {
        match self {
            Key::ArrowLeft | Key::A => Some(Steer::Left),
            Key::ArrowRight | Key::D => Some(Steer::Right),
            Key::Space | Key::R => None,
        }
    }
}

impl Game {
    /// Apply a key press or release.
    ///
    /// Steering keys act on both edges; Space and R act on press only.
    pub fn handle_key(&mut self, key: Key, pressed: bool) -> CommandOutcome {
        if let Some(steer) = key.steer() {
            self.set_steer(steer, pressed);
            return CommandOutcome::Applied;
        }
        if !pressed {
            return CommandOutcome::Ignored;
        }
        match key {
            Key::Space => self.toggle(),
            Key::R => self.reset(),
            _ => CommandOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_from_code() {
        assert_eq!(Key::from_code("KeyA"), Some(Key::A));
        assert_eq!(Key::from_code("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_code("KeyQ"), None);
    }

    #[test]
    fn test_steer_keys_set_and_clear_flags() {
        let mut game = Game::with_seed(2);
        game.handle_key(Key::A, true);
        game.handle_key(Key::ArrowRight, true);
        assert!(game.input().left && game.input().right);
        game.handle_key(Key::ArrowLeft, false);
        assert!(!game.input().left && game.input().right);
    }

    #[test]
    fn test_space_toggles_on_press_only() {
        let mut game = Game::with_seed(2);
        assert!(game.handle_key(Key::Space, true).applied());
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.handle_key(Key::Space, false), CommandOutcome::Ignored);
        assert_eq!(game.phase(), GamePhase::Running);
        game.handle_key(Key::Space, true);
        assert_eq!(game.phase(), GamePhase::Paused);
    }

    #[test]
    fn test_r_resets() {
        let mut game = Game::with_seed(2);
        game.handle_key(Key::Space, true);
        game.handle_key(Key::R, true);
        assert_eq!(game.phase(), GamePhase::Idle);
    }
}
