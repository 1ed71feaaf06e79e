//! Movement configuration constants.
//!
//! All movement parameters are grouped here for easy tuning. Units are
//! world units per tick (the simulation runs one tick per display frame),
//! not per second.

use serde::{Deserialize, Serialize};

/// Configuration for kinematic body movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Body height (world units). Positions are eye-level, half the
    /// height above the feet.
    pub body_height: f32,

    /// Horizontal walking speed (units/tick). Applied directly to
    /// position; there is no acceleration model.
    pub walk_speed: f32,

    /// Gravity acceleration (units/tick²).
    pub gravity: f32,

    /// Vertical velocity applied on jump (units/tick).
    pub jump_impulse: f32,

    /// Mouse sensitivity (radians per pixel of mouse delta).
    pub mouse_sensitivity: f32,

    /// Pitch clamp (radians); pitch stays within `[-limit, limit]`.
    pub pitch_limit: f32,

    /// Vertical offset added to a checkpoint's center when it becomes the
    /// spawn point, so respawns start a short drop above the marker.
    pub checkpoint_spawn_offset: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            body_height: 1.7,
            walk_speed: 0.1,
            gravity: 0.02,
            jump_impulse: 0.35,
            mouse_sensitivity: 0.002,
            pitch_limit: 1.5,
            checkpoint_spawn_offset: 3.0,
        }
    }
}

impl MovementConfig {
    /// A gentler tuning: lower gravity and a weaker jump. Matches the
    /// floatier of the source variants.
    pub fn floaty() -> Self {
        Self {
            gravity: 0.01,
            jump_impulse: 0.25,
            ..Default::default()
        }
    }

    /// Half the body height; distance from eye level to the feet.
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.body_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MovementConfig::default();
        assert!(config.walk_speed > 0.0);
        assert!(config.gravity > 0.0);
        assert!(config.body_height > 0.0);
        assert_eq!(config.half_height(), 0.85);
    }

    #[test]
    fn test_floaty_variant() {
        let config = MovementConfig::floaty();
        assert!(config.gravity < MovementConfig::default().gravity);
        assert!(config.jump_impulse < MovementConfig::default().jump_impulse);
    }
}
