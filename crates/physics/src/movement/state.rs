//! Body state and command structures.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// View orientation as a plain yaw/pitch pair.
///
/// Yaw is unbounded; pitch is clamped by the controller. Direction
/// vectors are derived on demand and never stored, keeping the simulation
/// decoupled from any rendering-side transform representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewAngles {
    /// Heading in radians, unbounded.
    pub yaw: f32,
    /// Look up/down in radians, clamped to the configured limit.
    pub pitch: f32,
}

impl ViewAngles {
    /// Horizontal forward direction, derived from yaw alone.
    ///
    /// Deliberately independent of pitch so horizontal speed does not
    /// shrink as the player looks up or down.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(sin_yaw, 0.0, -cos_yaw).normalize()
    }

    /// Horizontal right direction, perpendicular to [`Self::forward`].
    #[inline]
    pub fn right(&self) -> Vec3 {
        let forward = self.forward();
        Vec3::new(forward.z, 0.0, -forward.x)
    }

    /// Full look direction including pitch, for the render handoff.
    pub fn look_direction(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }
}

/// The kinematic body: everything the simulation owns about the player.
///
/// Constructed once at level start and reset in place on respawn, never
/// reconstructed. Mutated exactly once per tick by the controller and the
/// frame driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Eye-level position in world space.
    pub position: Vec3,

    /// Vertical velocity (units/tick). Horizontal motion is instantaneous
    /// and carries no velocity.
    pub vertical_velocity: f32,

    /// Resting-contact state; required to permit a jump. Recomputed every
    /// resolution pass.
    pub grounded: bool,

    /// Body height in world units.
    pub height: f32,

    /// Where respawn places the body. Starts as the level spawn and is
    /// advanced by checkpoints.
    pub spawn_point: Vec3,

    /// View orientation.
    pub view: ViewAngles,
}

impl BodyState {
    /// Create a body at the given spawn point.
    pub fn new(spawn_point: Vec3, height: f32) -> Self {
        Self {
            position: spawn_point,
            vertical_velocity: 0.0,
            grounded: false,
            height,
            spawn_point,
            view: ViewAngles::default(),
        }
    }

    /// Y coordinate of the feet.
    #[inline]
    pub fn feet(&self) -> f32 {
        self.position.y - self.height / 2.0
    }

    /// Y coordinate of the top of the head.
    #[inline]
    pub fn head(&self) -> f32 {
        self.position.y + self.height / 2.0
    }

    /// Reset the body to its spawn point in place.
    ///
    /// Vertical velocity is zeroed; `grounded` is left for the next tick's
    /// resolution pass to recompute. View angles are kept, matching the
    /// reference behavior of respawn not touching the camera.
    pub fn respawn(&mut self) {
        self.position = self.spawn_point;
        self.vertical_velocity = 0.0;
    }
}

/// Input command for a single tick, in physics terms.
///
/// Produced from the host's raw input snapshot once per tick; the
/// simulation never reads ambient input state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementCommand {
    /// Forward/backward axis (-1.0 to 1.0). Positive = forward.
    pub forward_move: f32,

    /// Strafe axis (-1.0 to 1.0). Positive = right.
    pub right_move: f32,

    /// Raw mouse delta this tick, in pixels. Already gated on input
    /// capture: zero when the pointer is not captured.
    pub view_delta: (f32, f32),

    /// Jump requested this tick.
    pub jump: bool,
}

impl MovementCommand {
    /// Check if any movement input is active.
    #[inline]
    pub fn has_movement(&self) -> bool {
        self.forward_move != 0.0 || self.right_move != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_forward_independent_of_pitch() {
        let level = ViewAngles { yaw: 0.7, pitch: 0.0 };
        let looking_up = ViewAngles { yaw: 0.7, pitch: 1.4 };

        let a = level.forward();
        let b = looking_up.forward();

        assert!((a - b).length() < 1e-6);
        assert!((a.length() - 1.0).abs() < 1e-6);
        assert_eq!(a.y, 0.0);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        for yaw in [0.0_f32, 0.4, -2.3, 10.0] {
            let view = ViewAngles { yaw, pitch: 0.0 };
            let forward = view.forward();
            let right = view.right();

            assert!(forward.dot(right).abs() < 1e-6, "yaw {yaw}");
            assert!((right.length() - 1.0).abs() < 1e-6, "yaw {yaw}");
        }
    }

    #[test]
    fn test_forward_at_cardinal_yaws() {
        let view = ViewAngles { yaw: 0.0, pitch: 0.0 };
        assert!((view.forward() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);

        let view = ViewAngles { yaw: FRAC_PI_2, pitch: 0.0 };
        assert!((view.forward() - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_body_feet_and_head() {
        let body = BodyState::new(Vec3::new(0.0, 3.0, 5.0), 1.7);
        assert!((body.feet() - 2.15).abs() < 1e-6);
        assert!((body.head() - 3.85).abs() < 1e-6);
    }

    #[test]
    fn test_respawn_resets_in_place() {
        let mut body = BodyState::new(Vec3::new(0.0, 3.0, 5.0), 1.7);
        body.position = Vec3::new(8.0, -30.0, -12.0);
        body.vertical_velocity = -1.4;
        body.view.yaw = 2.0;

        body.respawn();

        assert_eq!(body.position, Vec3::new(0.0, 3.0, 5.0));
        assert_eq!(body.vertical_velocity, 0.0);
        // Camera untouched by respawn
        assert_eq!(body.view.yaw, 2.0);
    }
}
