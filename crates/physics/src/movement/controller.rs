//! Kinematic body controller.
//!
//! The main entry point for movement. It takes a per-tick command and
//! advances the body through the collision world in a fixed order:
//! view angles, horizontal walk, gravity, platform advance, resting
//! contact, jump.

use crate::collision::{resolve_rest_contact, CollisionWorld, SupportContact};

use super::config::MovementConfig;
use super::state::{BodyState, MovementCommand};

/// Kinematic movement controller.
///
/// Holds the tuning configuration; all per-body state lives in
/// [`BodyState`]. One controller can drive any number of bodies.
///
/// # Example
///
/// ```ignore
/// let controller = BodyController::new(MovementConfig::default());
/// let mut body = BodyState::new(spawn, controller.config.body_height);
///
/// // Each tick:
/// controller.update(&mut body, &command, &mut world);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BodyController {
    /// Movement configuration.
    pub config: MovementConfig,
}

impl BodyController {
    /// Create a controller with the given configuration.
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    /// Advance the body by one tick.
    ///
    /// Order is fixed: view angles, horizontal walk, gravity, moving
    /// platform advance, resting-contact resolution (which also carries a
    /// rider by its platform's this-tick delta), then jump. Returns the
    /// support the body ended the tick resting on, if any.
    pub fn update(
        &self,
        body: &mut BodyState,
        command: &MovementCommand,
        world: &mut CollisionWorld,
    ) -> Option<SupportContact> {
        self.update_view_angles(body, command);
        self.apply_walk(body, command);
        self.apply_gravity(body);

        // Platforms move in the same tick the resolver reads their delta,
        // so a rider's carry always matches this tick's patrol motion.
        world.step_platforms();
        let contact = self.resolve(body, world);

        self.try_jump(body, command);

        contact
    }

    /// Apply the mouse delta to yaw and pitch.
    ///
    /// The delta is already zero when input is not captured, so this is a
    /// no-op in that case. Yaw is unbounded; pitch is clamped.
    pub fn update_view_angles(&self, body: &mut BodyState, command: &MovementCommand) {
        let (dx, dy) = command.view_delta;
        body.view.yaw -= dx * self.config.mouse_sensitivity;
        body.view.pitch -= dy * self.config.mouse_sensitivity;
        body.view.pitch = body
            .view
            .pitch
            .clamp(-self.config.pitch_limit, self.config.pitch_limit);
    }

    /// Apply horizontal displacement from the movement axes.
    ///
    /// The wish direction is normalized before scaling so diagonal input
    /// never exceeds single-axis speed. Zero input is a no-op (the zero
    /// vector is never normalized).
    pub fn apply_walk(&self, body: &mut BodyState, command: &MovementCommand) {
        if !command.has_movement() {
            return;
        }

        let forward = body.view.forward();
        let right = body.view.right();
        let wish = forward * command.forward_move + right * command.right_move;

        let length_squared = wish.length_squared();
        if length_squared < 1e-8 {
            // Opposing keys cancel out exactly
            return;
        }

        let direction = wish / length_squared.sqrt();
        body.position += direction * self.config.walk_speed;
    }

    /// Advance vertical velocity and position by one tick of gravity.
    ///
    /// Unconditional and uncapped: the landing snap zeroes velocity on
    /// every supported tick, so fall speed only accumulates while truly
    /// airborne.
    pub fn apply_gravity(&self, body: &mut BodyState) {
        body.vertical_velocity -= self.config.gravity;
        body.position.y += body.vertical_velocity;
    }

    /// Run resting-contact resolution and rederive `grounded`.
    pub fn resolve(&self, body: &mut BodyState, world: &CollisionWorld) -> Option<SupportContact> {
        let contact = resolve_rest_contact(
            world,
            &mut body.position,
            &mut body.vertical_velocity,
            body.height,
        );
        body.grounded = contact.is_some();

        contact
    }

    /// Start a jump if requested and the body is grounded.
    pub fn try_jump(&self, body: &mut BodyState, command: &MovementCommand) {
        if command.jump && body.grounded {
            body.vertical_velocity = self.config.jump_impulse;
        }
    }
}
