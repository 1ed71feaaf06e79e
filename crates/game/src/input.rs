//! Per-tick input snapshot.
//!
//! The host loop samples its ambient key and mouse state exactly once per
//! tick into an immutable [`InputSnapshot`] and hands it to the
//! simulation. The simulation never observes input mutating mid-tick.

use ascent_physics::MovementCommand;
use serde::{Deserialize, Serialize};

/// Immutable input for a single tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Movement keys held this tick.
    pub movement: MovementKeys,

    /// Jump key held this tick.
    pub jump: bool,

    /// Mouse delta this tick (pixels). Only meaningful while captured.
    pub mouse_delta: (f32, f32),

    /// Whether input is captured (pointer locked). Mouse deltas are
    /// discarded while not captured; key movement still applies.
    pub captured: bool,
}

/// Movement key states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputSnapshot {
    /// Convert to a physics command.
    ///
    /// Boolean keys become signed axes; the mouse delta is gated on the
    /// capture flag so an uncaptured pointer never turns the camera.
    pub fn to_command(&self) -> MovementCommand {
        let mut cmd = MovementCommand::default();

        if self.movement.forward {
            cmd.forward_move += 1.0;
        }
        if self.movement.backward {
            cmd.forward_move -= 1.0;
        }
        if self.movement.right {
            cmd.right_move += 1.0;
        }
        if self.movement.left {
            cmd.right_move -= 1.0;
        }

        if self.captured {
            cmd.view_delta = self.mouse_delta;
        }

        cmd.jump = self.jump;
        cmd
    }

    /// Check if any movement key is held.
    pub fn has_movement(&self) -> bool {
        self.movement.forward || self.movement.backward || self.movement.left || self.movement.right
    }
}
