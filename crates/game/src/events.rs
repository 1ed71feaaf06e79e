//! Per-tick outputs handed to the rendering collaborator.

use ascent_physics::{ColliderId, ViewAngles};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The camera pose produced by a tick: eye-level position plus view
/// angles, ready for the render host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye-level position in world space.
    pub position: Vec3,
    /// View orientation.
    pub view: ViewAngles,
}

/// Everything that happened in one tick beyond the pose update.
///
/// The render host consumes these fire-and-forget: collected IDs mean
/// "remove this mesh", a respawn means the camera teleported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameEvents {
    /// Collectibles picked up this tick, by collider ID. Each ID is
    /// emitted at most once over the lifetime of the level.
    pub collected: Vec<ColliderId>,

    /// Checkpoint whose spawn point became active this tick, if any.
    /// Re-touching the active checkpoint emits nothing.
    pub checkpoint_reached: Option<ColliderId>,

    /// The body was reset to its spawn point this tick.
    pub respawned: bool,
}

impl FrameEvents {
    /// True when nothing beyond the pose changed this tick.
    pub fn is_empty(&self) -> bool {
        self.collected.is_empty() && self.checkpoint_reached.is_none() && !self.respawned
    }
}
