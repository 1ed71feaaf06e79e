//! Level loading and management.
//!
//! A level is the collider world plus the handful of scalars that are
//! per-level rather than per-game: the initial spawn and the death
//! threshold. Misconfiguration that produces unreachable or perpetually
//! falling states (say, a death threshold above the spawn height) is a
//! level-design defect surfaced to the author at load, not a runtime
//! fault.

use ascent_physics::{CollisionWorld, WorldError};
use glam::Vec3;

/// A game level: collision geometry, markers, and spawn parameters.
#[derive(Debug, Clone)]
pub struct Level {
    /// Level identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Collider registry (platforms, hazards, checkpoints, collectibles).
    pub world: CollisionWorld,

    /// Initial spawn point (eye-level).
    pub spawn: Vec3,

    /// Falling below this Y triggers a respawn.
    pub death_threshold: f32,
}

impl Level {
    /// Create an empty level.
    pub fn new(id: &str, name: &str, spawn: Vec3, death_threshold: f32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            world: CollisionWorld::new(),
            spawn,
            death_threshold,
        }
    }

    /// The classic obby course used for development and tests.
    ///
    /// A 30x30 main floor, an ascending path of small pads, a patrolling
    /// platform bridging the gap to a goal pad, plus a hazard under the
    /// patrol, a mid-course checkpoint, and a collectible on each pad.
    pub fn test_course() -> Result<Self, WorldError> {
        let mut level = Self::new("test_course", "Test Course", Vec3::new(0.0, 3.0, 5.0), -20.0);
        let world = &mut level.world;

        // Main floor
        world.add_static(Vec3::new(0.0, 0.0, 0.0), Vec3::new(15.0, 0.5, 15.0))?;

        // Ascending pads
        world.add_static(Vec3::new(4.0, 3.0, -6.0), Vec3::new(2.0, 0.5, 2.0))?;
        world.add_static(Vec3::new(-4.0, 6.0, -12.0), Vec3::new(2.0, 0.5, 2.0))?;
        world.add_static(Vec3::new(4.0, 9.0, -18.0), Vec3::new(2.0, 0.5, 2.0))?;

        // Patrolling platform bridging toward the goal
        world.add_moving(
            Vec3::new(0.0, 10.5, -21.0),
            Vec3::new(1.5, 0.5, 1.5),
            0.05,
            -4.0,
            4.0,
        )?;

        // Lava pool under the patrol gap
        world.add_hazard(Vec3::new(0.0, 7.0, -21.0), Vec3::new(4.0, 0.5, 3.0))?;

        // Mid-course checkpoint on the second pad
        world.add_checkpoint(Vec3::new(-4.0, 6.5, -12.0), Vec3::new(0.5, 0.5, 0.5), 2.0)?;

        // Collectibles floating over the pads
        world.add_collectible(Vec3::new(4.0, 4.5, -6.0), Vec3::splat(0.3), 1.5)?;
        world.add_collectible(Vec3::new(-4.0, 7.5, -12.0), Vec3::splat(0.3), 1.5)?;
        world.add_collectible(Vec3::new(4.0, 10.5, -18.0), Vec3::splat(0.3), 1.5)?;

        // Goal pad
        world.add_static(Vec3::new(0.0, 12.0, -24.0), Vec3::new(3.0, 0.5, 3.0))?;

        Ok(level)
    }
}
