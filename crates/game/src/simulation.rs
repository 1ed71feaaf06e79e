//! Game simulation - the frame driver.
//!
//! One [`Simulation`] owns the level and the body and exposes a single
//! entry point, [`Simulation::tick`], which advances everything in a
//! fixed order and returns the tick's events. There are no module-level
//! globals; the host hands in an [`InputSnapshot`] and applies the
//! returned pose.

use ascent_physics::{BodyController, BodyState, ColliderId, ColliderKind, MovementConfig};
use glam::Vec3;

use crate::events::{CameraPose, FrameEvents};
use crate::input::InputSnapshot;
use crate::level::Level;

/// The main game simulation.
///
/// Deterministic: running the same level with the same sequence of input
/// snapshots always produces the same sequence of poses and events.
#[derive(Debug)]
pub struct Simulation {
    /// Current frame/tick number.
    pub frame: u64,

    /// Current level. Collider membership is fixed; only patrol state and
    /// collected flags mutate.
    pub level: Level,

    /// The kinematic body (camera).
    pub body: BodyState,

    /// Movement controller.
    controller: BodyController,
}

impl Simulation {
    /// Create a simulation for the given level and movement tuning.
    pub fn new(config: MovementConfig, level: Level) -> Self {
        let body = BodyState::new(level.spawn, config.body_height);

        Self {
            frame: 0,
            level,
            body,
            controller: BodyController::new(config),
        }
    }

    /// Create a simulation with default tuning on the test course.
    pub fn test() -> Self {
        let level = Level::test_course().expect("test course is valid");
        Self::new(MovementConfig::default(), level)
    }

    /// The movement configuration in use.
    pub fn config(&self) -> &MovementConfig {
        &self.controller.config
    }

    /// The camera pose after the most recent tick.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.body.position,
            view: self.body.view,
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Fixed order: orientation, horizontal walk, gravity, platform
    /// advance, resting-contact resolution (with rider carry), jump, then
    /// hazard/respawn, checkpoint, and collectible evaluation. The
    /// returned [`FrameEvents`] plus [`Simulation::pose`] are the whole
    /// render handoff.
    pub fn tick(&mut self, input: &InputSnapshot) -> FrameEvents {
        let command = input.to_command();
        let mut events = FrameEvents::default();

        self.controller
            .update(&mut self.body, &command, &mut self.level.world);

        self.check_hazards(&mut events);
        self.check_checkpoints(&mut events);
        self.check_collectibles(&mut events);

        self.frame += 1;
        events
    }

    /// Respawn on falling past the death threshold or touching a hazard.
    fn check_hazards(&mut self, events: &mut FrameEvents) {
        let fell = self.body.position.y < self.level.death_threshold;

        let burned = !fell
            && self.level.world.colliders().iter().any(|c| {
                matches!(c.kind, ColliderKind::Hazard)
                    && c.contains_horizontal(self.body.position)
                    && c.overlaps_vertical(self.body.feet(), self.body.head())
            });

        if fell || burned {
            log::debug!(
                "respawn at frame {}: {} (y = {:.2})",
                self.frame,
                if fell { "fell out" } else { "hit hazard" },
                self.body.position.y,
            );
            self.body.respawn();
            events.respawned = true;
        }
    }

    /// Advance the spawn point when a checkpoint is touched.
    ///
    /// Proximity uses independent X and Z thresholds, not Euclidean
    /// distance. Re-touching the checkpoint that already owns the spawn
    /// point is a no-op, so no duplicate events are emitted.
    fn check_checkpoints(&mut self, events: &mut FrameEvents) {
        let offset = self.controller.config.checkpoint_spawn_offset;

        for collider in self.level.world.colliders() {
            let ColliderKind::Checkpoint { radius } = collider.kind else {
                continue;
            };

            let dx = (self.body.position.x - collider.center.x).abs();
            let dz = (self.body.position.z - collider.center.z).abs();
            if dx >= radius || dz >= radius {
                continue;
            }

            let spawn = collider.center + Vec3::new(0.0, offset, 0.0);
            if self.body.spawn_point != spawn {
                log::debug!("checkpoint {} reached, spawn -> {:?}", collider.id, spawn);
                self.body.spawn_point = spawn;
                events.checkpoint_reached = Some(collider.id);
            }
        }
    }

    /// Pick up collectibles within their Euclidean radius.
    fn check_collectibles(&mut self, events: &mut FrameEvents) {
        let in_reach: Vec<ColliderId> = self
            .level
            .world
            .colliders()
            .iter()
            .filter(|c| match c.kind {
                ColliderKind::Collectible { radius, collected } => {
                    !collected && self.body.position.distance(c.center) < radius
                }
                _ => false,
            })
            .map(|c| c.id)
            .collect();

        for id in in_reach {
            // `collect` is one-way, so each ID is emitted at most once
            if self.level.world.collect(id) {
                log::debug!("collected {id}");
                events.collected.push(id);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_physics::WorldError;

    fn flat_level() -> Level {
        let mut level = Level::new("flat", "Flat", Vec3::new(0.0, 3.0, 5.0), -20.0);
        level
            .world
            .add_static(Vec3::ZERO, Vec3::new(15.0, 0.5, 15.0))
            .unwrap();
        level
    }

    fn run_idle(sim: &mut Simulation, ticks: usize) {
        let idle = InputSnapshot::default();
        for _ in 0..ticks {
            sim.tick(&idle);
        }
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut sim = Simulation::test();
        sim.tick(&InputSnapshot::default());
        sim.tick(&InputSnapshot::default());
        assert_eq!(sim.frame, 2);
    }

    #[test]
    fn test_free_fall_lands_exactly_on_floor() {
        // Spawn at (0, 3, 5) over a floor with half-height 0.5: the body
        // free-falls until y <= 1.35 and snaps to exactly 1.35 that tick.
        let mut sim = Simulation::new(MovementConfig::default(), flat_level());

        let idle = InputSnapshot::default();
        let mut landed_at = None;
        for tick in 0..200 {
            sim.tick(&idle);
            if sim.body.grounded {
                landed_at = Some(tick);
                break;
            }
        }

        assert!(landed_at.is_some(), "body never landed");
        assert_eq!(sim.body.position.y, 1.35);
        assert_eq!(sim.body.vertical_velocity, 0.0);
    }

    #[test]
    fn test_determinism() {
        let inputs: Vec<InputSnapshot> = (0..200)
            .map(|i| {
                let mut input = InputSnapshot::default();
                input.movement.forward = i % 2 == 0;
                input.movement.right = i % 3 == 0;
                input.jump = i % 10 == 0;
                input.captured = true;
                input.mouse_delta = ((i % 7) as f32, (i % 5) as f32 - 2.0);
                input
            })
            .collect();

        let mut sim1 = Simulation::test();
        let mut sim2 = Simulation::test();
        for input in &inputs {
            sim1.tick(input);
            sim2.tick(input);
        }

        assert_eq!(sim1.pose(), sim2.pose());
    }

    #[test]
    fn test_respawn_below_death_threshold() {
        // No floor at all: the body falls forever until the threshold
        let level = Level::new("void", "Void", Vec3::new(0.0, 3.0, 5.0), -20.0);
        let mut sim = Simulation::new(MovementConfig::default(), level);

        let idle = InputSnapshot::default();
        let mut respawned = false;
        for _ in 0..400 {
            let events = sim.tick(&idle);
            if events.respawned {
                respawned = true;
                break;
            }
        }

        assert!(respawned, "body never respawned");
        assert_eq!(sim.body.position, Vec3::new(0.0, 3.0, 5.0));
        assert_eq!(sim.body.vertical_velocity, 0.0);
    }

    #[test]
    fn test_hazard_overlap_respawns() {
        let mut level = flat_level();
        // Hazard volume sitting on the floor right under the spawn column
        level
            .world
            .add_hazard(Vec3::new(0.0, 1.0, 5.0), Vec3::new(1.0, 0.5, 1.0))
            .unwrap();
        let mut sim = Simulation::new(MovementConfig::default(), level);

        let idle = InputSnapshot::default();
        let mut respawned = false;
        for _ in 0..200 {
            if sim.tick(&idle).respawned {
                respawned = true;
                break;
            }
        }

        assert!(respawned, "falling into the hazard should respawn");
    }

    #[test]
    fn test_checkpoint_updates_spawn_and_is_idempotent() {
        let mut level = flat_level();
        let checkpoint = level
            .world
            .add_checkpoint(Vec3::new(0.0, 1.0, 5.0), Vec3::splat(0.5), 2.0)
            .unwrap();
        let mut sim = Simulation::new(MovementConfig::default(), level);

        // Fall onto the floor inside the checkpoint's XZ range
        let idle = InputSnapshot::default();
        let mut reached = None;
        for _ in 0..200 {
            let events = sim.tick(&idle);
            if let Some(id) = events.checkpoint_reached {
                reached = Some(id);
                break;
            }
        }
        assert_eq!(reached, Some(checkpoint));
        assert_eq!(sim.body.spawn_point, Vec3::new(0.0, 4.0, 5.0));

        // Staying inside the radius emits nothing further
        for _ in 0..20 {
            let events = sim.tick(&idle);
            assert_eq!(events.checkpoint_reached, None);
        }
    }

    #[test]
    fn test_death_after_checkpoint_respawns_at_checkpoint() {
        // Checkpoint at the edge of the floor; the body touches it, walks
        // off, and must come back to the checkpoint, not the level spawn.
        let mut level = flat_level();
        level
            .world
            .add_checkpoint(Vec3::new(14.0, 1.0, 0.0), Vec3::splat(0.5), 2.0)
            .unwrap();
        let mut sim = Simulation::new(MovementConfig::default(), level);

        // Teleport-by-simulation is cheating; place the body by walking.
        // For the test's purposes, position it directly over the marker.
        sim.body.position = Vec3::new(14.0, 1.35, 0.0);
        run_idle(&mut sim, 2);
        assert_eq!(sim.body.spawn_point, Vec3::new(14.0, 4.0, 0.0));

        // Step off the floor edge and fall out
        sim.body.position = Vec3::new(40.0, 1.35, 0.0);
        let idle = InputSnapshot::default();
        let mut respawned = false;
        for _ in 0..400 {
            if sim.tick(&idle).respawned {
                respawned = true;
                break;
            }
        }

        assert!(respawned);
        assert_eq!(sim.body.position, Vec3::new(14.0, 4.0, 0.0));
    }

    #[test]
    fn test_collectible_collects_exactly_once() {
        let mut level = flat_level();
        let item = level
            .world
            .add_collectible(Vec3::new(0.0, 1.5, 5.0), Vec3::splat(0.3), 1.5)
            .unwrap();
        let mut sim = Simulation::new(MovementConfig::default(), level);

        // Body lands at (0, 1.35, 5) - within 1.5 of the item, and stays
        let idle = InputSnapshot::default();
        let mut pickups = 0;
        for _ in 0..300 {
            let events = sim.tick(&idle);
            pickups += events.collected.iter().filter(|&&id| id == item).count();
        }

        assert_eq!(pickups, 1);
    }

    #[test]
    fn test_collection_survives_respawn() {
        let mut level = Level::new("strip", "Strip", Vec3::new(0.0, 3.0, 5.0), -20.0);
        // Floor only under the spawn; walking forward falls off
        level
            .world
            .add_static(Vec3::new(0.0, 0.0, 5.0), Vec3::new(2.0, 0.5, 2.0))
            .unwrap();
        let item = level
            .world
            .add_collectible(Vec3::new(0.0, 1.5, 5.0), Vec3::splat(0.3), 1.5)
            .unwrap();
        let mut sim = Simulation::new(MovementConfig::default(), level);

        // Land and pick up
        let idle = InputSnapshot::default();
        let mut collected = false;
        for _ in 0..100 {
            if !sim.tick(&idle).collected.is_empty() {
                collected = true;
                break;
            }
        }
        assert!(collected);

        // Walk off and die
        let mut forward = InputSnapshot::default();
        forward.movement.forward = true;
        let mut respawned = false;
        for _ in 0..1000 {
            if sim.tick(&forward).respawned {
                respawned = true;
                break;
            }
        }
        assert!(respawned);

        // Resting at spawn again, inside the pickup radius: no re-collect
        for _ in 0..100 {
            let events = sim.tick(&idle);
            assert!(events.collected.is_empty(), "collected flag must be monotonic");
        }
        assert!(!sim.level.world.collect(item), "still marked collected");
    }

    #[test]
    fn test_walk_forward_moves_negative_z() {
        let mut sim = Simulation::new(MovementConfig::default(), flat_level());
        run_idle(&mut sim, 100); // settle on the floor

        let z_before = sim.body.position.z;
        let mut forward = InputSnapshot::default();
        forward.movement.forward = true;
        for _ in 0..10 {
            sim.tick(&forward);
        }

        // Yaw 0 faces -Z; ten ticks at 0.1/tick
        assert!((sim.body.position.z - (z_before - 1.0)).abs() < 1e-4);
    }

    #[test]
    fn test_level_validation_rejects_bad_world() {
        let mut level = Level::new("bad", "Bad", Vec3::ZERO, -20.0);
        let err = level
            .world
            .add_static(Vec3::ZERO, Vec3::new(0.0, 1.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, WorldError::NonPositiveHalfExtents(_)));
    }
}
