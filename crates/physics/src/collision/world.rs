//! Collision world containing all level geometry and markers.
//!
//! The world is built once at level load, validated as it is built, and
//! owns every collider for the lifetime of the level.

use glam::Vec3;
use thiserror::Error;

use super::collider::{Collider, ColliderId, ColliderKind};

/// World construction error. Validation happens once, at load time;
/// ticking the world never fails.
#[derive(Debug, Error, PartialEq)]
pub enum WorldError {
    /// A collider was registered with a zero or negative half-extent.
    #[error("collider half-extents must be strictly positive, got {0:?}")]
    NonPositiveHalfExtents(Vec3),

    /// A moving platform's patrol range is inverted or its speed negative.
    #[error("invalid patrol for moving platform: bounds [{bounds_min}, {bounds_max}], speed {speed}")]
    InvalidPatrol {
        bounds_min: f32,
        bounds_max: f32,
        speed: f32,
    },
}

/// The collision world: an immutable-membership registry of AABB colliders.
///
/// Colliders are resolved in registration order; the resolver's support
/// policy (highest qualifying top) makes the outcome order-independent.
#[derive(Debug, Default, Clone)]
pub struct CollisionWorld {
    colliders: Vec<Collider>,
    next_id: ColliderId,
}

impl CollisionWorld {
    /// Create an empty collision world.
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a static platform.
    pub fn add_static(&mut self, center: Vec3, half_extents: Vec3) -> Result<ColliderId, WorldError> {
        self.add(center, half_extents, ColliderKind::Static)
    }

    /// Register a platform patrolling along the X axis between
    /// `bounds_min` and `bounds_max` at `speed` units per tick.
    pub fn add_moving(
        &mut self,
        center: Vec3,
        half_extents: Vec3,
        speed: f32,
        bounds_min: f32,
        bounds_max: f32,
    ) -> Result<ColliderId, WorldError> {
        if bounds_min > bounds_max || speed < 0.0 {
            return Err(WorldError::InvalidPatrol {
                bounds_min,
                bounds_max,
                speed,
            });
        }
        self.add(
            center,
            half_extents,
            ColliderKind::Moving {
                speed,
                bounds_min,
                bounds_max,
                direction: 1.0,
                last_delta: 0.0,
            },
        )
    }

    /// Register a hazard volume.
    pub fn add_hazard(&mut self, center: Vec3, half_extents: Vec3) -> Result<ColliderId, WorldError> {
        self.add(center, half_extents, ColliderKind::Hazard)
    }

    /// Register a checkpoint marker with a per-axis touch radius.
    pub fn add_checkpoint(
        &mut self,
        center: Vec3,
        half_extents: Vec3,
        radius: f32,
    ) -> Result<ColliderId, WorldError> {
        self.add(center, half_extents, ColliderKind::Checkpoint { radius })
    }

    /// Register a collectible with a Euclidean pickup radius.
    pub fn add_collectible(
        &mut self,
        center: Vec3,
        half_extents: Vec3,
        radius: f32,
    ) -> Result<ColliderId, WorldError> {
        self.add(
            center,
            half_extents,
            ColliderKind::Collectible {
                radius,
                collected: false,
            },
        )
    }

    fn add(
        &mut self,
        center: Vec3,
        half_extents: Vec3,
        kind: ColliderKind,
    ) -> Result<ColliderId, WorldError> {
        if half_extents.x <= 0.0 || half_extents.y <= 0.0 || half_extents.z <= 0.0 {
            return Err(WorldError::NonPositiveHalfExtents(half_extents));
        }

        let id = self.next_id;
        self.next_id += 1;

        self.colliders.push(Collider {
            id,
            center,
            half_extents,
            kind,
        });

        Ok(id)
    }

    /// Get the number of registered colliders.
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// All colliders, in registration order.
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Look up a collider by ID.
    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.iter().find(|c| c.id == id)
    }

    /// Mark a collectible as collected.
    ///
    /// One-way: returns `true` only on the transition from uncollected to
    /// collected. Already-collected collectibles and non-collectibles
    /// return `false`, so callers can emit a removal event exactly once.
    pub fn collect(&mut self, id: ColliderId) -> bool {
        for collider in &mut self.colliders {
            if collider.id != id {
                continue;
            }
            if let ColliderKind::Collectible { collected, .. } = &mut collider.kind {
                if !*collected {
                    *collected = true;
                    return true;
                }
            }
            return false;
        }
        false
    }

    /// Advance every moving platform by one tick.
    ///
    /// Overshoot-and-flip: the platform moves first, then reverses heading
    /// if it ended up outside its patrol bounds, so it may exceed a bound
    /// by up to one tick's delta before turning around. The applied delta
    /// is recorded so riders can be carried by the same amount this tick.
    pub fn step_platforms(&mut self) {
        for collider in &mut self.colliders {
            if let ColliderKind::Moving {
                speed,
                bounds_min,
                bounds_max,
                direction,
                last_delta,
            } = &mut collider.kind
            {
                let delta = *speed * *direction;
                collider.center.x += delta;
                *last_delta = delta;

                if collider.center.x > *bounds_max || collider.center.x < *bounds_min {
                    *direction = -*direction;
                    log::trace!(
                        "platform {} reversed heading at x = {:.3}",
                        collider.id,
                        collider.center.x
                    );
                }
            }
        }
    }

    /// The X displacement a moving platform applied on the most recent
    /// tick. Zero for anything that is not a moving platform.
    pub fn platform_delta(&self, id: ColliderId) -> f32 {
        match self.get(id).map(|c| &c.kind) {
            Some(ColliderKind::Moving { last_delta, .. }) => *last_delta,
            _ => 0.0,
        }
    }
}
