//! Collider definitions.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Unique identifier for colliders, assigned at registration.
pub type ColliderId = u32;

/// What a collider is, and the state that goes with it.
///
/// Structural membership of the world never changes after load; the only
/// runtime mutation is a `Moving` platform's patrol state and a
/// `Collectible`'s one-way `collected` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColliderKind {
    /// Immutable platform geometry.
    Static,

    /// A platform patrolling back and forth along the X axis.
    Moving {
        /// Distance travelled per tick (non-negative; `direction` encodes
        /// heading).
        speed: f32,
        /// Lower patrol bound for `center.x`.
        bounds_min: f32,
        /// Upper patrol bound for `center.x`.
        bounds_max: f32,
        /// Current heading, `+1` or `-1`. Flips once per boundary crossing.
        direction: f32,
        /// X displacement applied on the most recent tick. Riders are
        /// carried by exactly this amount.
        last_delta: f32,
    },

    /// A volume that kills the body on overlap.
    Hazard,

    /// A marker that updates the respawn point on proximity.
    Checkpoint {
        /// Per-axis touch threshold (independent X and Z, not Euclidean).
        radius: f32,
    },

    /// A one-way pickup.
    Collectible {
        /// Euclidean pickup distance from the body position.
        radius: f32,
        /// Monotonic: never reverts to `false` once set.
        collected: bool,
    },
}

/// An axis-aligned collider in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Unique identifier for this collider.
    pub id: ColliderId,
    /// Center position in world space.
    pub center: Vec3,
    /// Half-size in each axis. All components strictly positive.
    pub half_extents: Vec3,
    /// Kind tag plus kind-specific state.
    pub kind: ColliderKind,
}

impl Collider {
    /// Y coordinate of this collider's top surface.
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Strict horizontal containment test, ignoring vertical position.
    ///
    /// A body far above a platform is still "in range" the instant it is
    /// horizontally over it; the vertical condition is the resolver's job.
    #[inline]
    pub fn contains_horizontal(&self, point: Vec3) -> bool {
        (point.x - self.center.x).abs() < self.half_extents.x
            && (point.z - self.center.z).abs() < self.half_extents.z
    }

    /// Whether this collider can support a body (something to stand on).
    #[inline]
    pub fn is_support(&self) -> bool {
        matches!(self.kind, ColliderKind::Static | ColliderKind::Moving { .. })
    }

    /// Whether a vertical span `[feet, head]` overlaps this collider's
    /// vertical extent. Used with [`Self::contains_horizontal`] for full
    /// body/volume overlap tests (hazards).
    #[inline]
    pub fn overlaps_vertical(&self, feet: f32, head: f32) -> bool {
        feet <= self.center.y + self.half_extents.y && head >= self.center.y - self.half_extents.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_box(center: Vec3, half_extents: Vec3) -> Collider {
        Collider {
            id: 0,
            center,
            half_extents,
            kind: ColliderKind::Static,
        }
    }

    #[test]
    fn test_horizontal_containment_ignores_y() {
        let c = static_box(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 0.5, 2.0));

        // Far above the platform but horizontally over it
        assert!(c.contains_horizontal(Vec3::new(1.0, 100.0, -1.0)));
        // Just past the X edge
        assert!(!c.contains_horizontal(Vec3::new(2.0, 0.0, 0.0)));
        // Just past the Z edge
        assert!(!c.contains_horizontal(Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn test_top_surface() {
        let c = static_box(Vec3::new(0.0, 3.0, 0.0), Vec3::new(2.0, 0.5, 2.0));
        assert_eq!(c.top(), 3.5);
    }

    #[test]
    fn test_vertical_overlap() {
        let c = static_box(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 1.0));

        assert!(c.overlaps_vertical(1.5, 3.2));
        assert!(c.overlaps_vertical(-1.0, 0.0));
        assert!(!c.overlaps_vertical(2.5, 4.0));
        assert!(!c.overlaps_vertical(-3.0, -0.5));
    }
}
