//! Resting-contact resolution.
//!
//! The only collision response in the game: arrest downward motion onto
//! the top surface of a platform. There is no side or ceiling response;
//! a body may walk straight through a platform's side and fall past its
//! underside.

use glam::Vec3;

use super::collider::ColliderId;
use super::world::CollisionWorld;

/// The support a body is resting on after resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportContact {
    /// The collider the body is standing on.
    pub collider: ColliderId,
    /// Y coordinate of the supporting top surface.
    pub platform_top: f32,
    /// X displacement inherited from the support this tick (non-zero only
    /// when riding a moving platform).
    pub carried_x: f32,
}

/// Resolve resting contact for a body at eye-level `position` with the
/// given standing `height`.
///
/// Every support collider is tested for strict horizontal containment of
/// the body position (vertical position deliberately ignored). A collider
/// qualifies when the body is at or below its resting eye height
/// (`top + height / 2`) while not moving upward. Among qualifying
/// colliders, the highest top wins; the body snaps to its resting height
/// and vertical velocity is zeroed.
///
/// When the winning support is a moving platform, the platform's this-tick
/// X delta is added to the body position after the vertical snap, keeping
/// the rider glued to the patrol without any transform hierarchy.
///
/// Returns the chosen support, or `None` if the body is airborne.
pub fn resolve_rest_contact(
    world: &CollisionWorld,
    position: &mut Vec3,
    vertical_velocity: &mut f32,
    height: f32,
) -> Option<SupportContact> {
    // Moving upward: never snap, even while overlapping a surface.
    if *vertical_velocity > 0.0 {
        return None;
    }

    let mut best: Option<SupportContact> = None;

    for collider in world.colliders() {
        if !collider.is_support() || !collider.contains_horizontal(*position) {
            continue;
        }

        let platform_top = collider.top();
        let rest_y = platform_top + height / 2.0;
        if position.y > rest_y {
            continue;
        }

        // Highest qualifying top wins, regardless of registration order.
        if best.map_or(true, |b| platform_top > b.platform_top) {
            best = Some(SupportContact {
                collider: collider.id,
                platform_top,
                carried_x: world.platform_delta(collider.id),
            });
        }
    }

    if let Some(contact) = best {
        position.y = contact.platform_top + height / 2.0;
        *vertical_velocity = 0.0;
        position.x += contact.carried_x;
    }

    best
}
