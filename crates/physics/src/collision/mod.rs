//! Axis-aligned collision system.
//!
//! The world is a registry of AABB colliders tagged by kind (static and
//! moving platforms, hazards, checkpoints, collectibles). Membership is
//! fixed after load; at runtime only a moving platform's patrol state and
//! a collectible's `collected` flag ever change.
//!
//! Collision resolution is resting-contact only: it arrests downward
//! motion onto top surfaces and nothing else. Bodies pass freely through
//! platform sides and undersides.

mod collider;
mod resolve;
mod world;

pub use collider::{Collider, ColliderId, ColliderKind};
pub use resolve::{resolve_rest_contact, SupportContact};
pub use world::{CollisionWorld, WorldError};
