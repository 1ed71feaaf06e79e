//! Ascent Physics
//!
//! The kinematic movement and collision core for a first-person obby
//! (platforming) game. The simulation is a pure per-tick state transform:
//! given an input command and a collider set, it advances the body's pose
//! and resting-contact state deterministically.
//!
//! # Architecture
//!
//! The crate is split into two systems:
//!
//! - **Collision**: an axis-aligned collider registry with resting-contact
//!   resolution (top surfaces only) and moving-platform patrols
//! - **Movement**: view angles, horizontal walking, gravity, and jumping
//!   driven through the collision world
//!
//! # Design Principles
//!
//! 1. **Determinism**: same inputs always produce the same outputs
//! 2. **Simplicity**: displacement is instantaneous per tick; there is no
//!    acceleration, friction, or side/ceiling collision by design
//! 3. **Single ownership**: the body and colliders are mutated exactly
//!    once per tick, in a fixed order

pub mod collision;
pub mod movement;

// Re-export commonly used types
pub use collision::{
    Collider, ColliderId, ColliderKind, CollisionWorld, SupportContact, WorldError,
};
pub use movement::{BodyController, BodyState, MovementCommand, MovementConfig, ViewAngles};
