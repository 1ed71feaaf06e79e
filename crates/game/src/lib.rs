//! Ascent Game Logic
//!
//! This crate contains the obby game simulation:
//!
//! - Per-tick input snapshots
//! - Level definitions (colliders, spawn, death threshold)
//! - The frame driver and its event output
//!
//! # Architecture
//!
//! The simulation is deterministic and single-threaded: the host loop
//! samples input once per display frame, calls [`Simulation::tick`], and
//! applies the returned pose and events to the scene. Nothing blocks and
//! nothing is shared; one tick is one synchronous pass.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Simulation                            │
//! │  ┌──────────┐    ┌──────────────┐    ┌──────────────────┐  │
//! │  │ Input    │───►│ Physics      │───►│ Game State       │  │
//! │  │ Snapshot │    │ (movement +  │    │ (spawn point,    │  │
//! │  └──────────┘    │  collision)  │    │  pickups, level) │  │
//! │                  └──────────────┘    └──────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod events;
pub mod input;
pub mod level;
pub mod simulation;

// Re-export main types
pub use events::{CameraPose, FrameEvents};
pub use input::InputSnapshot;
pub use level::Level;
pub use simulation::Simulation;

// Re-export physics types for convenience
pub use ascent_physics::{
    BodyController, BodyState, Collider, ColliderId, ColliderKind, CollisionWorld,
    MovementCommand, MovementConfig, ViewAngles, WorldError,
};
