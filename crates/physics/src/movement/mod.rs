//! Kinematic body movement.
//!
//! This module implements the obby movement model:
//!
//! - Yaw/pitch view angles with a pitch clamp
//! - Instantaneous horizontal walking (no acceleration or friction)
//! - Per-tick gravity with no terminal velocity
//! - Jumping gated on resting contact
//!
//! # Design
//!
//! Movement is driven by the [`BodyController`], which takes a
//! [`MovementCommand`] and advances a [`BodyState`] through the collision
//! world. All displacement is applied per tick; the landing snap zeroes
//! vertical velocity every tick the body is supported, so uncapped fall
//! speed only matters for tunneling across very large gaps, which the
//! design accepts.
//!
//! The source variants this model unifies disagreed on tuning (gravity
//! 0.01 vs 0.02, jump impulse 0.25 vs 0.35); all such constants live in
//! [`MovementConfig`] rather than in code.

mod config;
mod controller;
mod state;

pub use config::MovementConfig;
pub use controller::BodyController;
pub use state::{BodyState, MovementCommand, ViewAngles};
