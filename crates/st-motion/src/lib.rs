//! `st-motion` — the physics collaborator the steering core talks to.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`sink`]    | `MotionSink` trait — reads positions/velocities, accepts velocity |
//! | [`bodies`]  | `KinematicBodies` — built-in SoA sink with Euler integration      |
//! | [`error`]   | `MotionError`, `MotionResult<T>`                                  |
//!
//! # Movement model
//!
//! The core never writes positions.  Each tick the driver:
//!
//! 1. reads `position(agent)` and `velocity(agent)` from the sink,
//! 2. computes a new velocity, clamps it to the agent's `max_speed`, and
//!    hands it back with `set_velocity`,
//! 3. calls `advance(dt)` once all agents are updated.
//!
//! A host engine that integrates bodies itself implements `advance` as a
//! no-op (the default); headless runs use [`KinematicBodies`], which moves
//! every body by `velocity * dt`.

pub mod bodies;
pub mod error;
pub mod sink;


pub use bodies::KinematicBodies;
pub use error::{MotionError, MotionResult};
pub use sink::MotionSink;
