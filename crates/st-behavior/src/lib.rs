//! `st-behavior` — steering behavior modes and the per-agent state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`params`]  | `MotionParams`, `ArriveBands` — validated tuning scalars         |
//! | [`mode`]    | `Behavior` sum type, `BehaviorMode` tag, `DebugRadii`            |
//! | [`state`]   | `MotionState` enum and its display label                         |
//! | [`steer`]   | `SteerInput`, `SteerOutput`, the pure [`steer`] update           |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! # Design notes
//!
//! A behavior never mutates anything.  [`steer`] takes the agent's current
//! motion state and distress flag plus the tick's kinematic inputs, and
//! returns the new velocity, the new motion state, and (for Evade agents) an
//! edge-triggered distress signal.  The simulation driver commits the result,
//! which keeps the compute phase free of shared mutable state.

pub mod error;
pub mod mode;
pub mod params;
pub mod state;
pub mod steer;


pub use error::{BehaviorError, BehaviorResult};
pub use mode::{Behavior, BehaviorMode, DEFAULT_EVADE_RADIUS, DebugRadii};
pub use params::{ArriveBands, MotionParams};
pub use state::MotionState;
pub use steer::{SteerInput, SteerOutput, steer};
