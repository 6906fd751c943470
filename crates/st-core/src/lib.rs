//! `st-core` — foundational types for the `steer_rs` steering simulator.
//!
//! This crate is a dependency of every other `st-*` crate.  It intentionally
//! has no `st-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`vec2`]        | `Vec2`, `normalize`, `clamp_magnitude`, `magnitude`   |
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (seeded scenario RNG)                        |
//! | [`error`]       | `SteerError`, `SteerResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SteerError, SteerResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
pub use vec2::{Vec2, clamp_magnitude, magnitude, normalize};
