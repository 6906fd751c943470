//! `st-relay` — cross-agent distress notifications.
//!
//! An Evade-mode agent that enters or leaves its evade radius emits a distress
//! signal.  The relay maps each evader to the agents that asked to hear about
//! it and fans the boolean out to them, in the order they subscribed.
//!
//! Agents never hold references to each other: the relay is a plain
//! `AgentId → [AgentId]` registry owned by the simulation driver, and delivery
//! goes through the narrow [`DistressSink`] trait.
//!
//! # Crate layout
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`relay`]  | `DistressRelay`, `DistressSink`, `DistressFlags`     |
//! | [`error`]  | `RelayError`, `RelayResult<T>`                       |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                |
//! |-----------|-------------------------------------------------------|
//! | `fx-hash` | Uses `FxHashMap` for the subscription map.            |

pub mod error;
pub mod relay;


pub use error::{RelayError, RelayResult};
pub use relay::{DistressFlags, DistressRelay, DistressSink};
