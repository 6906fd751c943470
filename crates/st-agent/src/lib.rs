//! `st-agent` — Structure-of-Arrays agent storage for the `steer_rs` simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`target`]      | `Target` — what an agent steers relative to               |
//! | [`store`]       | `AgentStore` (SoA arrays)                                 |
//! | [`builder`]     | `AgentStoreBuilder` (fluent, validated construction)      |
//!
//! Positions and velocities are not stored here: they belong to the host's
//! physics collaborator (see `st-motion`).  The store only holds what the
//! steering core owns.

pub mod builder;
pub mod store;
pub mod target;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use store::AgentStore;
pub use target::Target;
