//! `st-sim` — fixed-step driver for the steer_rs simulator.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Inputs   — resolve each agent's target; snapshot position/velocity
//!                from the MotionSink (agents without a target get None).
//!   ② Compute  — st_behavior::steer for every targeted agent
//!                (parallel with the `parallel` feature).
//!   ③ Apply    — ascending AgentId:
//!                  commit motion state
//!                  clamp velocity to max_speed → MotionSink::set_velocity
//!                  distress signal → DistressRelay fan-out → listeners' flags
//!   ④ Advance  — MotionSink::advance(fixed_dt)
//!   ⑤ Report   — SimObserver::on_agent for every agent
//! ```
//!
//! Distress delivered in ③ is read by listeners in the next tick's ②, so the
//! one-tick latency is the same whatever the update order or thread count.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the compute phase on Rayon's thread pool.         |
//! | `fx-hash`  | FxHash for the relay's subscription map.               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use st_agent::{AgentStoreBuilder, Target};
//! use st_core::SimConfig;
//! use st_motion::KinematicBodies;
//! use st_sim::{NoopObserver, SimBuilder};
//!
//! let agents = AgentStoreBuilder::new().agent(evader, Target::Agent(hunter)).build()?;
//! let bodies = KinematicBodies::at(positions);
//! let mut sim = SimBuilder::new(config, agents, bodies)
//!     .subscriptions(pairs)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::AgentReport;
pub use sim::Sim;
