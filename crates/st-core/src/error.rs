//! Framework error type.
//!
//! Sub-crates define their own error enums (`BehaviorError`, `SimError`, …);
//! `SimError` wraps `SteerError` as one variant.

use thiserror::Error;

/// Errors raised by `st-core` itself.
#[derive(Debug, Error)]
pub enum SteerError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `st-*` crates.
pub type SteerResult<T> = Result<T, SteerError>;
