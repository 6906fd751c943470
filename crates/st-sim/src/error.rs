use st_core::{AgentId, SteerError};
use st_relay::RelayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] SteerError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{what} refers to unknown agent {agent}")]
    AgentNotFound {
        agent: AgentId,
        what:  &'static str,
    },

    #[error("agent {0} cannot target itself")]
    SelfTarget(AgentId),

    #[error("distress relay error: {0}")]
    Relay(#[from] RelayError),
}

pub type SimResult<T> = Result<T, SimError>;
