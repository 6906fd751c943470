use st_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("agent {0} cannot subscribe to its own distress signal")]
    SelfSubscription(AgentId),
}

pub type RelayResult<T> = Result<T, RelayError>;
