use st_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("agent {agent} is out of range for {count} bodies")]
    AgentOutOfRange { agent: AgentId, count: usize },
}

pub type MotionResult<T> = Result<T, MotionError>;
