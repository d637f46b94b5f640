use thiserror::Error;

use ue_agent::AgentError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error(transparent)]
    Agent(#[from] AgentError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
