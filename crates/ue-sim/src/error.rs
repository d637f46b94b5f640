use thiserror::Error;

use ue_agent::AgentError;
use ue_behavior::BehaviorError;
use ue_core::{AgentId, Cell, UeError};
use ue_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// An agent position or chosen target lies outside the grid.  Always a
    /// logic defect; the tick that produced it is not committed.
    #[error("bounds violation: agent {agent} resolved to {cell}")]
    BoundsViolation { agent: AgentId, cell: Cell },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Core(#[from] UeError),
}

impl From<BehaviorError> for SimError {
    fn from(e: BehaviorError) -> Self {
        match e {
            BehaviorError::Agent(AgentError::OffGrid { agent, cell, .. }) => {
                SimError::BoundsViolation { agent, cell }
            }
            BehaviorError::Agent(inner) => SimError::Agent(inner),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
