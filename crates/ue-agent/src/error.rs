use thiserror::Error;

use ue_core::{AgentId, Cell};
use ue_grid::GridError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent {agent} is at {cell}, outside the {width}x{height} grid")]
    OffGrid {
        agent:  AgentId,
        cell:   Cell,
        width:  u32,
        height: u32,
    },

    #[error("agent {agent} sees no candidate cells from {cell}")]
    EmptyNeighborhood { agent: AgentId, cell: Cell },

    #[error("perception grids disagree in shape")]
    ShapeMismatch,

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type AgentResult<T> = Result<T, AgentError>;
