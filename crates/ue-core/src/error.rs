//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into `UeError`
//! or wrap it as one variant (`ue-sim` does the latter).

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `ue-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum UeError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ue-*` crates.
pub type UeResult<T> = Result<T, UeError>;
