//! Strongly typed agent identifier.
//!
//! The engine assigns ids at population time in insertion order, so an
//! `AgentId` is also the agent's index into the agent store.  The inner
//! integer is `pub` to allow direct indexing via `id.0 as usize`, but callers
//! should prefer [`AgentId::index`] for clarity.

use std::fmt;

/// Index of an agent in the engine's agent store.  Max ~4.3 billion agents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
