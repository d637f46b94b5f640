//! Agent storage: `AgentStore` (the agents) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! A batched decision phase needs `&mut AgentRng` for each agent and `&Agent`
//! for the same agents at once.  Keeping the RNGs outside the store lets the
//! engine borrow both independently:
//!
//! ```ignore
//! let decisions = sim.rngs.as_mut_slice()
//!     .par_iter_mut()
//!     .zip(sim.agents.as_slice().par_iter())
//!     .map(|(rng, agent)| behavior.decide(agent, &view, rng))
//!     .collect::<Vec<_>>();
//! ```

use ue_core::{AgentId, AgentRng, Cell};

use crate::Agent;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, index-aligned with [`AgentStore`].
#[derive(Clone, Default)]
pub struct AgentRngs {
    inner: Vec<AgentRng>,
}

impl AgentRngs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed and append the RNG for `agent`.
    ///
    /// Must be called in the same order agents are pushed to the store.
    pub fn push(&mut self, global_seed: u64, agent: AgentId) {
        debug_assert_eq!(agent.index(), self.inner.len());
        self.inner.push(AgentRng::new(global_seed, agent));
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut AgentRng> {
        self.inner.get_mut(agent.index())
    }

    pub fn as_mut_slice(&mut self) -> &mut [AgentRng] {
        &mut self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// All agents, in insertion order.
///
/// The `AgentId` value is the index; ids are assigned by [`AgentStore::next_id`]
/// and never reused.  The engine processes agents in this order every tick.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next pushed agent must carry.
    pub fn next_id(&self) -> AgentId {
        AgentId(self.agents.len() as u32)
    }

    /// Append an agent.  Its id must equal [`next_id`](Self::next_id).
    pub fn push(&mut self, agent: Agent) -> AgentId {
        debug_assert_eq!(agent.id(), self.next_id());
        let id = agent.id();
        self.agents.push(agent);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(agent.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> + '_ {
        self.agents.iter_mut()
    }

    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    pub fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    /// Current positions, in id order.
    pub fn positions(&self) -> Vec<Cell> {
        self.agents.iter().map(Agent::position).collect()
    }

    /// Mean of `f` over all agents; 0 when empty.
    pub fn mean_by<F>(&self, f: F) -> f64
    where
        F: Fn(&Agent) -> f64,
    {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.agents.iter().map(f).sum::<f64>() / self.agents.len() as f64
    }
}
