//! Read-only simulation state passed to every behavior callback.

use ue_agent::{AgentStore, Perception};
use ue_core::Tick;

/// A read-only snapshot of the simulation state passed to every
/// [`BehaviorModel`][crate::BehaviorModel] callback.
///
/// Built by the engine for each decision.  Under the interleaved phase it is
/// rebuilt per agent (the resource field changes as agents forage); under the
/// batched phase one context is shared by the whole population.
///
/// # Lifetimes
///
/// All borrows live for the duration of the decision.  The engine never
/// allows mutable access to these structures while `SimContext` is live.
#[derive(Copy, Clone)]
pub struct SimContext<'a> {
    /// Tick being computed.
    pub tick: Tick,

    /// Grids as the agent sees them.  Traffic is the start-of-tick snapshot.
    pub view: Perception<'a>,

    /// Read-only view of every agent.
    pub agents: &'a AgentStore,
}

impl<'a> SimContext<'a> {
    #[inline]
    pub fn new(tick: Tick, view: Perception<'a>, agents: &'a AgentStore) -> Self {
        Self { tick, view, agents }
    }
}
