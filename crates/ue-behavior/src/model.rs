//! The `BehaviorModel` trait — the main extension point for user code.

use ue_agent::{Agent, Decision};
use ue_core::{AgentRng, LearningConfig};

use crate::{BehaviorResult, SimContext};

/// Pluggable agent behavior.
///
/// Implement this trait to define how agents pick their next cell.  `decide`
/// receives a read-only [`SimContext`] and the agent's own [`AgentRng`], so
/// the outcome is deterministic regardless of thread ordering.
///
/// # Required methods
///
/// Only [`decide`][Self::decide] is required.  [`learn`][Self::learn]
/// defaults to the standard reinforcement update.
///
/// # Thread safety
///
/// The batched decision phase may call `decide` for many agents in parallel
/// via Rayon, so implementations must be `Send + Sync`.  Per-agent state
/// lives in the [`Agent`], not in the model.
///
/// # Example
///
/// ```rust,ignore
/// struct Greedy;
///
/// impl BehaviorModel for Greedy {
///     fn decide(&self, agent: &Agent, ctx: &SimContext<'_>, _rng: &mut AgentRng) -> BehaviorResult<Decision> {
///         let best = ctx.view.visible(agent.position(), agent.vision)?
///             .into_iter()
///             .max_by_key(|c| c.resources)
///             .expect("center is always visible");
///         Ok(Decision { target: best.cell, resources: best.resources,
///                       traffic: best.traffic, score: best.resources as f64, explored: false })
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Choose the agent's next cell.
    ///
    /// The engine rejects a target outside the grid with a bounds violation
    /// and leaves the whole tick uncommitted.
    fn decide(
        &self,
        agent: &Agent,
        ctx:   &SimContext<'_>,
        rng:   &mut AgentRng,
    ) -> BehaviorResult<Decision>;

    /// Called once per agent at the end of every tick when learning is
    /// enabled.
    ///
    /// Default: reinforce with [`Agent::reward`].
    fn learn(&self, agent: &mut Agent, config: &LearningConfig) {
        let reward = agent.reward();
        agent.adapt_preferences(reward, config);
    }
}
