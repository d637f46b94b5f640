//! The default behavior: personality-weighted move scoring.

use ue_agent::{Agent, Decision};
use ue_core::AgentRng;

use crate::{BehaviorModel, BehaviorResult, SimContext};

/// Scores every visible cell with [`Agent::score_candidate`], takes the best
/// (ties broken at random), and occasionally explores.  Learns from the
/// standard reward.
#[derive(Copy, Clone, Debug, Default)]
pub struct AdaptiveBehavior;

impl BehaviorModel for AdaptiveBehavior {
    fn decide(
        &self,
        agent: &Agent,
        ctx:   &SimContext<'_>,
        rng:   &mut AgentRng,
    ) -> BehaviorResult<Decision> {
        Ok(agent.plan_move(&ctx.view, rng)?)
    }
}
