//! A passive behavior model — agents never move.

use ue_agent::{Agent, Decision};
use ue_core::AgentRng;

use crate::{BehaviorModel, BehaviorResult, SimContext};

/// A [`BehaviorModel`] that always targets the agent's current cell.
///
/// Useful as a baseline in tests or for "passive" populations that forage and
/// generate traffic in place.  Does not learn.
#[derive(Copy, Clone, Debug, Default)]
pub struct StayBehavior;

impl BehaviorModel for StayBehavior {
    fn decide(
        &self,
        agent: &Agent,
        ctx:   &SimContext<'_>,
        _rng:  &mut AgentRng,
    ) -> BehaviorResult<Decision> {
        let here = agent.position();
        Ok(Decision {
            target:    here,
            resources: ctx.view.resource().get(here).map_err(ue_agent::AgentError::from)?,
            traffic:   ctx.view.traffic().get(here).map_err(ue_agent::AgentError::from)?,
            score:     0.0,
            explored:  false,
        })
    }

    fn learn(&self, _agent: &mut Agent, _config: &ue_core::LearningConfig) {}
}
