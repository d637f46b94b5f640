//! Plain data row types written by output backends.

use ue_agent::Agent;
use ue_core::Tick;
use ue_sim::TickStats;

/// One agent's position and internal state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:            u32,
    pub tick:                u64,
    pub x:                   u32,
    pub y:                   u32,
    pub energy:              f64,
    pub stress:              f64,
    pub satisfaction:        f64,
    pub resources_collected: i64,
}

impl AgentSnapshotRow {
    pub fn from_agent(tick: Tick, agent: &Agent) -> Self {
        let pos = agent.position();
        Self {
            agent_id:            agent.id().0,
            tick:                tick.0,
            x:                   pos.x,
            y:                   pos.y,
            energy:              agent.energy(),
            stress:              agent.stress(),
            satisfaction:        agent.satisfaction(),
            resources_collected: agent.resources_collected(),
        }
    }
}

/// Field and population aggregates for one committed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub mean_resource:     f64,
    pub total_traffic:     i64,
    pub mean_pollution:    f64,
    pub mean_satisfaction: f64,
    pub mean_stress:       f64,
    pub system_health:     f64,
}

impl From<&TickStats> for TickSummaryRow {
    fn from(s: &TickStats) -> Self {
        Self {
            tick:              s.tick.0,
            mean_resource:     s.mean_resource,
            total_traffic:     s.total_traffic,
            mean_pollution:    s.mean_pollution,
            mean_satisfaction: s.mean_satisfaction,
            mean_stress:       s.mean_stress,
            system_health:     s.system_health,
        }
    }
}
