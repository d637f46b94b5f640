//! Per-tick aggregate statistics and their rolling history.

use std::collections::VecDeque;
use std::fmt;

use ue_agent::{Agent, AgentStore};
use ue_core::{DynamicsConfig, Tick};
use ue_grid::Grid;

// ── TickStats ─────────────────────────────────────────────────────────────────

/// Aggregates recorded at the end of every tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickStats {
    /// The tick these statistics describe.
    pub tick:              Tick,
    pub mean_resource:     f64,
    pub total_traffic:     i64,
    pub mean_pollution:    f64,
    /// 0 with no agents.
    pub mean_satisfaction: f64,
    /// 0 with no agents.
    pub mean_stress:       f64,
    /// `total_traffic / max(agents, 1)`.
    pub traffic_per_agent: f64,
    /// Composite score in `[0, 100]`; see [`system_health`].
    pub system_health:     f64,
}

impl TickStats {
    pub(crate) fn collect(
        tick:      Tick,
        resource:  &Grid,
        traffic:   &Grid,
        pollution: &Grid,
        agents:    &AgentStore,
        dynamics:  &DynamicsConfig,
    ) -> Self {
        let mean_resource  = resource.mean();
        let mean_pollution = pollution.mean();
        let total_traffic  = traffic.total();
        Self {
            tick,
            mean_resource,
            total_traffic,
            mean_pollution,
            mean_satisfaction: agents.mean_by(Agent::satisfaction),
            mean_stress:       agents.mean_by(Agent::stress),
            traffic_per_agent: total_traffic as f64 / agents.len().max(1) as f64,
            system_health:     system_health(mean_resource, mean_pollution, traffic.mean(), dynamics),
        }
    }

    pub fn status(&self) -> HealthStatus {
        HealthStatus::from_health(self.system_health)
    }
}

/// Weighted health of the whole city, in `[0, 100]`.
///
/// `(r̄/r_cap)·0.4 + (1 − p̄/p_cap)·0.3 + (1 − t̄/t_cap)·0.3`, scaled to
/// percent and clamped.
pub fn system_health(
    mean_resource:  f64,
    mean_pollution: f64,
    mean_traffic:   f64,
    dynamics:       &DynamicsConfig,
) -> f64 {
    let resources = mean_resource / dynamics.resource_capacity as f64;
    let clean     = 1.0 - mean_pollution / dynamics.pollution_capacity as f64;
    let flowing   = 1.0 - mean_traffic / dynamics.traffic_capacity as f64;
    ((resources * 0.4 + clean * 0.3 + flowing * 0.3) * 100.0).clamp(0.0, 100.0)
}

/// Coarse banding of [`TickStats::system_health`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum HealthStatus {
    /// Above 60.
    Good,
    /// Above 30.
    Fair,
    Critical,
}

impl HealthStatus {
    pub fn from_health(health: f64) -> Self {
        if health > 60.0 {
            HealthStatus::Good
        } else if health > 30.0 {
            HealthStatus::Fair
        } else {
            HealthStatus::Critical
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HealthStatus::Good     => "good",
            HealthStatus::Fair     => "fair",
            HealthStatus::Critical => "critical",
        })
    }
}

// ── History ───────────────────────────────────────────────────────────────────

/// Rolling record of [`TickStats`], oldest first.
#[derive(Clone, Debug)]
pub struct History {
    entries:  VecDeque<TickStats>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity.min(1024)), capacity }
    }

    pub(crate) fn push(&mut self, stats: TickStats) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(stats);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&TickStats> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TickStats> + '_ {
        self.entries.iter()
    }

    /// One field of every retained entry, oldest first.
    ///
    /// ```rust,ignore
    /// let resource_curve = sim.history().series(|s| s.mean_resource);
    /// ```
    pub fn series<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(&TickStats) -> f64,
    {
        self.entries.iter().map(f).collect()
    }
}
