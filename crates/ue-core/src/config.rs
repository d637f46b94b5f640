//! Simulation configuration.
//!
//! Every default equals the reference constants of the urban ecosystem
//! model, so `EcosystemConfig::new(w, h, seed)` reproduces the reference run.
//! Typically built in code by the driver, or loaded from JSON with the
//! `serde` feature (all fields are optional in that form).

use crate::{EdgePolicy, Tick, UeError, UeResult};

// ── EcosystemConfig ───────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EcosystemConfig {
    /// Grid width in cells.  Must be > 0.
    pub width: u32,

    /// Grid height in cells.  Must be > 0.
    pub height: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    /// `None` draws a seed from OS entropy at build time.
    pub seed: Option<u64>,

    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,

    /// Deliver a world snapshot to the observer every N ticks.  0 = never.
    pub output_interval_ticks: u64,

    /// Number of per-tick aggregate records kept; the oldest is evicted first.
    pub history_capacity: usize,

    /// How the per-tick decision step is ordered relative to consumption.
    pub decision_phase: DecisionPhase,

    pub dynamics: DynamicsConfig,
    pub agents:   AgentConfig,
    pub learning: LearningConfig,
}

impl EcosystemConfig {
    /// Reference configuration for a `width × height` grid.
    pub fn new(width: u32, height: u32, seed: Option<u64>) -> Self {
        Self { width, height, seed, ..Self::default() }
    }

    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Number of cells in one grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reject configurations that could never produce a valid engine.
    ///
    /// Runs before any simulation state is created.
    pub fn validate(&self) -> UeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(UeError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.history_capacity == 0 {
            return Err(UeError::Config("history_capacity must be positive".into()));
        }
        self.dynamics.validate()?;
        self.agents.validate()?;
        self.learning.validate()
    }
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        Self {
            width:                 40,
            height:                40,
            seed:                  None,
            total_ticks:           5_000,
            output_interval_ticks: 0,
            history_capacity:      10_000,
            decision_phase:        DecisionPhase::default(),
            dynamics:              DynamicsConfig::default(),
            agents:                AgentConfig::default(),
            learning:              LearningConfig::default(),
        }
    }
}

// ── DecisionPhase ─────────────────────────────────────────────────────────────

/// Ordering of consumption, decision and movement within one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecisionPhase {
    /// Per agent, in insertion order: consume, decide, move.  Later agents
    /// perceive the depletion caused by earlier agents this tick.
    #[default]
    Interleaved,
    /// All agents consume in insertion order; every decision is then
    /// computed against the same read-only view (in parallel with the
    /// `parallel` feature of `ue-sim`); moves are applied in insertion order.
    Batched,
}

// ── DynamicsConfig ────────────────────────────────────────────────────────────

/// Capacities and rates of the three grid fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DynamicsConfig {
    pub resource_capacity:  i32,
    pub traffic_capacity:   i32,
    pub pollution_capacity: i32,

    /// Fraction of a resource cell removed and spread to its neighbors each
    /// tick (floored, at least 1 when the cell is non-empty).
    pub diffusion_rate: f64,

    /// Flat amount added to every resource cell after diffusion.
    pub regeneration_amount: i32,

    /// Fraction of traffic removed per tick.
    pub traffic_decay_rate: f64,

    /// Fraction of pollution removed per tick, after agent emissions.
    pub pollution_decay_rate: f64,

    /// Initial resource cells are uniform in `[0, initial_resource_max]`.
    pub initial_resource_max: i32,

    /// Neighborhood policy for resource diffusion.
    pub diffusion_edge: EdgePolicy,
}

impl DynamicsConfig {
    pub fn validate(&self) -> UeResult<()> {
        for (name, cap) in [
            ("resource_capacity",  self.resource_capacity),
            ("traffic_capacity",   self.traffic_capacity),
            ("pollution_capacity", self.pollution_capacity),
        ] {
            if cap <= 0 {
                return Err(UeError::Config(format!("{name} must be positive, got {cap}")));
            }
        }
        for (name, rate) in [
            ("diffusion_rate",       self.diffusion_rate),
            ("traffic_decay_rate",   self.traffic_decay_rate),
            ("pollution_decay_rate", self.pollution_decay_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(UeError::Config(format!("{name} must be within [0, 1], got {rate}")));
            }
        }
        if self.regeneration_amount < 0 {
            return Err(UeError::Config("regeneration_amount must not be negative".into()));
        }
        if !(0..=self.resource_capacity).contains(&self.initial_resource_max) {
            return Err(UeError::Config(format!(
                "initial_resource_max must be within [0, {}], got {}",
                self.resource_capacity, self.initial_resource_max
            )));
        }
        Ok(())
    }
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            resource_capacity:    100,
            traffic_capacity:     20,
            pollution_capacity:   100,
            diffusion_rate:       0.07,
            regeneration_amount:  1,
            traffic_decay_rate:   0.1,
            pollution_decay_rate: 0.05,
            initial_resource_max: 100,
            diffusion_edge:       EdgePolicy::Wrap,
        }
    }
}

// ── AgentConfig ───────────────────────────────────────────────────────────────

/// Constants of the agent decision model and memory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Neighborhood policy for vision scans.
    pub vision_edge: EdgePolicy,

    /// Length of the rolling experience memory.
    pub memory_capacity: usize,

    /// Length of the visited-cell trail.
    pub visited_capacity: usize,

    /// Experiences with an outcome above this value count as successes in
    /// goal memory.
    pub goal_outcome_threshold: f64,

    /// Exploration probability per unit of the `exploration` trait.
    pub exploration_scale: f64,

    /// Score penalty per unit of Euclidean distance.
    pub distance_penalty: f64,

    /// Below this target traffic, an agent's stress recovers.
    pub quiet_traffic_threshold: i32,

    /// Agents with `social` above this are tolerant of crowds.
    pub social_threshold: f64,
}

impl AgentConfig {
    pub fn validate(&self) -> UeResult<()> {
        if self.memory_capacity == 0 || self.visited_capacity == 0 {
            return Err(UeError::Config("memory capacities must be positive".into()));
        }
        if !(0.0..=10.0).contains(&self.exploration_scale) {
            return Err(UeError::Config(format!(
                "exploration_scale must be within [0, 10], got {}",
                self.exploration_scale
            )));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            vision_edge:             EdgePolicy::Wrap,
            memory_capacity:         50,
            visited_capacity:        100,
            goal_outcome_threshold:  50.0,
            exploration_scale:       0.1,
            distance_penalty:        0.5,
            quiet_traffic_threshold: 5,
            social_threshold:        0.6,
        }
    }
}

// ── LearningConfig ────────────────────────────────────────────────────────────

/// Closed interval applied to every preference weight after adaptation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightBounds {
    pub min: f64,
    pub max: f64,
}

impl WeightBounds {
    #[inline]
    pub fn clamp(&self, w: f64) -> f64 {
        w.clamp(self.min, self.max)
    }
}

/// Reinforcement feedback applied after every tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LearningConfig {
    /// `false` skips the learning step entirely.
    pub enabled: bool,

    pub learning_rate: f64,

    /// `None` leaves preference weights unbounded.
    pub weight_bounds: Option<WeightBounds>,
}

impl LearningConfig {
    pub fn validate(&self) -> UeResult<()> {
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(UeError::Config(format!(
                "learning_rate must be a non-negative number, got {}",
                self.learning_rate
            )));
        }
        match self.weight_bounds {
            Some(b) if !(b.min.is_finite() && b.max.is_finite() && b.min <= b.max) => {
                Err(UeError::Config(format!(
                    "weight bounds must satisfy min <= max, got [{}, {}]",
                    b.min, b.max
                )))
            }
            _ => Ok(()),
        }
    }
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            enabled:       true,
            learning_rate: 0.01,
            weight_bounds: None,
        }
    }
}
