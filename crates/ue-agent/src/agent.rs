//! The `Agent` record: position, internal state, memory, and learning.
//!
//! Decision scoring lives in [`crate::decision`]; this module owns every
//! mutation of an agent's own state.  Grid writes are never performed here.

use std::collections::VecDeque;

use ue_core::{AgentConfig, AgentId, Cell, LearningConfig};

use crate::{Experience, GoalMemory, Memory, Personality, PreferenceWeights};

/// Upper bound of energy, stress, and satisfaction.
pub const STATE_MAX: f64 = 100.0;

const ENERGY_DRAIN_PER_TRAFFIC:  f64 = 0.1;
const STRESS_PER_TRAFFIC:        f64 = 0.05;
const SATISFACTION_PER_RESOURCE: f64 = 0.1;
const SATISFACTION_DECAY:        f64 = 2.0;
const STRESS_RECOVERY:           f64 = 1.0;

/// Weight of lifetime collection in the learning reward.
const REWARD_PER_RESOURCE: f64 = 0.05;

/// One adaptive agent.
///
/// `Clone` is cheap enough for the engine to take a working copy of the whole
/// population each tick and commit it only when the tick succeeds.
#[derive(Clone, Debug)]
pub struct Agent {
    id:       AgentId,
    position: Cell,

    /// Maximum amount taken from the current cell per tick.
    pub forage_amount: i32,
    /// Euclidean vision radius in cells.
    pub vision: u32,

    resources_collected: i64,

    energy:       f64,
    stress:       f64,
    satisfaction: f64,

    pub personality: Personality,
    pub weights:     PreferenceWeights,

    memory:      Memory,
    goal_memory: GoalMemory,

    visited:          VecDeque<Cell>,
    visited_capacity: usize,
    move_count:       u64,
}

impl Agent {
    /// A fresh agent with energy 100, stress 0, satisfaction 50.
    pub fn new(
        id:            AgentId,
        position:      Cell,
        forage_amount: i32,
        vision:        u32,
        personality:   Personality,
        config:        &AgentConfig,
    ) -> Self {
        Self {
            id,
            position,
            forage_amount,
            vision,
            resources_collected: 0,
            energy:       STATE_MAX,
            stress:       0.0,
            satisfaction: 50.0,
            personality,
            weights:      PreferenceWeights::default(),
            memory:       Memory::with_capacity(config.memory_capacity),
            goal_memory:  GoalMemory::new(),
            visited:          VecDeque::with_capacity(config.visited_capacity),
            visited_capacity: config.visited_capacity,
            move_count:       0,
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn resources_collected(&self) -> i64 {
        self.resources_collected
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn stress(&self) -> f64 {
        self.stress
    }

    pub fn satisfaction(&self) -> f64 {
        self.satisfaction
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn goal_memory(&self) -> &GoalMemory {
        &self.goal_memory
    }

    /// Most recent cells moved to, oldest first.
    pub fn visited(&self) -> impl Iterator<Item = Cell> + '_ {
        self.visited.iter().copied()
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Learning reward: `satisfaction − stress + 0.05 × resources_collected`.
    pub fn reward(&self) -> f64 {
        self.satisfaction - self.stress + REWARD_PER_RESOURCE * self.resources_collected as f64
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Credit resources taken from the grid.  Negative amounts are ignored.
    pub fn collect(&mut self, amount: i32) {
        if amount > 0 {
            self.resources_collected += amount as i64;
        }
    }

    /// Relocate to `cell` and record it in the visited trail.
    ///
    /// The caller is responsible for `cell` being on the grid.
    pub fn move_to(&mut self, cell: Cell) {
        self.position = cell;
        if self.visited_capacity > 0 {
            if self.visited.len() == self.visited_capacity {
                self.visited.pop_front();
            }
            self.visited.push_back(cell);
        }
        self.move_count += 1;
    }

    /// Apply the perceived conditions of the chosen target to energy, stress,
    /// and satisfaction.  All three stay within `[0, 100]`.
    pub fn update_internal_state(&mut self, resources: i32, traffic: i32, config: &AgentConfig) {
        let t = traffic as f64;

        self.energy = (self.energy - t * ENERGY_DRAIN_PER_TRAFFIC).clamp(0.0, STATE_MAX);
        self.stress = (self.stress + t * STRESS_PER_TRAFFIC).clamp(0.0, STATE_MAX);

        self.satisfaction = if resources > 0 {
            (self.satisfaction + resources as f64 * SATISFACTION_PER_RESOURCE).min(STATE_MAX)
        } else {
            (self.satisfaction - SATISFACTION_DECAY).max(0.0)
        };

        if traffic < config.quiet_traffic_threshold {
            self.stress = (self.stress - STRESS_RECOVERY).max(0.0);
        }
    }

    /// Append an experience; an outcome above the configured threshold also
    /// counts as a success for `location` in goal memory.
    pub fn add_memory(
        &mut self,
        location:  Cell,
        resources: i32,
        traffic:   i32,
        outcome:   f64,
        config:    &AgentConfig,
    ) {
        let timestep = self.move_count;
        self.memory.push(Experience { location, resources, traffic, outcome, timestep });
        if outcome > config.goal_outcome_threshold {
            self.goal_memory.record_success(location);
        }
    }

    /// Reinforce preferences from a scalar reward.
    ///
    /// Positive reward: resource weight up by the learning rate, traffic
    /// weight down by half of it, efficiency up by half of it (capped at 1).
    /// Otherwise: resource weight down by half the rate and risk tolerance
    /// down by the full rate (floored at 0.3).  Weights are clamped afterwards
    /// when bounds are configured.
    pub fn adapt_preferences(&mut self, reward: f64, config: &LearningConfig) {
        let lr = config.learning_rate;
        if reward > 0.0 {
            self.weights.resources += lr;
            self.weights.traffic   -= lr * 0.5;
            self.personality.efficiency = (self.personality.efficiency + lr * 0.5).min(1.0);
        } else {
            self.weights.resources -= lr * 0.5;
            self.personality.risk_tolerance =
                (self.personality.risk_tolerance - lr).max(Personality::MIN_RISK_TOLERANCE);
        }

        if let Some(bounds) = config.weight_bounds {
            let w = &mut self.weights;
            w.resources   = bounds.clamp(w.resources);
            w.traffic     = bounds.clamp(w.traffic);
            w.pollution   = bounds.clamp(w.pollution);
            w.comfort     = bounds.clamp(w.comfort);
            w.familiarity = bounds.clamp(w.familiarity);
        }
    }
}
