//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use ue_agent::{AgentRngs, AgentStore, Personality};
use ue_behavior::{AdaptiveBehavior, BehaviorModel};
use ue_core::{Cell, EcosystemConfig, SimRng, Tick};
use ue_grid::{Grid, GridKind};

use crate::sim::World;
use crate::{History, Sim, SimError, SimResult};

// ── AgentSpec ─────────────────────────────────────────────────────────────────

/// An explicitly placed agent.
///
/// `personality: None` samples one from the engine's RNG, exactly as
/// [`Sim::populate`] does.  `forage_amount` must be positive and `vision`
/// in `1..=max(width, height)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSpec {
    pub position:      Cell,
    pub forage_amount: i32,
    pub vision:        u32,
    pub personality:   Option<Personality>,
}

impl AgentSpec {
    pub fn new(position: Cell, forage_amount: i32, vision: u32) -> Self {
        Self { position, forage_amount, vision, personality: None }
    }

    pub fn with_personality(mut self, personality: Personality) -> Self {
        self.personality = Some(personality);
        self
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`EcosystemConfig`] — dimensions, seed, dynamics, agent and learning
///   constants
/// - `B: BehaviorModel` — [`AdaptiveBehavior`] unless
///   [`with_behavior`](SimBuilder::with_behavior) is used
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                       |
/// |-------------------------|-----------------------------------------------|
/// | `.resource_grid(g)`     | Uniform in `[0, initial_resource_max]`        |
/// | `.traffic_grid(g)`      | All zero                                      |
/// | `.pollution_grid(g)`    | All zero                                      |
/// | `.agent(spec)`          | No agents (use [`Sim::populate`] afterwards)  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(EcosystemConfig::new(40, 40, Some(42)))
///     .build()?;
/// sim.populate(60, 5, 5)?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:    EcosystemConfig,
    behavior:  B,
    resource:  Option<Grid>,
    traffic:   Option<Grid>,
    pollution: Option<Grid>,
    agents:    Vec<AgentSpec>,
}

impl SimBuilder<AdaptiveBehavior> {
    /// Builder for the standard adaptive agents.
    pub fn new(config: EcosystemConfig) -> Self {
        Self::with_behavior(config, AdaptiveBehavior)
    }
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Builder with a custom behavior model.
    pub fn with_behavior(config: EcosystemConfig, behavior: B) -> Self {
        Self {
            config,
            behavior,
            resource:  None,
            traffic:   None,
            pollution: None,
            agents:    Vec::new(),
        }
    }

    /// Start from a given resource field instead of a random one.
    ///
    /// Shape and capacity must match the configuration.
    pub fn resource_grid(mut self, grid: Grid) -> Self {
        self.resource = Some(grid);
        self
    }

    pub fn traffic_grid(mut self, grid: Grid) -> Self {
        self.traffic = Some(grid);
        self
    }

    pub fn pollution_grid(mut self, grid: Grid) -> Self {
        self.pollution = Some(grid);
        self
    }

    /// Add one explicitly placed agent.  Agents are created in call order.
    pub fn agent(mut self, spec: AgentSpec) -> Self {
        self.agents.push(spec);
        self
    }

    pub fn agents<I: IntoIterator<Item = AgentSpec>>(mut self, specs: I) -> Self {
        self.agents.extend(specs);
        self
    }

    /// Validate inputs, initialize the grids, place the agents, and return a
    /// ready-to-run [`Sim`].
    ///
    /// Nothing is created if validation fails.
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let cfg      = &self.config;
        let dynamics = &cfg.dynamics;
        let seed = match cfg.seed {
            Some(s) => s,
            None => {
                let s = SimRng::entropy_seed();
                info!(seed = s, "no seed configured; drew one from OS entropy");
                s
            }
        };
        let mut sim_rng = SimRng::new(seed);

        // ── Grids ─────────────────────────────────────────────────────────
        let resource = match self.resource {
            Some(g) => checked(g, GridKind::Resource, cfg, dynamics.resource_capacity)?,
            None => {
                let max = dynamics.initial_resource_max;
                Grid::from_fn(cfg.width, cfg.height, dynamics.resource_capacity, |_| {
                    sim_rng.gen_range(0..=max)
                })?
            }
        };
        let traffic = match self.traffic {
            Some(g) => checked(g, GridKind::Traffic, cfg, dynamics.traffic_capacity)?,
            None    => Grid::new(cfg.width, cfg.height, dynamics.traffic_capacity)?,
        };
        let pollution = match self.pollution {
            Some(g) => checked(g, GridKind::Pollution, cfg, dynamics.pollution_capacity)?,
            None    => Grid::new(cfg.width, cfg.height, dynamics.pollution_capacity)?,
        };

        info!(
            width  = cfg.width,
            height = cfg.height,
            seed,
            phase  = ?cfg.decision_phase,
            "simulation built"
        );

        let mut sim = Sim {
            history:  History::new(self.config.history_capacity),
            config:   self.config,
            seed,
            tick:     Tick::ZERO,
            world:    World {
                resource,
                traffic,
                pollution,
                agents: AgentStore::new(),
                rngs:   AgentRngs::new(),
            },
            sim_rng,
            behavior: self.behavior,
        };
        for spec in self.agents {
            sim.add_agent(spec)?;
        }
        Ok(sim)
    }
}

fn checked(grid: Grid, kind: GridKind, cfg: &EcosystemConfig, capacity: i32) -> SimResult<Grid> {
    if grid.width() != cfg.width || grid.height() != cfg.height {
        return Err(SimError::Config(format!(
            "{kind} grid is {}x{}, expected {}x{}",
            grid.width(),
            grid.height(),
            cfg.width,
            cfg.height
        )));
    }
    if grid.capacity() != capacity {
        return Err(SimError::Config(format!(
            "{kind} grid capacity is {}, expected {capacity}",
            grid.capacity()
        )));
    }
    Ok(grid)
}
