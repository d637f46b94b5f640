//! The `Sim` struct and its tick pipeline.

use tracing::{debug, error, info, trace};

use ue_agent::{Agent, AgentRngs, AgentStore, Decision, Perception, Personality};
use ue_behavior::{AdaptiveBehavior, BehaviorModel, BehaviorResult, SimContext};
use ue_core::{AgentId, Cell, DecisionPhase, EcosystemConfig, SimRng, Tick, UeError};
use ue_grid::{
    Grid, GridKind, Sector, decay, density_map, deplete_and_diffuse, efficiency_map,
    emit_and_decay, regenerate, sector_means,
};

use crate::stats::system_health;
use crate::{AgentSpec, History, SimBuilder, SimError, SimObserver, SimResult, TickStats, WorldView};

// ── World ─────────────────────────────────────────────────────────────────────

/// Everything a tick mutates.
///
/// `step` clones this, advances the clone, and swaps it in only when the
/// whole tick succeeded.
#[derive(Clone)]
pub(crate) struct World {
    pub(crate) resource:  Grid,
    pub(crate) traffic:   Grid,
    pub(crate) pollution: Grid,
    pub(crate) agents:    AgentStore,
    pub(crate) rngs:      AgentRngs,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// `Sim<B>` owns the three grids and the agent population and advances them
/// one tick at a time:
///
/// 1. **Perception snapshot**: copy the traffic grid; every agent perceives
///    this copy for the whole tick.
/// 2. **Agents** (insertion order): consume `min(forage_amount, r)` at the
///    current cell, decide via [`BehaviorModel::decide`], move, add one unit
///    of traffic at the destination, update internal state, record memory.
///    Under [`DecisionPhase::Batched`] all agents consume first and all
///    decisions see one view (Rayon-parallel with the `parallel` feature).
/// 3. **Resource**: depletion + diffusion, then regeneration.
/// 4. **Traffic** decay.
/// 5. **Pollution**: add agent density, then decay.
/// 6. **Learning** (if enabled): [`BehaviorModel::learn`] per agent.
/// 7. **Statistics** appended to [`History`]; tick counter advanced.
///
/// A tick either commits completely or not at all.
///
/// Create via [`SimBuilder`] or [`Sim::new`].
pub struct Sim<B: BehaviorModel> {
    pub(crate) config:   EcosystemConfig,
    pub(crate) seed:     u64,
    pub(crate) tick:     Tick,
    pub(crate) world:    World,
    /// Drives grid initialization, placement and personality sampling.
    pub(crate) sim_rng:  SimRng,
    pub(crate) behavior: B,
    pub(crate) history:  History,
}

impl Sim<AdaptiveBehavior> {
    /// Reference engine: a `width × height` world with default constants and
    /// a random resource field.  `seed: None` draws one from OS entropy.
    pub fn new(width: u32, height: u32, seed: Option<u64>) -> SimResult<Self> {
        SimBuilder::new(EcosystemConfig::new(width, height, seed)).build()
    }
}

impl<B: BehaviorModel> Sim<B> {
    // ── Population ────────────────────────────────────────────────────────

    /// Add `n` agents at uniformly random cells with sampled personalities.
    ///
    /// `vision` must be in `1..=max(width, height)`.
    ///
    /// Returns the new ids in insertion order.  Nothing is added if the
    /// parameters are rejected.
    pub fn populate(&mut self, n: usize, forage_amount: i32, vision: u32) -> SimResult<Vec<AgentId>> {
        check_agent_params(&self.config, forage_amount, vision)?;
        let (w, h) = (self.config.width, self.config.height);
        let mut ids = Vec::with_capacity(n);
        for _ in 0..n {
            let x = self.sim_rng.gen_range(0..w);
            let y = self.sim_rng.gen_range(0..h);
            let personality = Personality::sample(&mut self.sim_rng);
            ids.push(self.insert(Cell::new(x, y), forage_amount, vision, personality));
        }
        info!(added = n, forage_amount, vision, population = self.world.agents.len(), "population added");
        Ok(ids)
    }

    /// Add one agent at an explicit position.
    pub fn add_agent(&mut self, spec: AgentSpec) -> SimResult<AgentId> {
        check_agent_params(&self.config, spec.forage_amount, spec.vision)?;
        let (w, h) = (self.config.width, self.config.height);
        if !spec.position.in_bounds(w, h) {
            return Err(SimError::Config(format!(
                "agent position {} is outside the {w}x{h} grid",
                spec.position
            )));
        }
        let personality = match spec.personality {
            Some(p) => p.clamped(),
            None    => Personality::sample(&mut self.sim_rng),
        };
        Ok(self.insert(spec.position, spec.forage_amount, spec.vision, personality))
    }

    fn insert(&mut self, position: Cell, forage_amount: i32, vision: u32, personality: Personality) -> AgentId {
        let id = self.world.agents.next_id();
        self.world.agents.push(Agent::new(id, position, forage_amount, vision, personality, &self.config.agents));
        self.world.rngs.push(self.seed, id);
        id
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        info!(
            from       = self.tick.0,
            to         = end.0,
            population = self.world.agents.len(),
            seed       = self.seed,
            "run starting"
        );
        while self.tick < end {
            self.observed_step(observer)?;
        }
        observer.on_sim_end(self.tick);
        info!(final_tick = self.tick.0, health = self.system_health(), "run finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);
        let stats = self.step()?;
        observer.on_tick_end(now, &stats);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(now, &self.world_view());
        }
        Ok(())
    }

    /// Advance one tick.
    ///
    /// On error the engine is left exactly as it was before the call.
    pub fn step(&mut self) -> SimResult<TickStats> {
        let now = self.tick;
        let mut next = self.world.clone();
        let stats = match self.advance(&mut next, now) {
            Ok(stats) => stats,
            Err(e) => {
                error!(tick = now.0, error = %e, "tick aborted; state left at previous tick");
                return Err(e);
            }
        };

        self.world = next;
        self.history.push(stats);
        self.tick = now.next();

        debug!(
            tick              = now.0,
            mean_resource     = stats.mean_resource,
            total_traffic     = stats.total_traffic,
            mean_pollution    = stats.mean_pollution,
            mean_satisfaction = stats.mean_satisfaction,
            mean_stress       = stats.mean_stress,
            health            = stats.system_health,
            "tick committed"
        );
        Ok(stats)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn advance(&self, w: &mut World, now: Tick) -> SimResult<TickStats> {
        let cfg = &self.config;

        // Every agent perceives congestion as it stood before anyone moved.
        let perceived_traffic = w.traffic.clone();

        match cfg.decision_phase {
            DecisionPhase::Interleaved => {
                for i in 0..w.agents.len() {
                    let id = AgentId(i as u32);
                    consume(w, id)?;
                    let decision = {
                        let view = Perception::new(&w.resource, &perceived_traffic, &w.pollution, &cfg.agents)?;
                        let ctx = SimContext::new(now, view, &w.agents);
                        let agent = w.agents.get(id).ok_or(UeError::AgentNotFound(id))?;
                        let rng = w.rngs.get_mut(id).ok_or(UeError::AgentNotFound(id))?;
                        self.behavior.decide(agent, &ctx, rng)?
                    };
                    self.apply(w, id, decision)?;
                }
            }
            DecisionPhase::Batched => {
                for i in 0..w.agents.len() {
                    consume(w, AgentId(i as u32))?;
                }
                let decisions = self.decide_all(w, &perceived_traffic, now)?;
                for (i, decision) in decisions.into_iter().enumerate() {
                    self.apply(w, AgentId(i as u32), decision?)?;
                }
            }
        }

        let d = &cfg.dynamics;
        deplete_and_diffuse(&mut w.resource, d.diffusion_rate, d.diffusion_edge);
        regenerate(&mut w.resource, d.regeneration_amount);
        decay(&mut w.traffic, d.traffic_decay_rate);
        let density = density_map(cfg.width, cfg.height, w.agents.iter().map(Agent::position))?;
        emit_and_decay(&mut w.pollution, &density, d.pollution_decay_rate)?;

        if cfg.learning.enabled {
            for agent in w.agents.iter_mut() {
                self.behavior.learn(agent, &cfg.learning);
            }
        }

        Ok(TickStats::collect(now, &w.resource, &w.traffic, &w.pollution, &w.agents, d))
    }

    /// Compute every agent's decision against one shared view.
    ///
    /// With the `parallel` Cargo feature this runs on Rayon's thread pool;
    /// each agent draws only from its own RNG, so the result is identical.
    fn decide_all(
        &self,
        w:       &mut World,
        traffic: &Grid,
        now:     Tick,
    ) -> SimResult<Vec<BehaviorResult<Decision>>> {
        let view     = Perception::new(&w.resource, traffic, &w.pollution, &self.config.agents)?;
        let ctx      = SimContext::new(now, view, &w.agents);
        let agents   = w.agents.as_slice();
        let rngs     = w.rngs.as_mut_slice();
        let behavior = &self.behavior;

        #[cfg(not(feature = "parallel"))]
        {
            Ok(agents
                .iter()
                .zip(rngs.iter_mut())
                .map(|(agent, rng)| behavior.decide(agent, &ctx, rng))
                .collect())
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            Ok(agents
                .par_iter()
                .zip(rngs.par_iter_mut())
                .map(|(agent, rng)| behavior.decide(agent, &ctx, rng))
                .collect())
        }
    }

    /// Move one agent to its chosen target and apply the side effects.
    fn apply(&self, w: &mut World, id: AgentId, decision: Decision) -> SimResult<()> {
        if !w.resource.contains(decision.target) {
            return Err(SimError::BoundsViolation { agent: id, cell: decision.target });
        }
        let agent = w.agents.get_mut(id).ok_or(UeError::AgentNotFound(id))?;
        trace!(
            agent    = id.0,
            from     = %agent.position(),
            to       = %decision.target,
            score    = decision.score,
            explored = decision.explored,
            "agent moved"
        );

        agent.move_to(decision.target);
        w.traffic.add(decision.target, 1)?;

        let params = &self.config.agents;
        agent.update_internal_state(decision.resources, decision.traffic, params);
        let outcome = agent.satisfaction();
        agent.add_memory(decision.target, decision.resources, decision.traffic, outcome, params);
        Ok(())
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    /// Ticks completed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The seed actually in use (drawn from entropy if none was configured).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &EcosystemConfig {
        &self.config
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn agents(&self) -> &AgentStore {
        &self.world.agents
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Borrow one of the committed grids.
    pub fn grid(&self, kind: GridKind) -> &Grid {
        match kind {
            GridKind::Resource  => &self.world.resource,
            GridKind::Traffic   => &self.world.traffic,
            GridKind::Pollution => &self.world.pollution,
        }
    }

    /// An owned copy of one grid, safe to retain across ticks.
    pub fn snapshot(&self, kind: GridKind) -> Grid {
        self.grid(kind).clone()
    }

    pub fn resource_snapshot(&self) -> Grid {
        self.snapshot(GridKind::Resource)
    }

    pub fn traffic_snapshot(&self) -> Grid {
        self.snapshot(GridKind::Traffic)
    }

    pub fn pollution_snapshot(&self) -> Grid {
        self.snapshot(GridKind::Pollution)
    }

    /// Agent positions in insertion order.
    pub fn agent_positions(&self) -> Vec<Cell> {
        self.world.agents.positions()
    }

    /// Mean satisfaction; 0 with no agents.
    pub fn mean_satisfaction(&self) -> f64 {
        self.population_mean("satisfaction", Agent::satisfaction)
    }

    /// Mean stress; 0 with no agents.
    pub fn mean_stress(&self) -> f64 {
        self.population_mean("stress", Agent::stress)
    }

    fn population_mean(&self, what: &'static str, f: fn(&Agent) -> f64) -> f64 {
        if self.world.agents.is_empty() {
            debug!(what, "mean requested with no agents; reporting 0");
        }
        self.world.agents.mean_by(f)
    }

    /// Agents per cell, row-major.
    pub fn density_map(&self) -> SimResult<Vec<u32>> {
        Ok(density_map(self.config.width, self.config.height, self.world.agents.iter().map(Agent::position))?)
    }

    /// `resource / (traffic + 1)` per cell, row-major.
    pub fn efficiency_map(&self) -> SimResult<Vec<f64>> {
        Ok(efficiency_map(&self.world.resource, &self.world.traffic)?)
    }

    /// Quadrant means of one grid.
    pub fn sector_means(&self, kind: GridKind) -> [(Sector, f64); 4] {
        sector_means(self.grid(kind))
    }

    /// Health of the committed world, in `[0, 100]`.
    pub fn system_health(&self) -> f64 {
        system_health(
            self.world.resource.mean(),
            self.world.pollution.mean(),
            self.world.traffic.mean(),
            &self.config.dynamics,
        )
    }

    /// Borrowed view of the committed world, as handed to observers.
    pub fn world_view(&self) -> WorldView<'_> {
        WorldView {
            resource:  &self.world.resource,
            traffic:   &self.world.traffic,
            pollution: &self.world.pollution,
            agents:    &self.world.agents,
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Take up to `forage_amount` from the agent's current cell.
fn consume(w: &mut World, id: AgentId) -> SimResult<()> {
    let agent = w.agents.get_mut(id).ok_or(UeError::AgentNotFound(id))?;
    let pos = agent.position();
    if !w.resource.contains(pos) {
        return Err(SimError::BoundsViolation { agent: id, cell: pos });
    }
    let taken = w.resource.take(pos, agent.forage_amount)?;
    agent.collect(taken);
    Ok(())
}

/// `vision` must lie in `1..=max(width, height)`; a wider disc only revisits
/// the same cells.
fn check_agent_params(cfg: &EcosystemConfig, forage_amount: i32, vision: u32) -> SimResult<()> {
    if forage_amount <= 0 {
        return Err(SimError::Config(format!("forage_amount must be positive, got {forage_amount}")));
    }
    if vision == 0 {
        return Err(SimError::Config("vision radius must be positive".into()));
    }
    let span = cfg.width.max(cfg.height);
    if vision > span {
        return Err(SimError::Config(format!(
            "vision radius {vision} exceeds the grid span {span}"
        )));
    }
    Ok(())
}
