//! Move scoring over a read-only view of the world.
//!
//! # Score
//!
//! For a candidate at Euclidean distance `d` showing resource `r`, traffic
//! `t`, and pollution `p`:
//!
//! ```text
//! score = r·w_resources − t·w_traffic·risk_tolerance − p·w_pollution − 0.5·d
//!       − (0.1·t if social > 0.6 else 0.5·t)
//!       + successes(cell)·w_familiarity
//!       + (efficiency·r if r > 0)
//! ```
//!
//! The candidate set is the vision disc around the agent (center included).
//! Ties on the best score are broken uniformly at random; with probability
//! `exploration × 0.1` the target is instead drawn uniformly from every
//! candidate.  Both draws use the agent's own RNG.

use ue_core::{AgentConfig, AgentRng, Cell, EdgePolicy};
use ue_grid::{Grid, vision_disc};

use crate::{Agent, AgentError, AgentResult};

// ── Perception ────────────────────────────────────────────────────────────────

/// Everything an agent may look at while deciding.
///
/// Borrows the grids immutably; `traffic` is whichever traffic view the engine
/// chooses to expose (the start-of-tick snapshot or the live field).
#[derive(Copy, Clone, Debug)]
pub struct Perception<'a> {
    resource:  &'a Grid,
    traffic:   &'a Grid,
    pollution: &'a Grid,
    config:    &'a AgentConfig,
}

impl<'a> Perception<'a> {
    pub fn new(
        resource:  &'a Grid,
        traffic:   &'a Grid,
        pollution: &'a Grid,
        config:    &'a AgentConfig,
    ) -> AgentResult<Self> {
        if !resource.same_shape(traffic) || !resource.same_shape(pollution) {
            return Err(AgentError::ShapeMismatch);
        }
        Ok(Self { resource, traffic, pollution, config })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.resource.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.resource.height()
    }

    #[inline]
    pub fn edge(&self) -> EdgePolicy {
        self.config.vision_edge
    }

    pub fn config(&self) -> &'a AgentConfig {
        self.config
    }

    pub fn resource(&self) -> &'a Grid {
        self.resource
    }

    pub fn traffic(&self) -> &'a Grid {
        self.traffic
    }

    pub fn pollution(&self) -> &'a Grid {
        self.pollution
    }

    /// All cells visible from `center` within `radius`, with their readings.
    pub fn visible(&self, center: Cell, radius: u32) -> AgentResult<Vec<Candidate>> {
        vision_disc(center, radius, self.width(), self.height(), self.edge())
            .into_iter()
            .map(|v| {
                Ok(Candidate {
                    cell:      v.cell,
                    distance:  v.distance,
                    resources: self.resource.get(v.cell)?,
                    traffic:   self.traffic.get(v.cell)?,
                    pollution: self.pollution.get(v.cell)?,
                })
            })
            .collect()
    }
}

/// One visible cell and what the agent reads there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub cell:      Cell,
    pub distance:  f64,
    pub resources: i32,
    pub traffic:   i32,
    pub pollution: i32,
}

// ── Decision ──────────────────────────────────────────────────────────────────

/// The outcome of planning a move.
///
/// `resources` and `traffic` are the values read at `target` from the
/// perception the decision was made against; the internal-state update uses
/// exactly these.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decision {
    pub target:    Cell,
    pub resources: i32,
    pub traffic:   i32,
    pub score:     f64,
    /// `true` if the exploration draw fired and the target was picked from
    /// all candidates rather than the best-scoring ones.
    pub explored:  bool,
}

// ── Scoring ───────────────────────────────────────────────────────────────────

impl Agent {
    /// Score one candidate under this agent's personality and weights.
    pub fn score_candidate(&self, c: &Candidate, config: &AgentConfig) -> f64 {
        let p = &self.personality;
        let w = &self.weights;
        let r = c.resources as f64;
        let t = c.traffic as f64;

        let mut score = r * w.resources
            - t * w.traffic * p.risk_tolerance
            - c.pollution as f64 * w.pollution
            - c.distance * config.distance_penalty;

        score -= if p.social > config.social_threshold { t * 0.1 } else { t * 0.5 };

        score += self.goal_memory().get(c.cell) as f64 * w.familiarity;

        if c.resources > 0 {
            score += p.efficiency * r;
        }
        score
    }

    /// Choose a target cell without mutating the agent.
    ///
    /// Fails with [`AgentError::OffGrid`] if the agent's current position is
    /// not on the perceived grid.
    pub fn plan_move(&self, view: &Perception<'_>, rng: &mut AgentRng) -> AgentResult<Decision> {
        let pos = self.position();
        if !pos.in_bounds(view.width(), view.height()) {
            return Err(AgentError::OffGrid {
                agent:  self.id(),
                cell:   pos,
                width:  view.width(),
                height: view.height(),
            });
        }

        let candidates = view.visible(pos, self.vision)?;
        let config = view.config();

        let mut best_score = f64::NEG_INFINITY;
        let mut best: Vec<usize> = Vec::new();
        let mut scores = Vec::with_capacity(candidates.len());
        for (i, c) in candidates.iter().enumerate() {
            let score = self.score_candidate(c, config);
            scores.push(score);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(i);
            } else if score == best_score {
                best.push(i);
            }
        }

        let explored = rng.gen_bool(self.personality.exploration * config.exploration_scale);
        let pick = if explored {
            rng.gen_range(0..candidates.len().max(1))
        } else {
            *rng.choose(&best).ok_or(AgentError::EmptyNeighborhood { agent: self.id(), cell: pos })?
        };
        let chosen = candidates
            .get(pick)
            .ok_or(AgentError::EmptyNeighborhood { agent: self.id(), cell: pos })?;

        Ok(Decision {
            target:    chosen.cell,
            resources: chosen.resources,
            traffic:   chosen.traffic,
            score:     scores[pick],
            explored,
        })
    }

    /// Plan a move and apply its perceived conditions to the agent's internal
    /// state.  Returns the target; moving there is the caller's job.
    pub fn choose_next_move(&mut self, view: &Perception<'_>, rng: &mut AgentRng) -> AgentResult<Decision> {
        let decision = self.plan_move(view, rng)?;
        self.update_internal_state(decision.resources, decision.traffic, view.config());
        Ok(decision)
    }
}
