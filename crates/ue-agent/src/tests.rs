//! Unit tests for ue-agent.

use ue_core::{AgentConfig, AgentId, AgentRng, Cell};
use ue_grid::Grid;

use crate::{Agent, Personality};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn calm() -> Personality {
    Personality { risk_tolerance: 0.5, exploration: 0.0, social: 0.5, efficiency: 0.5 }
}

fn agent_at(x: u32, y: u32, vision: u32, config: &AgentConfig) -> Agent {
    Agent::new(AgentId(0), Cell::new(x, y), 5, vision, calm(), config)
}

fn grid(w: u32, h: u32, cap: i32, cells: &[((u32, u32), i32)]) -> Grid {
    let mut g = Grid::new(w, h, cap).unwrap();
    for &((x, y), v) in cells {
        g.set(Cell::new(x, y), v).unwrap();
    }
    g
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Memory ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod memory_tests {
    use crate::{Experience, GoalMemory, Memory};

    use super::*;

    fn exp(x: u32) -> Experience {
        Experience { location: Cell::new(x, 0), resources: 0, traffic: 0, outcome: 0.0, timestep: x as u64 }
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut m = Memory::with_capacity(3);
        for x in 0..5 {
            m.push(exp(x));
        }
        assert_eq!(m.len(), 3);
        let xs: Vec<u32> = m.iter().map(|e| e.location.x).collect();
        assert_eq!(xs, vec![2, 3, 4]);
        assert_eq!(m.latest().map(|e| e.location.x), Some(4));
    }

    #[test]
    fn goal_memory_counts_successes() {
        let mut g = GoalMemory::new();
        assert_eq!(g.get(Cell::new(1, 1)), 0);
        g.record_success(Cell::new(1, 1));
        g.record_success(Cell::new(1, 1));
        g.record_success(Cell::new(2, 0));
        assert_eq!(g.get(Cell::new(1, 1)), 2);
        assert_eq!(g.len(), 2);
    }
}

// ── Agent state ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_tests {
    use ue_core::{LearningConfig, SimRng, WeightBounds};

    use super::*;

    #[test]
    fn fresh_agent_state() {
        let a = agent_at(1, 1, 2, &AgentConfig::default());
        assert_eq!(a.energy(), 100.0);
        assert_eq!(a.stress(), 0.0);
        assert_eq!(a.satisfaction(), 50.0);
        assert_eq!(a.resources_collected(), 0);
        assert!(a.memory().is_empty());
        assert_eq!(a.weights.traffic, -2.0);
    }

    #[test]
    fn busy_rich_cell_drains_energy_and_builds_stress() {
        let cfg = AgentConfig::default();
        let mut a = agent_at(0, 0, 1, &cfg);
        a.update_internal_state(10, 20, &cfg);
        assert!(close(a.energy(), 98.0));
        assert!(close(a.stress(), 1.0));
        assert!(close(a.satisfaction(), 51.0));
    }

    #[test]
    fn quiet_empty_cell_recovers_stress_and_loses_satisfaction() {
        let cfg = AgentConfig::default();
        let mut a = agent_at(0, 0, 1, &cfg);
        a.update_internal_state(0, 2, &cfg);
        assert!(close(a.energy(), 99.8));
        assert_eq!(a.stress(), 0.0);
        assert!(close(a.satisfaction(), 48.0));
    }

    #[test]
    fn internal_state_stays_within_bounds() {
        let cfg = AgentConfig::default();
        let mut a = agent_at(0, 0, 1, &cfg);
        for _ in 0..50 {
            a.update_internal_state(100, 20, &cfg);
        }
        assert_eq!(a.satisfaction(), 100.0);
        assert!(a.energy() >= 0.0 && a.energy() <= 100.0);
        assert!(a.stress() <= 100.0);
        for _ in 0..200 {
            a.update_internal_state(0, 0, &cfg);
        }
        assert_eq!(a.satisfaction(), 0.0);
        assert_eq!(a.stress(), 0.0);
    }

    #[test]
    fn add_memory_records_goal_success_above_threshold() {
        let cfg = AgentConfig { memory_capacity: 3, ..AgentConfig::default() };
        let mut a = agent_at(0, 0, 1, &cfg);
        a.add_memory(Cell::new(1, 0), 5, 0, 60.0, &cfg);
        a.add_memory(Cell::new(2, 0), 5, 0, 50.0, &cfg);
        assert_eq!(a.goal_memory().get(Cell::new(1, 0)), 1);
        assert_eq!(a.goal_memory().get(Cell::new(2, 0)), 0);
        for _ in 0..3 {
            a.move_to(Cell::new(0, 0));
            a.add_memory(Cell::new(0, 0), 0, 0, 0.0, &cfg);
        }
        assert_eq!(a.memory().len(), 3);
        assert_eq!(a.memory().latest().map(|e| e.timestep), Some(3));
    }

    #[test]
    fn move_to_tracks_trail() {
        let cfg = AgentConfig { visited_capacity: 2, ..AgentConfig::default() };
        let mut a = agent_at(0, 0, 1, &cfg);
        a.move_to(Cell::new(1, 0));
        a.move_to(Cell::new(2, 0));
        a.move_to(Cell::new(3, 0));
        assert_eq!(a.position(), Cell::new(3, 0));
        assert_eq!(a.move_count(), 3);
        let trail: Vec<Cell> = a.visited().collect();
        assert_eq!(trail, vec![Cell::new(2, 0), Cell::new(3, 0)]);
    }

    #[test]
    fn positive_reward_reinforces_resources() {
        let mut a = agent_at(0, 0, 1, &AgentConfig::default());
        a.adapt_preferences(10.0, &LearningConfig::default());
        assert!(close(a.weights.resources, 1.01));
        assert!(close(a.weights.traffic, -2.005));
        assert!(close(a.personality.efficiency, 0.505));
        assert!(close(a.personality.risk_tolerance, 0.5));
    }

    #[test]
    fn non_positive_reward_lowers_risk_tolerance() {
        let mut a = agent_at(0, 0, 1, &AgentConfig::default());
        a.adapt_preferences(0.0, &LearningConfig::default());
        assert!(close(a.weights.resources, 0.995));
        assert!(close(a.personality.risk_tolerance, 0.49));

        a.personality.risk_tolerance = 0.3;
        a.adapt_preferences(-5.0, &LearningConfig::default());
        assert_eq!(a.personality.risk_tolerance, 0.3);
    }

    #[test]
    fn efficiency_caps_at_one() {
        let mut a = agent_at(0, 0, 1, &AgentConfig::default());
        a.personality.efficiency = 1.0;
        a.adapt_preferences(1.0, &LearningConfig::default());
        assert_eq!(a.personality.efficiency, 1.0);
    }

    #[test]
    fn weights_unbounded_by_default() {
        let mut a = agent_at(0, 0, 1, &AgentConfig::default());
        let cfg = LearningConfig { learning_rate: 1.0, ..LearningConfig::default() };
        for _ in 0..10 {
            a.adapt_preferences(1.0, &cfg);
        }
        assert!(close(a.weights.resources, 11.0));
        assert!(close(a.weights.traffic, -7.0));
    }

    #[test]
    fn weight_bounds_clamp_every_weight() {
        let mut a = agent_at(0, 0, 1, &AgentConfig::default());
        let cfg = LearningConfig {
            learning_rate: 1.0,
            weight_bounds: Some(WeightBounds { min: -1.0, max: 1.5 }),
            ..LearningConfig::default()
        };
        a.adapt_preferences(1.0, &cfg);
        assert_eq!(a.weights.resources, 1.5);
        assert_eq!(a.weights.traffic, -1.0);
        assert_eq!(a.weights.comfort, 0.3);
    }

    #[test]
    fn reward_includes_collected_resources() {
        let mut a = agent_at(0, 0, 1, &AgentConfig::default());
        assert!(close(a.reward(), 50.0));
        a.collect(100);
        a.collect(-3);
        assert_eq!(a.resources_collected(), 100);
        assert!(close(a.reward(), 55.0));
    }

    #[test]
    fn sampled_personalities_stay_in_range() {
        let mut rng = SimRng::new(7);
        for _ in 0..500 {
            let p = Personality::sample(&mut rng);
            assert!((0.3..=1.0).contains(&p.risk_tolerance));
            assert!((0.2..=1.0).contains(&p.exploration));
            assert!((0.1..=1.0).contains(&p.social));
            assert!((0.3..=1.0).contains(&p.efficiency));
        }
    }
}

// ── Decision ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod decision_tests {
    use ue_core::EdgePolicy;

    use crate::{AgentError, Candidate, Perception};

    use super::*;

    fn zeros(w: u32, h: u32) -> Grid {
        Grid::new(w, h, 100).unwrap()
    }

    #[test]
    fn score_matches_formula() {
        let cfg = AgentConfig::default();
        let a = agent_at(0, 0, 1, &cfg);
        let rich = Candidate { cell: Cell::new(0, 0), distance: 0.0, resources: 10, traffic: 0, pollution: 0 };
        assert!(close(a.score_candidate(&rich, &cfg), 15.0));

        // 4·2·0.5 + 2·0.5 − 0.5·1 − 0.5·4
        let busy = Candidate { cell: Cell::new(1, 0), distance: 1.0, resources: 0, traffic: 4, pollution: 2 };
        assert!(close(a.score_candidate(&busy, &cfg), 2.5));
    }

    #[test]
    fn social_agents_discount_crowds() {
        let cfg = AgentConfig::default();
        let mut a = agent_at(0, 0, 1, &cfg);
        a.personality.social = 0.9;
        let busy = Candidate { cell: Cell::new(1, 0), distance: 0.0, resources: 0, traffic: 10, pollution: 0 };
        // 10·2·0.5 − 0.1·10
        assert!(close(a.score_candidate(&busy, &cfg), 9.0));
    }

    #[test]
    fn familiarity_adds_goal_successes() {
        let cfg = AgentConfig::default();
        let mut a = agent_at(0, 0, 1, &cfg);
        let c = Candidate { cell: Cell::new(1, 1), distance: 0.0, resources: 0, traffic: 0, pollution: 0 };
        let before = a.score_candidate(&c, &cfg);
        a.add_memory(Cell::new(1, 1), 0, 0, 90.0, &cfg);
        a.add_memory(Cell::new(1, 1), 0, 0, 90.0, &cfg);
        assert!(close(a.score_candidate(&c, &cfg) - before, 0.4));
    }

    #[test]
    fn picks_single_best_cell() {
        let cfg = AgentConfig::default();
        let res = grid(5, 5, 100, &[((3, 2), 50)]);
        let (traffic, pollution) = (zeros(5, 5), zeros(5, 5));
        let view = Perception::new(&res, &traffic, &pollution, &cfg).unwrap();

        let a = agent_at(2, 2, 1, &cfg);
        let mut rng = AgentRng::new(1, AgentId(0));
        let d = a.plan_move(&view, &mut rng).unwrap();
        assert_eq!(d.target, Cell::new(3, 2));
        assert_eq!(d.resources, 50);
        assert_eq!(d.traffic, 0);
        assert!(!d.explored);
        assert!(close(d.score, 74.5));
    }

    #[test]
    fn plan_move_does_not_mutate() {
        let cfg = AgentConfig::default();
        let res = grid(5, 5, 100, &[((3, 2), 50)]);
        let (traffic, pollution) = (zeros(5, 5), zeros(5, 5));
        let view = Perception::new(&res, &traffic, &pollution, &cfg).unwrap();

        let mut a = agent_at(2, 2, 1, &cfg);
        let _ = a.plan_move(&view, &mut AgentRng::new(1, AgentId(0))).unwrap();
        assert_eq!(a.satisfaction(), 50.0);

        let d = a.choose_next_move(&view, &mut AgentRng::new(1, AgentId(0))).unwrap();
        assert_eq!(a.position(), Cell::new(2, 2));
        assert_eq!(d.target, Cell::new(3, 2));
        assert!(close(a.satisfaction(), 55.0));
    }

    #[test]
    fn ties_are_broken_fairly() {
        let cfg = AgentConfig::default();
        let res = grid(5, 5, 100, &[((1, 2), 50), ((3, 2), 50)]);
        let (traffic, pollution) = (zeros(5, 5), zeros(5, 5));
        let view = Perception::new(&res, &traffic, &pollution, &cfg).unwrap();
        let a = agent_at(2, 2, 1, &cfg);

        let trials = 2000;
        let mut left = 0;
        for seed in 0..trials {
            let mut rng = AgentRng::new(seed, AgentId(0));
            let d = a.plan_move(&view, &mut rng).unwrap();
            assert!(d.target == Cell::new(1, 2) || d.target == Cell::new(3, 2));
            if d.target == Cell::new(1, 2) {
                left += 1;
            }
        }
        let share = left as f64 / trials as f64;
        assert!((0.45..=0.55).contains(&share), "left share {share}");
    }

    #[test]
    fn full_exploration_picks_any_visible_cell() {
        let cfg = AgentConfig { exploration_scale: 10.0, ..AgentConfig::default() };
        let res = grid(5, 5, 100, &[((3, 2), 50)]);
        let (traffic, pollution) = (zeros(5, 5), zeros(5, 5));
        let view = Perception::new(&res, &traffic, &pollution, &cfg).unwrap();

        let mut a = agent_at(2, 2, 1, &cfg);
        a.personality.exploration = 1.0;
        let mut rng = AgentRng::new(3, AgentId(0));
        let mut seen_other = false;
        for _ in 0..200 {
            let d = a.plan_move(&view, &mut rng).unwrap();
            assert!(d.explored);
            let dx = d.target.x.abs_diff(2);
            let dy = d.target.y.abs_diff(2);
            assert!(dx + dy <= 1);
            seen_other |= d.target != Cell::new(3, 2);
        }
        assert!(seen_other);
    }

    #[test]
    fn vision_wraps_or_clamps_at_the_edge() {
        let res = grid(5, 5, 100, &[((4, 0), 50)]);
        let (traffic, pollution) = (zeros(5, 5), zeros(5, 5));

        let wrap = AgentConfig::default();
        let view = Perception::new(&res, &traffic, &pollution, &wrap).unwrap();
        let a = agent_at(0, 0, 1, &wrap);
        let d = a.plan_move(&view, &mut AgentRng::new(1, AgentId(0))).unwrap();
        assert_eq!(d.target, Cell::new(4, 0));

        let clamp = AgentConfig { vision_edge: EdgePolicy::Clamp, ..AgentConfig::default() };
        let view = Perception::new(&res, &traffic, &pollution, &clamp).unwrap();
        let d = a.plan_move(&view, &mut AgentRng::new(1, AgentId(0))).unwrap();
        assert_eq!(d.target, Cell::new(0, 0));
    }

    #[test]
    fn off_grid_agent_is_rejected() {
        let cfg = AgentConfig::default();
        let (res, traffic, pollution) = (zeros(5, 5), zeros(5, 5), zeros(5, 5));
        let view = Perception::new(&res, &traffic, &pollution, &cfg).unwrap();
        let a = agent_at(7, 7, 1, &cfg);
        let err = a.plan_move(&view, &mut AgentRng::new(1, AgentId(0))).unwrap_err();
        assert!(matches!(err, AgentError::OffGrid { .. }));
    }

    #[test]
    fn perception_requires_matching_shapes() {
        let cfg = AgentConfig::default();
        let (res, traffic, pollution) = (zeros(5, 5), zeros(4, 5), zeros(5, 5));
        assert!(matches!(
            Perception::new(&res, &traffic, &pollution, &cfg),
            Err(AgentError::ShapeMismatch)
        ));
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod store_tests {
    use crate::{AgentRngs, AgentStore};

    use super::*;

    #[test]
    fn ids_follow_insertion_order() {
        let cfg = AgentConfig::default();
        let mut store = AgentStore::new();
        for i in 0..3u32 {
            let id = store.next_id();
            assert_eq!(id, AgentId(i));
            store.push(Agent::new(id, Cell::new(i, 0), 5, 1, calm(), &cfg));
        }
        assert_eq!(store.len(), 3);
        assert_eq!(store.positions(), vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]);
        assert_eq!(store.get(AgentId(1)).map(|a| a.position()), Some(Cell::new(1, 0)));
        assert!(store.get(AgentId(3)).is_none());
        assert!(close(store.mean_by(|a| a.position().x as f64), 1.0));
    }

    #[test]
    fn empty_store_means_are_zero() {
        assert_eq!(AgentStore::new().mean_by(Agent::satisfaction), 0.0);
    }

    #[test]
    fn rngs_are_reproducible_per_agent() {
        let mut a = AgentRngs::new();
        let mut b = AgentRngs::new();
        for i in 0..4 {
            a.push(42, AgentId(i));
            b.push(42, AgentId(i));
        }
        let xa: u64 = a.get_mut(AgentId(2)).unwrap().random();
        let xb: u64 = b.get_mut(AgentId(2)).unwrap().random();
        assert_eq!(xa, xb);
        let other: u64 = a.get_mut(AgentId(3)).unwrap().random();
        assert_ne!(xa, other);
    }
}
