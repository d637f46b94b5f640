//! `ue-sim` — the urban ecosystem engine.
//!
//! # Tick pipeline
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Snapshot  — copy traffic; all agents perceive this copy.
//!   ② Agents    — in insertion order: consume min(forage, r) at the current
//!                 cell, BehaviorModel::decide, move, traffic += 1 at the
//!                 target, update energy/stress/satisfaction, record memory.
//!   ③ Resource  — depletion + diffusion (non-cascading), then regeneration.
//!   ④ Traffic   — multiplicative decay.
//!   ⑤ Pollution — add agent density, then decay.
//!   ⑥ Learning  — BehaviorModel::learn per agent (if enabled).
//!   ⑦ Stats     — TickStats appended to History; tick advanced.
//! ```
//!
//! The tick runs on a working copy of the world and is committed only if
//! every step succeeds.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs the batched decision phase on Rayon's thread pool.   |
//! | `fx-hash`  | FxHash for per-agent goal memory.                         |
//! | `serde`    | Serde derives on config, grids, agents, and `TickStats`.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ue_sim::{NoopObserver, Sim};
//!
//! let mut sim = Sim::new(40, 40, Some(42))?;
//! sim.populate(60, 5, 5)?;
//! sim.run_ticks(100, &mut NoopObserver)?;
//! println!("mean satisfaction {:.1}", sim.mean_satisfaction());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::{AgentSpec, SimBuilder};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, WorldView};
pub use sim::Sim;
pub use stats::{HealthStatus, History, TickStats, system_health};
