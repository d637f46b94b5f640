//! `ue-core` — foundational types for the urban ecosystem simulation.
//!
//! This crate is a dependency of every other `ue-*` crate.  It intentionally
//! has no `ue-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`cell`]        | `Cell`, `EdgePolicy`, offset resolution               |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`config`]      | `EcosystemConfig` and its dynamics/agent/learning parts |
//! | [`error`]       | `UeError`, `UeResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Lets drivers load `EcosystemConfig` from JSON.             |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, EdgePolicy};
pub use config::{
    AgentConfig, DecisionPhase, DynamicsConfig, EcosystemConfig, LearningConfig, WeightBounds,
};
pub use error::{UeError, UeResult};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
