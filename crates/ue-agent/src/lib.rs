//! `ue-agent` — adaptive agents for the urban ecosystem simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`traits`]      | `Personality` (fixed at creation), `PreferenceWeights`      |
//! | [`memory`]      | `Experience`, bounded `Memory`, `GoalMemory`                |
//! | [`agent`]       | `Agent` — per-individual mutable state, learning            |
//! | [`decision`]    | `Perception` (read-only view), `Decision`, move scoring     |
//! | [`store`]       | `AgentStore` (agents in insertion order), `AgentRngs`       |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for goal memory.                 |
//! | `serde`   | Derives `Serialize`/`Deserialize` on all public types.     |
//!
//! # Read-only perception
//!
//! Agents never hold a writable grid.  Decisions are computed from a
//! [`Perception`], which only borrows `&Grid`s; the engine applies the
//! resulting [`Decision`] and performs every grid write itself.

pub mod agent;
pub mod decision;
pub mod error;
pub mod memory;
pub mod store;
pub mod traits;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use decision::{Candidate, Decision, Perception};
pub use error::{AgentError, AgentResult};
pub use memory::{Experience, GoalMemory, Memory};
pub use store::{AgentRngs, AgentStore};
pub use traits::{Personality, PreferenceWeights};
