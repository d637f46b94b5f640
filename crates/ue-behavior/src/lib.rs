//! `ue-behavior` — agent behavior model trait and decision context.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`context`]  | `SimContext<'a>` — read-only tick snapshot shared by all agents |
//! | [`model`]    | `BehaviorModel` trait                                           |
//! | [`adaptive`] | `AdaptiveBehavior` — personality-weighted scoring with learning |
//! | [`stay`]     | `StayBehavior` — agents that never leave their cell             |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! The engine's tick loop works in two halves per agent:
//!
//! 1. **Decide**: call `BehaviorModel::decide` with a `&SimContext`.  All
//!    reads go through the context; no mutation.
//!
//! 2. **Apply**: the engine validates the returned `Decision`, moves the
//!    agent, writes traffic, and updates the agent's internal state.
//!
//! Under the batched decision phase step 1 runs for every agent before any
//! step 2, possibly in parallel, so `BehaviorModel` must be `Send + Sync`.

pub mod adaptive;
pub mod context;
pub mod error;
pub mod model;
pub mod stay;


pub use adaptive::AdaptiveBehavior;
pub use context::SimContext;
pub use error::{BehaviorError, BehaviorResult};
pub use model::BehaviorModel;
pub use stay::StayBehavior;
