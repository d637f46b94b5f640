//! `ue-grid` — bounded integer fields for the urban ecosystem simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`grid`]        | `Grid` — dense row-major field with a capacity bound       |
//! | [`kind`]        | `GridKind` — resource / traffic / pollution selector       |
//! | [`neighborhood`]| Moore (8-cell) and Euclidean-disc neighborhood enumeration |
//! | [`dynamics`]    | Depletion + diffusion, regeneration, decay, emissions      |
//! | [`metrics`]     | Sector means, density and efficiency maps                  |
//! | [`error`]       | `GridError`, `GridResult<T>`                               |
//!
//! # Invariant
//!
//! Every cell of a `Grid` stays within `[0, capacity]` after every public
//! operation.  Writers clamp; constructors reject out-of-range input.
//!
//! # Non-cascading updates
//!
//! Diffusion reads a frozen copy of the grid and writes a fresh one, so a
//! unit of resource moves at most one cell per tick regardless of scan
//! order.

pub mod dynamics;
pub mod error;
pub mod grid;
pub mod kind;
pub mod metrics;
pub mod neighborhood;


pub use dynamics::{decay, deplete_and_diffuse, emit_and_decay, regenerate};
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use kind::GridKind;
pub use metrics::{density_map, efficiency_map, sector_means, Sector};
pub use neighborhood::{moore_neighbors, VisibleCell, vision_disc};
