//! Per-tick field dynamics.
//!
//! | Function               | Field      | Rule                                          |
//! |------------------------|------------|-----------------------------------------------|
//! | [`deplete_and_diffuse`]| resource   | remove `floor(v·rate)` (≥ 1), spread to 8 neighbors |
//! | [`regenerate`]         | resource   | `+amount`, clamped                            |
//! | [`decay`]              | traffic    | `trunc(v·(1 − rate))`, clamped                |
//! | [`emit_and_decay`]     | pollution  | `trunc((v + emissions)·(1 − rate))`, clamped  |
//!
//! All functions leave every cell within `[0, capacity]`.

use ue_core::{Cell, EdgePolicy};

use crate::{Grid, GridError, GridResult, moore_neighbors};

/// Deplete every non-empty cell and redistribute the removed amount evenly
/// across its Moore neighbors.
///
/// For each cell with `v > 0`, `floor(v · rate)` is removed (at least 1),
/// and each of the `n` neighbors resolved under `edge` receives
/// `removed / n` (integer division, remainder dropped), capped at capacity.
///
/// Reads a frozen copy of the grid and writes a fresh one, then swaps it in,
/// so redistribution never cascades within one call.  Total mass never
/// increases: each cell hands out at most what it lost.
pub fn deplete_and_diffuse(grid: &mut Grid, rate: f64, edge: EdgePolicy) {
    let width    = grid.width();
    let height   = grid.height();
    let capacity = grid.capacity();

    let mut next = grid.clone();
    {
        let prev = grid.as_slice();
        let out  = next.cells_mut();
        let mut neighbors: Vec<usize> = Vec::with_capacity(8);

        for y in 0..height {
            for x in 0..width {
                let cell = Cell::new(x, y);
                let i = cell.flat_index(width);
                let v = prev[i];
                if v <= 0 {
                    continue;
                }

                let removed = ((v as f64 * rate) as i32).max(1);
                out[i] -= removed;

                neighbors.clear();
                neighbors.extend(
                    moore_neighbors(cell, width, height, edge).map(|n| n.flat_index(width)),
                );
                if neighbors.is_empty() {
                    continue;
                }
                let share = removed / neighbors.len() as i32;
                for &j in &neighbors {
                    out[j] = (out[j] + share).min(capacity);
                }
            }
        }
    }
    *grid = next;
}

/// Add a flat `amount` to every cell, clamped to capacity.
pub fn regenerate(grid: &mut Grid, amount: i32) {
    let capacity = grid.capacity();
    for v in grid.cells_mut() {
        *v = v.saturating_add(amount).clamp(0, capacity);
    }
}

/// Multiply every cell by `1 − rate`, truncating toward zero.
pub fn decay(grid: &mut Grid, rate: f64) {
    let capacity = grid.capacity();
    let factor = 1.0 - rate;
    for v in grid.cells_mut() {
        *v = ((*v as f64 * factor) as i32).clamp(0, capacity);
    }
}

/// Add per-cell `emissions` (row-major, one entry per cell), then decay by
/// `rate`.  The sum is decayed before clamping, so a saturated cell still
/// reflects its emissions.
pub fn emit_and_decay(grid: &mut Grid, emissions: &[u32], rate: f64) -> GridResult<()> {
    if emissions.len() != grid.len() {
        return Err(GridError::ShapeMismatch { expected: grid.len(), got: emissions.len() });
    }
    let capacity = grid.capacity();
    let factor = 1.0 - rate;
    for (v, &e) in grid.cells_mut().iter_mut().zip(emissions) {
        let raised = *v as f64 + e as f64;
        *v = ((raised * factor) as i32).clamp(0, capacity);
    }
    Ok(())
}
