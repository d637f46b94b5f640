//! Neighborhood enumeration on the bounded grid.

use ue_core::{Cell, EdgePolicy};

/// Offsets of the 8-connected (Moore) neighborhood, excluding the center.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// The 8 neighbors of `cell` resolved under `edge`.
///
/// Under `Wrap` this always yields 8 cells (on grids narrower than 3 cells
/// the same cell may appear more than once).  Under `Clamp`, corner cells
/// have 3 neighbors and edge cells 5.
pub fn moore_neighbors(
    cell:   Cell,
    width:  u32,
    height: u32,
    edge:   EdgePolicy,
) -> impl Iterator<Item = Cell> {
    MOORE_OFFSETS
        .into_iter()
        .filter_map(move |(dx, dy)| cell.offset(dx, dy, width, height, edge))
}

/// A candidate cell within an agent's vision, with its Euclidean offset
/// distance from the observer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibleCell {
    pub cell:     Cell,
    pub distance: f64,
}

/// Every cell within Euclidean distance `radius` of `center` (the center
/// itself included, at distance 0).
///
/// Offsets are scanned `dx`-major from `-radius` to `+radius`.  Under `Wrap`
/// a radius wider than the grid reaches the same cell through several
/// offsets; each is reported with its own distance.
///
/// The radius is capped at `max(width, height)`: beyond that no new cell
/// comes into view.
pub fn vision_disc(
    center: Cell,
    radius: u32,
    width:  u32,
    height: u32,
    edge:   EdgePolicy,
) -> Vec<VisibleCell> {
    let r = radius.min(width.max(height)).min(i32::MAX as u32) as i32;
    let side = 2 * r as usize + 1;
    let mut out = Vec::with_capacity(side * side);
    for dx in -r..=r {
        for dy in -r..=r {
            let (x, y) = (dx as i64, dy as i64);
            let distance = ((x * x + y * y) as f64).sqrt();
            if distance > r as f64 {
                continue;
            }
            if let Some(cell) = center.offset(dx, dy, width, height, edge) {
                out.push(VisibleCell { cell, distance });
            }
        }
    }
    out
}
