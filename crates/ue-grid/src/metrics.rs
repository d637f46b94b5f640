//! Derived per-cell maps and regional aggregates used by drivers and the
//! engine's statistics.

use ue_core::Cell;

use crate::{Grid, GridError, GridResult};

/// One quadrant of the grid, split at `height / 2` and `width / 2`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Sector {
    NorthWest,
    SouthWest,
    NorthEast,
    SouthEast,
}

impl Sector {
    pub const ALL: [Sector; 4] = [
        Sector::NorthWest,
        Sector::SouthWest,
        Sector::NorthEast,
        Sector::SouthEast,
    ];
}

/// Mean value of each quadrant, in [`Sector::ALL`] order.
///
/// North is `y < height / 2`, west is `x < width / 2`.  A quadrant with no
/// cells (possible on 1-wide or 1-high grids) reports 0.
pub fn sector_means(grid: &Grid) -> [(Sector, f64); 4] {
    let h_half = grid.height() / 2;
    let w_half = grid.width() / 2;
    let mut sums   = [0i64; 4];
    let mut counts = [0u64; 4];

    for (cell, v) in grid.iter_cells() {
        let north = cell.y < h_half;
        let west  = cell.x < w_half;
        let k = match (north, west) {
            (true,  true)  => 0,
            (false, true)  => 1,
            (true,  false) => 2,
            (false, false) => 3,
        };
        sums[k]   += v as i64;
        counts[k] += 1;
    }

    let mut out = [(Sector::NorthWest, 0.0); 4];
    for (k, sector) in Sector::ALL.into_iter().enumerate() {
        let mean = if counts[k] == 0 { 0.0 } else { sums[k] as f64 / counts[k] as f64 };
        out[k] = (sector, mean);
    }
    out
}

/// Per-cell count of the given positions, row-major.
pub fn density_map<I>(width: u32, height: u32, positions: I) -> GridResult<Vec<u32>>
where
    I: IntoIterator<Item = Cell>,
{
    let mut density = vec![0u32; width as usize * height as usize];
    for cell in positions {
        if !cell.in_bounds(width, height) {
            return Err(GridError::OutOfBounds { cell, width, height });
        }
        density[cell.flat_index(width)] += 1;
    }
    Ok(density)
}

/// `resource / (traffic + 1)` per cell, row-major.
pub fn efficiency_map(resource: &Grid, traffic: &Grid) -> GridResult<Vec<f64>> {
    if !resource.same_shape(traffic) {
        return Err(GridError::ShapeMismatch { expected: resource.len(), got: traffic.len() });
    }
    Ok(resource
        .as_slice()
        .iter()
        .zip(traffic.as_slice())
        .map(|(&r, &t)| r as f64 / (t as f64 + 1.0))
        .collect())
}
