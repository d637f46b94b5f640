//! Grid coordinates and edge handling.
//!
//! Coordinates are `(x, y)` with `x` the column in `[0, width)` and `y` the
//! row in `[0, height)`.  Grids are stored row-major, so the flat index of a
//! cell is `y * width + x`.

use std::fmt;

/// A cell coordinate on the bounded 2D grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// `true` if the cell lies inside a `width × height` grid.
    #[inline]
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x < width && self.y < height
    }

    /// Row-major flat index for a grid of the given width.
    #[inline]
    pub fn flat_index(self, width: u32) -> usize {
        self.y as usize * width as usize + self.x as usize
    }

    /// The cell `(dx, dy)` steps away, resolved under `edge`.
    ///
    /// Returns `None` when `edge` is [`EdgePolicy::Clamp`] and the offset
    /// leaves the grid.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, width: u32, height: u32, edge: EdgePolicy) -> Option<Cell> {
        let x = resolve_axis(self.x as i64 + dx as i64, width, edge)?;
        let y = resolve_axis(self.y as i64 + dy as i64, height, edge)?;
        Some(Cell { x, y })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Cell {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Cell { x, y }
    }
}

// ── EdgePolicy ────────────────────────────────────────────────────────────────

/// How a neighborhood is resolved at the grid boundary.
///
/// Vision scans and resource diffusion each carry their own policy (see
/// `AgentConfig::vision_edge` and `DynamicsConfig::diffusion_edge`).
/// Agents near an edge see a wrapped neighborhood under `Wrap` and a smaller
/// one under `Clamp`, so the choice is behaviorally significant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgePolicy {
    /// Stepping past one edge re-enters on the opposite edge (torus).
    #[default]
    Wrap,
    /// The neighborhood is clipped at the boundary; out-of-bounds cells are
    /// omitted.
    Clamp,
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EdgePolicy::Wrap  => "wrap",
            EdgePolicy::Clamp => "clamp",
        };
        f.write_str(s)
    }
}

/// Resolve a single axis value under the given edge policy.
///
/// Returns `None` for an out-of-bounds value under `Clamp`, or when `len`
/// is zero.
#[inline]
pub fn resolve_axis(val: i64, len: u32, edge: EdgePolicy) -> Option<u32> {
    let len = len as i64;
    if len == 0 {
        return None;
    }
    if (0..len).contains(&val) {
        return Some(val as u32);
    }
    match edge {
        EdgePolicy::Clamp => None,
        EdgePolicy::Wrap  => Some(val.rem_euclid(len) as u32),
    }
}
