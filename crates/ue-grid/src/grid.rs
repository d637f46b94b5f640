//! The `Grid` field type.

use ue_core::Cell;

use crate::{GridError, GridResult};

/// A dense `width × height` field of integers bounded to `[0, capacity]`.
///
/// Cells are stored row-major (`cells[y * width + x]`).  The engine owns
/// three of these (resource, traffic, pollution); agents only ever see a
/// shared `&Grid`, so the type system rules out agent-side writes.
///
/// `Clone` produces an independent snapshot that is safe to retain across
/// ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:    u32,
    height:   u32,
    capacity: i32,
    cells:    Vec<i32>,
}

impl Grid {
    /// A zero-filled grid.
    pub fn new(width: u32, height: u32, capacity: i32) -> GridResult<Self> {
        Self::filled(width, height, capacity, 0)
    }

    /// A grid with every cell set to `value`.
    pub fn filled(width: u32, height: u32, capacity: i32, value: i32) -> GridResult<Self> {
        check_shape(width, height, capacity)?;
        check_value(value, capacity)?;
        Ok(Self {
            width,
            height,
            capacity,
            cells: vec![value; width as usize * height as usize],
        })
    }

    /// Build a grid from row-major values.  Every value must already lie in
    /// `[0, capacity]`.
    pub fn from_vec(width: u32, height: u32, capacity: i32, cells: Vec<i32>) -> GridResult<Self> {
        check_shape(width, height, capacity)?;
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GridError::ShapeMismatch { expected, got: cells.len() });
        }
        for &v in &cells {
            check_value(v, capacity)?;
        }
        Ok(Self { width, height, capacity, cells })
    }

    /// Build a grid by evaluating `f` at every cell in row-major order.
    /// Results are clamped to `[0, capacity]`.
    pub fn from_fn<F>(width: u32, height: u32, capacity: i32, mut f: F) -> GridResult<Self>
    where
        F: FnMut(Cell) -> i32,
    {
        check_shape(width, height, capacity)?;
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(Cell::new(x, y)).clamp(0, capacity));
            }
        }
        Ok(Self { width, height, capacity, cells })
    }

    // ── Shape ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a constructed grid; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.width, self.height)
    }

    /// Flat index of `cell`, or `OutOfBounds`.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> GridResult<usize> {
        if self.contains(cell) {
            Ok(cell.flat_index(self.width))
        } else {
            Err(GridError::OutOfBounds { cell, width: self.width, height: self.height })
        }
    }

    /// `true` if `other` has the same width and height.
    #[inline]
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    // ── Cell access ───────────────────────────────────────────────────────

    pub fn get(&self, cell: Cell) -> GridResult<i32> {
        Ok(self.cells[self.index_of(cell)?])
    }

    /// Unchecked-coordinate read for callers that resolved `cell` through
    /// [`Cell::offset`] against this grid's own dimensions.
    ///
    /// # Panics
    /// Panics if `cell` is out of bounds.
    #[inline]
    pub fn at(&self, cell: Cell) -> i32 {
        self.cells[cell.flat_index(self.width)]
    }

    /// Write `value`, clamped to `[0, capacity]`.
    pub fn set(&mut self, cell: Cell, value: i32) -> GridResult<()> {
        let i = self.index_of(cell)?;
        self.cells[i] = value.clamp(0, self.capacity);
        Ok(())
    }

    /// Add `delta` (may be negative), clamped to `[0, capacity]`.  Returns
    /// the new value.
    pub fn add(&mut self, cell: Cell, delta: i32) -> GridResult<i32> {
        let i = self.index_of(cell)?;
        let v = self.cells[i].saturating_add(delta).clamp(0, self.capacity);
        self.cells[i] = v;
        Ok(v)
    }

    /// Remove up to `amount` from `cell`, bounded by what is available.
    /// Returns the amount actually taken.
    pub fn take(&mut self, cell: Cell, amount: i32) -> GridResult<i32> {
        let i = self.index_of(cell)?;
        let taken = amount.max(0).min(self.cells[i]);
        self.cells[i] -= taken;
        Ok(taken)
    }

    /// Set every cell to `value`, clamped.
    pub fn fill(&mut self, value: i32) {
        let v = value.clamp(0, self.capacity);
        self.cells.fill(v);
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }

    /// Mutable row-major view, crate-internal so the clamp invariant stays
    /// enforced by `dynamics`.
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [i32] {
        &mut self.cells
    }

    /// Iterator over rows, top (`y = 0`) first.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Iterator over `(cell, value)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Cell, i32)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Cell::new(i as u32 % w, i as u32 / w), v))
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// Sum of all cells.
    pub fn total(&self) -> i64 {
        self.cells.iter().map(|&v| v as i64).sum()
    }

    /// Mean cell value.
    pub fn mean(&self) -> f64 {
        self.total() as f64 / self.cells.len() as f64
    }

    pub fn max(&self) -> i32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn min(&self) -> i32 {
        self.cells.iter().copied().min().unwrap_or(0)
    }

    /// `true` if every cell lies in `[0, capacity]`.
    pub fn within_bounds(&self) -> bool {
        self.cells.iter().all(|&v| (0..=self.capacity).contains(&v))
    }
}

fn check_shape(width: u32, height: u32, capacity: i32) -> GridResult<()> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    if capacity <= 0 {
        return Err(GridError::InvalidCapacity(capacity));
    }
    Ok(())
}

fn check_value(value: i32, capacity: i32) -> GridResult<()> {
    if (0..=capacity).contains(&value) {
        Ok(())
    } else {
        Err(GridError::ValueOutOfRange { value, capacity })
    }
}
