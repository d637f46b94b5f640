//! Rolling experience memory and per-cell goal memory.

use std::collections::VecDeque;

use ue_core::Cell;

#[cfg(feature = "fx-hash")]
type CellMap<V> = rustc_hash::FxHashMap<Cell, V>;
#[cfg(not(feature = "fx-hash"))]
type CellMap<V> = std::collections::HashMap<Cell, V>;

// ── Experience ────────────────────────────────────────────────────────────────

/// One remembered step: what the agent saw at the cell it moved to, and how
/// it felt afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experience {
    pub location:  Cell,
    pub resources: i32,
    pub traffic:   i32,
    /// Post-decision satisfaction.
    pub outcome:   f64,
    /// The agent's move count when the experience was recorded.
    pub timestep:  u64,
}

// ── Memory ────────────────────────────────────────────────────────────────────

/// A bounded FIFO of [`Experience`]s.  When full, the oldest entry is evicted.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Memory {
    entries:  VecDeque<Experience>,
    capacity: usize,
}

impl Memory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append `exp`, evicting the oldest entry if the memory is full.
    pub fn push(&mut self, exp: Experience) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(exp);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Experience> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Experience> {
        self.entries.back()
    }
}

// ── GoalMemory ────────────────────────────────────────────────────────────────

/// Count of successful visits per cell.
///
/// Only incremented; used as the familiarity term of move scoring.
#[derive(Clone, Debug, Default)]
pub struct GoalMemory {
    successes: CellMap<u32>,
}

impl GoalMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Success count for `cell` (0 if never recorded).
    #[inline]
    pub fn get(&self, cell: Cell) -> u32 {
        self.successes.get(&cell).copied().unwrap_or(0)
    }

    pub fn record_success(&mut self, cell: Cell) {
        *self.successes.entry(cell).or_insert(0) += 1;
    }

    /// Number of distinct cells with at least one success.
    pub fn len(&self) -> usize {
        self.successes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successes.is_empty()
    }
}
