//! Simulation observer trait for progress reporting and data collection.

use ue_agent::AgentStore;
use ue_core::Tick;
use ue_grid::{Grid, GridKind};

use crate::TickStats;

/// Read-only view of the committed world, handed to
/// [`SimObserver::on_snapshot`].
///
/// Borrowed, not copied: clone the grids if they must outlive the callback.
#[derive(Copy, Clone)]
pub struct WorldView<'a> {
    pub resource:  &'a Grid,
    pub traffic:   &'a Grid,
    pub pollution: &'a Grid,
    pub agents:    &'a AgentStore,
}

impl<'a> WorldView<'a> {
    pub fn grid(&self, kind: GridKind) -> &'a Grid {
        match kind {
            GridKind::Resource  => self.resource,
            GridKind::Traffic   => self.traffic,
            GridKind::Pollution => self.pollution,
        }
    }
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: health {:.1}", stats.system_health);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick has been committed.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), after `on_tick_end`.
    fn on_snapshot(&mut self, _tick: Tick, _world: &WorldView<'_>) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
