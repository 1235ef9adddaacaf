//! Test fixtures and helpers for lifestream development.
//!
//! Provides canonical simulation scenarios with a short tick interval,
//! helpers for draining a [`SnapshotStream`], and rule fixtures in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::time::Duration;

use lifestream_core::Cell;
use lifestream_engine::{RunReport, SimConfig, Snapshot, SnapshotStream};
use lifestream_grid::Pattern;

pub use fixtures::{CountingRule, FrozenRule};

/// Tick interval used by streaming tests.
pub const FAST_TICK: Duration = Duration::from_millis(2);

/// Generous upper bound for anything a streaming test waits on.
pub const DEADLINE: Duration = Duration::from_secs(10);

/// Default configuration with a [`FAST_TICK`] interval.
pub fn fast_config(size: i32, initial_cells: Vec<Cell>) -> SimConfig {
    SimConfig {
        tick_interval: FAST_TICK,
        ..SimConfig::new(size, initial_cells)
    }
}

/// Empty torus of `size`.
pub fn empty(size: i32) -> SimConfig {
    fast_config(size, Vec::new())
}

/// Two adjacent alive cells at `(0, 0)` and `(1, 0)` on a 10x10 torus.
/// Both die of underpopulation in the first step.
pub fn isolated_pair() -> SimConfig {
    fast_config(10, vec![Cell::alive(0, 0), Cell::alive(1, 0)])
}

/// A glider centred on a torus of `size`.
pub fn glider(size: i32) -> SimConfig {
    fast_config(size, Pattern::Glider.cells(size))
}

/// A block still life centred on a torus of `size`.
pub fn block(size: i32) -> SimConfig {
    fast_config(size, Pattern::Block.cells(size))
}

/// A blinker centred on a torus of `size`. Never reaches a fixed point.
pub fn blinker(size: i32) -> SimConfig {
    fast_config(size, Pattern::Blinker.cells(size))
}

/// Take up to `n` snapshots, stopping early if the stream closes.
pub fn take_snapshots(stream: &mut SnapshotStream, n: usize) -> Vec<Snapshot> {
    stream.by_ref().take(n).collect()
}

/// Drain the stream to closure and join the driver.
///
/// Only for runs that end on their own (fixed point or generation
/// limit); an endless run never returns.
pub fn drain(mut stream: SnapshotStream) -> (Vec<Snapshot>, RunReport) {
    let snapshots: Vec<Snapshot> = stream.by_ref().collect();
    let report = stream.join().expect("driver thread panicked");
    (snapshots, report)
}
