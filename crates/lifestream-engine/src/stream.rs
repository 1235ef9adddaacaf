//! Consumer side of a streaming run: [`SnapshotStream`] and [`RunReport`].
//!
//! # Architecture
//!
//! ```text
//! Consumer Thread                          Tick Thread ("lifestream-tick")
//!     |                                        |
//!     |                                        | select(ticker, cancel, detach)
//!     |                                        | sim.step()
//!     |<--next()--- [snapshot: bounded(0|1)] --| send(snapshot) / cancel / detach
//!     |                                        |
//!     |--cancel()--> CancelToken ------------->| wakes either wait
//!     |--drop()----> detach sender dropped --->| stops: ConsumerDisconnected
//!     |--join()----> JoinHandle<Simulation> <--| returns stopped Simulation
//! ```
//!
//! Closure of the stream (`next()` returning `None`) is the only
//! end-of-run signal a consumer needs; the [`RunReport`] says why.

use std::thread::JoinHandle;

use crossbeam_channel::{select, Receiver, Sender};
use lifestream_core::Generation;
use lifestream_grid::Grid;

use crate::cancel::CancelToken;
use crate::config::{ConfigError, SimConfig};
use crate::driver::{Simulation, Snapshot, StopReason};
use crate::metrics::RunMetrics;

/// Build a simulation from `config` and start streaming it.
///
/// Shorthand for [`Simulation::new()`] followed by [`Simulation::run()`].
pub fn spawn(config: SimConfig, cancel: CancelToken) -> Result<SnapshotStream, ConfigError> {
    Simulation::new(config)?.run(cancel)
}

// ── RunReport ────────────────────────────────────────────────────

/// Final state of a streaming run, recovered from the driver thread.
#[derive(Debug)]
pub struct RunReport {
    /// Why the driver stopped.
    pub stop_reason: StopReason,
    /// Last generation the grid reached.
    pub generation: Generation,
    /// The grid as of the last fully applied step.
    pub grid: Grid,
    /// Cumulative counters.
    pub metrics: RunMetrics,
}

// ── SnapshotStream ───────────────────────────────────────────────

/// Blocking iterator over the generations of a running simulation.
///
/// Created by [`Simulation::run()`]. Each item is an owned [`Snapshot`]
/// of the alive cells after one step. Once the token is cancelled no
/// further snapshot is yielded, even one already waiting in the channel.
///
/// Dropping the stream detaches the consumer: the driver stops with
/// [`StopReason::ConsumerDisconnected`] and the thread is joined.
#[derive(Debug)]
pub struct SnapshotStream {
    snapshot_rx: Option<Receiver<Snapshot>>,
    detach: Option<Sender<()>>,
    cancel: CancelToken,
    handle: Option<JoinHandle<Simulation>>,
}

impl SnapshotStream {
    pub(crate) fn new(
        snapshot_rx: Receiver<Snapshot>,
        detach: Sender<()>,
        cancel: CancelToken,
        handle: JoinHandle<Simulation>,
    ) -> Self {
        Self {
            snapshot_rx: Some(snapshot_rx),
            detach: Some(detach),
            cancel,
            handle: Some(handle),
        }
    }

    /// Request cancellation. The stream closes; the driver exits after
    /// finishing any step already in progress.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// The token controlling this run.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Cancel if still running, wait for the driver thread and return
    /// the final state.
    ///
    /// A run that already ended on its own keeps its stop reason.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EngineRecoveryFailed`] if the driver thread panicked.
    pub fn join(mut self) -> Result<RunReport, ConfigError> {
        self.cancel.cancel();
        let handle = self
            .handle
            .take()
            .ok_or(ConfigError::EngineRecoveryFailed)?;
        let sim = handle
            .join()
            .map_err(|_| ConfigError::EngineRecoveryFailed)?;
        Ok(RunReport {
            stop_reason: sim.stop_reason().unwrap_or(StopReason::Cancelled),
            generation: sim.generation(),
            metrics: sim.metrics().clone(),
            grid: sim.into_grid(),
        })
    }
}

impl Iterator for SnapshotStream {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        if self.cancel.is_cancelled() {
            return None;
        }
        let rx = self.snapshot_rx.as_ref()?;
        let received = select! {
            recv(rx) -> msg => msg.ok(),
            recv(self.cancel.signal()) -> _ => None,
        };
        // Cancelled while blocked: drop the late snapshot.
        if self.cancel.is_cancelled() {
            return None;
        }
        received
    }
}

impl Drop for SnapshotStream {
    fn drop(&mut self) {
        self.snapshot_rx.take();
        self.detach.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
