//! Driver loop for streaming runs.
//!
//! The tick thread owns the [`Simulation`] exclusively (moved in via
//! `thread::spawn`) and returns it on exit. Each iteration waits for the
//! next tick, runs one step, and hands an owned snapshot to the consumer
//! through a bounded channel. Both waits also select on the cancel and
//! detach signals, so shutdown never waits out a tick or a slow consumer.

use crossbeam_channel::{select, Receiver, Sender};
use tracing::{info, trace, warn};

use crate::cancel::CancelToken;
use crate::driver::{Simulation, Snapshot, StepOutcome, StopReason};

/// What woke the driver while it was waiting.
enum Wake {
    Tick,
    Cancelled,
    Detached,
}

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    sim: Simulation,
    snapshot_tx: Sender<Snapshot>,
    cancel: CancelToken,
    /// Disconnects when the stream is dropped.
    detached: Receiver<()>,
}

impl TickThreadState {
    pub fn new(
        sim: Simulation,
        snapshot_tx: Sender<Snapshot>,
        cancel: CancelToken,
        detached: Receiver<()>,
    ) -> Self {
        Self {
            sim,
            snapshot_tx,
            cancel,
            detached,
        }
    }

    /// Main tick loop. Runs until the simulation stops.
    ///
    /// Consumes self and returns the `Simulation`, stopped, so the
    /// caller can recover the final grid via `JoinHandle<Simulation>`.
    /// The snapshot sender is dropped on return, which closes the stream.
    pub fn run(self) -> Simulation {
        let Self {
            mut sim,
            snapshot_tx,
            cancel,
            detached,
        } = self;
        // Dropped with this frame, on every exit path.
        let ticker = crossbeam_channel::tick(sim.settings().tick_interval);

        let reason = loop {
            // 1. Wait for the next tick.
            let wake = select! {
                recv(ticker) -> _ => Wake::Tick,
                recv(cancel.signal()) -> _ => Wake::Cancelled,
                recv(detached) -> _ => Wake::Detached,
            };
            match wake {
                Wake::Tick => {}
                Wake::Cancelled => break StopReason::Cancelled,
                Wake::Detached => break StopReason::ConsumerDisconnected,
            }
            if cancel.is_cancelled() {
                break StopReason::Cancelled;
            }

            // 2. Step. Fixed point and generation limit end the run here.
            let generation = match sim.step() {
                StepOutcome::Advanced { generation, .. } => generation,
                StepOutcome::Stopped(reason) => break reason,
            };

            // 3. Hand off, blocking until the consumer accepts.
            let snapshot = sim.snapshot();
            let wake = select! {
                send(snapshot_tx, snapshot) -> res => match res {
                    Ok(()) => Wake::Tick,
                    Err(_) => Wake::Detached,
                },
                recv(cancel.signal()) -> _ => Wake::Cancelled,
                recv(detached) -> _ => Wake::Detached,
            };
            match wake {
                Wake::Tick => {
                    sim.record_emission();
                    trace!(%generation, "snapshot handed off");
                }
                Wake::Cancelled => break StopReason::Cancelled,
                Wake::Detached => {
                    warn!(%generation, "consumer disconnected during handoff");
                    break StopReason::ConsumerDisconnected;
                }
            }

            if sim.generation_limit_reached() {
                break StopReason::GenerationLimit;
            }
        };

        sim.finish(reason);
        info!(
            %reason,
            generation = %sim.generation(),
            alive = sim.grid().alive_count(),
            emissions = sim.metrics().emissions,
            "simulation stopped"
        );
        sim
    }
}
