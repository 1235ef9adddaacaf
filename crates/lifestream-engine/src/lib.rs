//! Simulation driver and snapshot streaming for lifestream.
//!
//! A [`Simulation`] owns a toroidal [`Grid`](lifestream_grid::Grid) and
//! a [`Rule`](lifestream_rule::Rule), and advances them one generation
//! per [`step()`](Simulation::step), re-evaluating only the frontier of
//! positions next to the previous step's changes. It runs in two modes:
//!
//! - **Lockstep**: call [`Simulation::step()`] directly.
//! - **Streaming**: [`Simulation::run()`] moves the simulation onto a
//!   driver thread that steps once per tick and hands owned
//!   [`Snapshot`]s to a [`SnapshotStream`] through a single-slot
//!   channel, with cooperative cancellation via [`CancelToken`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod config;
pub mod driver;
pub mod metrics;
pub mod stream;
mod tick_thread;

pub use cancel::CancelToken;
pub use config::{ConfigError, SimConfig, DEFAULT_SIZE, DEFAULT_TICK_INTERVAL};
pub use driver::{DriverState, Simulation, Snapshot, StepOutcome, StopReason};
pub use metrics::{RunMetrics, StepMetrics};
pub use stream::{spawn, RunReport, SnapshotStream};
