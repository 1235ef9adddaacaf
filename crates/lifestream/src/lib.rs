//! lifestream: Conway's Game of Life on a sparse toroidal grid, streamed
//! generation by generation to a consumer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all lifestream sub-crates. For most users, adding `lifestream` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lifestream::prelude::*;
//! use std::time::Duration;
//!
//! // A glider on a 25x25 torus, one generation every millisecond.
//! let config = SimConfig {
//!     tick_interval: Duration::from_millis(1),
//!     ..SimConfig::new(25, Pattern::Glider.cells(25))
//! };
//! let token = CancelToken::new();
//! let mut stream = Simulation::new(config).unwrap().run(token.clone()).unwrap();
//!
//! for snapshot in stream.by_ref().take(8) {
//!     // A glider only ever translates.
//!     assert_eq!(snapshot.alive_count(), 5);
//! }
//! token.cancel();
//!
//! let report = stream.join().unwrap();
//! assert_eq!(report.stop_reason, StopReason::Cancelled);
//! assert_eq!(report.grid.alive_count(), 5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifestream-core` | `Position`, `CellState`, `Cell`, `Generation`, errors |
//! | [`grid`] | `lifestream-grid` | Sparse toroidal `Grid`, `Frontier`, patterns |
//! | [`rule`] | `lifestream-rule` | `Rule` trait and clause-based `RuleSet` |
//! | [`engine`] | `lifestream-engine` | `Simulation` driver and snapshot streaming |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell and position value types (`lifestream-core`).
///
/// Also holds the construction and decode errors
/// [`types::GridError`] and [`types::StateError`].
pub use lifestream_core as types;

/// Sparse toroidal grid storage (`lifestream-grid`).
///
/// [`grid::Grid`] keeps only alive cells; [`grid::Frontier`] is the set
/// of positions re-evaluated per step.
pub use lifestream_grid as grid;

/// Cell update rules (`lifestream-rule`).
///
/// The [`rule::Rule`] trait is the extension point for alternative
/// automata; [`rule::RuleSet`] covers birth/survival rules.
pub use lifestream_rule as rule;

/// Simulation driver and streaming (`lifestream-engine`).
///
/// [`engine::Simulation`] for lockstep stepping or streaming via
/// [`engine::SnapshotStream`].
pub use lifestream_engine as engine;

/// Common imports for typical lifestream usage.
///
/// ```rust
/// use lifestream::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use lifestream_core::{Cell, CellState, Generation, Position};

    // Errors
    pub use lifestream_core::{GridError, StateError};
    pub use lifestream_engine::ConfigError;
    pub use lifestream_rule::RuleError;

    // Grid
    pub use lifestream_grid::{random_soup, AliveSet, Grid, Pattern};

    // Rules
    pub use lifestream_rule::{Rule, RuleSet};

    // Engine
    pub use lifestream_engine::{
        CancelToken, DriverState, RunReport, SimConfig, Simulation, Snapshot, SnapshotStream,
        StepOutcome, StopReason,
    };
}
