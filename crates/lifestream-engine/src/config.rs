//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the builder-input for a [`Simulation`](crate::Simulation).
//! [`validate()`](SimConfig::validate) checks the structural invariants
//! that do not need a grid; the cell list itself is checked when the
//! simulation seeds its grid.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use lifestream_core::{Cell, GridError};
use lifestream_rule::{Rule, RuleSet};

/// Default side length of the torus.
pub const DEFAULT_SIZE: i32 = 25;

/// Default interval between generations.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while configuring or starting a simulation.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The grid could not be built from the size and initial cells.
    Grid(GridError),
    /// The tick interval is zero.
    InvalidTickInterval,
    /// The handoff channel capacity is neither 0 nor 1.
    InvalidHandoffCapacity {
        /// The configured capacity.
        configured: usize,
    },
    /// The rule brings dead cells with no live neighbours to life, so
    /// frontier-based stepping would miss them.
    RuleNotQuiescent {
        /// Name of the rejected rule.
        rule: String,
    },
    /// The driver thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
    /// The simulation could not be recovered from the driver thread
    /// (the thread panicked).
    EngineRecoveryFailed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidTickInterval => write!(f, "tick interval must be non-zero"),
            Self::InvalidHandoffCapacity { configured } => {
                write!(f, "handoff capacity must be 0 or 1, got {configured}")
            }
            Self::RuleNotQuiescent { rule } => {
                write!(f, "rule {rule} revives cells with no live neighbours")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
            Self::EngineRecoveryFailed => {
                write!(f, "simulation could not be recovered from driver thread")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for a simulation.
///
/// Passed by value to [`Simulation::new()`](crate::Simulation::new),
/// which consumes it.
pub struct SimConfig {
    /// Side length of the square torus. Must be positive.
    pub size: i32,
    /// Cells to seed the grid with; later entries at the same position
    /// win. Default: empty.
    pub initial_cells: Vec<Cell>,
    /// Update rule. Default: Conway (`B3/S23`).
    pub rule: Box<dyn Rule>,
    /// Time between generations when streaming. Default: 500 ms.
    pub tick_interval: Duration,
    /// Snapshot channel capacity: 0 for a rendezvous, 1 for a single
    /// slot. Default: 1.
    pub handoff_capacity: usize,
    /// Stop after this many generations. `None` = run until a fixed
    /// point or cancellation.
    pub max_generations: Option<u64>,
}

impl SimConfig {
    /// Configuration for a torus of `size` seeded with `initial_cells`,
    /// everything else at its default.
    pub fn new(size: i32, initial_cells: Vec<Cell>) -> Self {
        Self {
            size,
            initial_cells,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    ///
    /// Cell bounds and counts are checked later, by
    /// [`Grid::new()`](lifestream_grid::Grid::new).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size <= 0 {
            return Err(GridError::InvalidSize { size: self.size }.into());
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::InvalidTickInterval);
        }
        if self.handoff_capacity > 1 {
            return Err(ConfigError::InvalidHandoffCapacity {
                configured: self.handoff_capacity,
            });
        }
        if !self.rule.is_quiescent() {
            return Err(ConfigError::RuleNotQuiescent {
                rule: self.rule.name().to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            initial_cells: Vec::new(),
            rule: Box::new(RuleSet::conway()),
            tick_interval: DEFAULT_TICK_INTERVAL,
            handoff_capacity: 1,
            max_generations: None,
        }
    }
}

impl fmt::Debug for SimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimConfig")
            .field("size", &self.size)
            .field("initial_cells", &self.initial_cells.len())
            .field("rule", &self.rule.name())
            .field("tick_interval", &self.tick_interval)
            .field("handoff_capacity", &self.handoff_capacity)
            .field("max_generations", &self.max_generations)
            .finish()
    }
}
