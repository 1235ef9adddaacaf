//! The [`Simulation`] driver and its state machine.
//!
//! A simulation owns its [`Grid`], the active [`Rule`] and the frontier
//! of positions that may change next. Each [`step()`](Simulation::step)
//! evaluates only the frontier, applies every change at once and
//! rebuilds the frontier from the changed cells.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`] but not [`Sync`]. It can be stepped directly
//! (lockstep) or moved onto a driver thread with
//! [`run()`](Simulation::run), which hands it back when the run ends.
//! Nothing outside the owner ever sees the grid by reference; consumers
//! receive owned [`Snapshot`]s.

use std::fmt;
use std::thread;
use std::time::Instant;

use lifestream_core::{Cell, Generation, Position};
use lifestream_grid::{AliveSet, Frontier, Grid};
use lifestream_rule::Rule;
use tracing::{debug, info};

use crate::cancel::CancelToken;
use crate::config::{ConfigError, SimConfig};
use crate::metrics::{RunMetrics, StepMetrics};
use crate::stream::SnapshotStream;
use crate::tick_thread::TickThreadState;

// Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── State machine ───────────────────────────────────────────────

/// Why a simulation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// A step changed no cell.
    FixedPoint,
    /// Cancellation was requested.
    Cancelled,
    /// The stream consumer went away.
    ConsumerDisconnected,
    /// The configured generation limit was reached.
    GenerationLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedPoint => write!(f, "fixed point"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::ConsumerDisconnected => write!(f, "consumer disconnected"),
            Self::GenerationLimit => write!(f, "generation limit"),
        }
    }
}

/// Lifecycle of a [`Simulation`]: `Idle -> Running -> Stopped`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DriverState {
    /// Constructed, no step taken yet.
    Idle,
    /// Stepping.
    Running,
    /// Terminal.
    Stopped(StopReason),
}

/// Result of a single [`Simulation::step()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The grid advanced to `generation`, changing `changed` cells.
    Advanced {
        /// Generation the grid is now in.
        generation: Generation,
        /// Number of cells whose state changed.
        changed: usize,
    },
    /// The simulation is stopped; no step was applied.
    Stopped(StopReason),
}

// ── Snapshot ────────────────────────────────────────────────────

/// Owned copy of the alive cells after a step.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Generation the cells belong to.
    pub generation: Generation,
    /// Side length of the torus.
    pub size: i32,
    /// Alive cells keyed by position.
    pub cells: AliveSet,
}

impl Snapshot {
    /// Number of alive cells.
    pub fn alive_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if `position` is alive in this snapshot.
    pub fn is_alive(&self, position: Position) -> bool {
        self.cells.contains_key(&position)
    }

    /// Alive positions sorted by `(x, y)`.
    pub fn sorted_positions(&self) -> Vec<Position> {
        let mut positions: Vec<Position> = self.cells.keys().copied().collect();
        positions.sort_unstable();
        positions
    }
}

// ── Simulation ──────────────────────────────────────────────────

/// A Game of Life run over a sparse toroidal grid.
///
/// # Example
///
/// ```
/// use lifestream_engine::{SimConfig, Simulation, StepOutcome, StopReason};
/// use lifestream_grid::Pattern;
///
/// let mut sim = Simulation::new(SimConfig::new(10, Pattern::Block.cells(10)))?;
/// assert_eq!(sim.step(), StepOutcome::Stopped(StopReason::FixedPoint));
/// # Ok::<(), lifestream_engine::ConfigError>(())
/// ```
pub struct Simulation {
    grid: Grid,
    rule: Box<dyn Rule>,
    frontier: Frontier,
    generation: Generation,
    state: DriverState,
    config: RunSettings,
    last_metrics: StepMetrics,
    metrics: RunMetrics,
}

/// The parts of [`SimConfig`] the driver keeps after construction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RunSettings {
    pub tick_interval: std::time::Duration,
    pub handoff_capacity: usize,
    pub max_generations: Option<u64>,
}

impl Simulation {
    /// Validate `config`, seed the grid and compute the initial frontier.
    ///
    /// The simulation starts [`Idle`](DriverState::Idle) at generation 0.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`SimConfig::validate()`], and
    /// [`ConfigError::Grid`] if the initial cells do not fit the grid.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.size, config.initial_cells)?;
        let frontier = grid.full_frontier();
        debug!(
            size = grid.size(),
            alive = grid.alive_count(),
            frontier = frontier.len(),
            rule = config.rule.name(),
            "simulation seeded"
        );
        Ok(Self {
            grid,
            rule: config.rule,
            frontier,
            generation: Generation::default(),
            state: DriverState::Idle,
            config: RunSettings {
                tick_interval: config.tick_interval,
                handoff_capacity: config.handoff_capacity,
                max_generations: config.max_generations,
            },
            last_metrics: StepMetrics::default(),
            metrics: RunMetrics::default(),
        })
    }

    /// Advance one generation.
    ///
    /// Evaluates the rule on every frontier position against the
    /// unmodified grid, then applies all changes together. A step that
    /// changes nothing moves the simulation to
    /// `Stopped(FixedPoint)`. Calling `step()` on an idle simulation
    /// starts it; on a stopped one it is a no-op.
    pub fn step(&mut self) -> StepOutcome {
        match self.state {
            DriverState::Stopped(reason) => return StepOutcome::Stopped(reason),
            DriverState::Idle => self.state = DriverState::Running,
            DriverState::Running => {}
        }
        if self.generation_limit_reached() {
            self.finish(StopReason::GenerationLimit);
            return StepOutcome::Stopped(StopReason::GenerationLimit);
        }

        let started = Instant::now();
        let changed: Vec<Cell> = self
            .frontier
            .iter()
            .filter_map(|&position| {
                let cell = self.grid.cell_at(position);
                let next = self.rule.evaluate(cell, &self.grid);
                (next != cell.state).then_some(cell.with_state(next))
            })
            .collect();
        let evaluated = self.frontier.len();

        if !changed.is_empty() {
            self.grid.apply(&changed);
            self.frontier = self.grid.frontier(&changed);
            self.generation = self.generation.next();
        }

        self.last_metrics = StepMetrics {
            frontier_len: evaluated,
            changed_len: changed.len(),
            alive_len: self.grid.alive_count(),
            step_us: started.elapsed().as_micros() as u64,
        };
        self.metrics.record_step(&self.last_metrics);

        if changed.is_empty() {
            debug!(generation = %self.generation, evaluated, "fixed point");
            self.finish(StopReason::FixedPoint);
            return StepOutcome::Stopped(StopReason::FixedPoint);
        }

        debug!(
            generation = %self.generation,
            frontier = evaluated,
            changed = changed.len(),
            alive = self.grid.alive_count(),
            "step"
        );
        StepOutcome::Advanced {
            generation: self.generation,
            changed: changed.len(),
        }
    }

    /// Step until the simulation stops or `limit` steps have advanced.
    ///
    /// Returns the stop reason, or `None` if the limit ran out first.
    pub fn run_to_fixed_point(&mut self, limit: u64) -> Option<StopReason> {
        for _ in 0..limit {
            if let StepOutcome::Stopped(reason) = self.step() {
                return Some(reason);
            }
        }
        self.stop_reason()
    }

    /// Stop with [`StopReason::Cancelled`] unless already stopped.
    pub fn stop(&mut self) {
        self.finish(StopReason::Cancelled);
    }

    /// Replace the rule on a live grid.
    ///
    /// Cells that were stable under the old rule may not be under the
    /// new one, so the frontier is re-seeded from every alive cell.
    ///
    /// # Errors
    ///
    /// [`ConfigError::RuleNotQuiescent`] if the rule would bring empty
    /// regions to life; the current rule stays in place.
    pub fn set_rule(&mut self, rule: Box<dyn Rule>) -> Result<(), ConfigError> {
        if !rule.is_quiescent() {
            return Err(ConfigError::RuleNotQuiescent {
                rule: rule.name().to_string(),
            });
        }
        info!(from = self.rule.name(), to = rule.name(), "rule swapped");
        self.rule = rule;
        self.frontier = self.grid.full_frontier();
        Ok(())
    }

    /// Move the simulation onto a driver thread and stream its
    /// generations.
    ///
    /// The driver steps once per tick interval and hands each new
    /// generation to the returned [`SnapshotStream`], blocking until the
    /// consumer takes it. The stream closes at a fixed point, on
    /// cancellation through `cancel`, or at the generation limit.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ThreadSpawnFailed`] if the OS refuses the thread.
    pub fn run(mut self, cancel: CancelToken) -> Result<SnapshotStream, ConfigError> {
        if self.state == DriverState::Idle {
            self.state = DriverState::Running;
        }
        let capacity = self.config.handoff_capacity;
        let (snapshot_tx, snapshot_rx) = crossbeam_channel::bounded(capacity);
        let (detach_tx, detach_rx) = crossbeam_channel::bounded(0);

        info!(
            size = self.grid.size(),
            alive = self.grid.alive_count(),
            interval_ms = self.config.tick_interval.as_millis() as u64,
            capacity,
            rule = self.rule.name(),
            "starting simulation"
        );

        let driver_cancel = cancel.clone();
        let handle = thread::Builder::new()
            .name("lifestream-tick".into())
            .spawn(move || {
                TickThreadState::new(self, snapshot_tx, driver_cancel, detach_rx).run()
            })
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("driver thread: {e}"),
            })?;

        Ok(SnapshotStream::new(snapshot_rx, detach_tx, cancel, handle))
    }

    /// Owned copy of the current alive cells.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            size: self.grid.size(),
            cells: self.grid.alive_snapshot(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Why the simulation stopped, if it has.
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.state {
            DriverState::Stopped(reason) => Some(reason),
            _ => None,
        }
    }

    /// The grid in its current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the simulation and return its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// The active rule.
    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Positions to evaluate on the next step.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Generations advanced so far.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Cumulative metrics.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    pub(crate) fn settings(&self) -> RunSettings {
        self.config
    }

    pub(crate) fn record_emission(&mut self) {
        self.metrics.emissions += 1;
    }

    pub(crate) fn generation_limit_reached(&self) -> bool {
        self.config
            .max_generations
            .is_some_and(|limit| self.generation.0 >= limit)
    }

    /// Enter `Stopped(reason)` unless already stopped.
    pub(crate) fn finish(&mut self, reason: StopReason) {
        if !matches!(self.state, DriverState::Stopped(_)) {
            self.state = DriverState::Stopped(reason);
        }
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("size", &self.grid.size())
            .field("alive", &self.grid.alive_count())
            .field("frontier", &self.frontier.len())
            .field("generation", &self.generation)
            .field("state", &self.state)
            .field("rule", &self.rule.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifestream_core::CellState;
    use lifestream_grid::Pattern;
    use lifestream_rule::RuleSet;

    fn sim(size: i32, cells: Vec<Cell>) -> Simulation {
        Simulation::new(SimConfig::new(size, cells)).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn starts_idle_at_generation_zero() {
        let s = sim(10, Pattern::Glider.cells(10));
        assert_eq!(s.state(), DriverState::Idle);
        assert_eq!(s.generation(), Generation(0));
        assert_eq!(s.grid().alive_count(), 5);
        assert_eq!(s.frontier().len(), s.grid().full_frontier().len());
    }

    #[test]
    fn construction_errors_propagate() {
        let err = Simulation::new(SimConfig::new(3, vec![Cell::alive(3, 0)])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Grid(lifestream_core::GridError::OutOfBounds { .. })
        ));
        let too_many = (0..5).map(|i| Cell::alive(i % 2, 0)).collect();
        let err = Simulation::new(SimConfig::new(2, too_many)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Grid(lifestream_core::GridError::InvalidCellCount { .. })
        ));
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn empty_grid_is_immediately_fixed() {
        let mut s = sim(7, Vec::new());
        assert_eq!(s.step(), StepOutcome::Stopped(StopReason::FixedPoint));
        assert_eq!(s.state(), DriverState::Stopped(StopReason::FixedPoint));
        assert_eq!(s.generation(), Generation(0));
        assert_eq!(s.last_metrics().frontier_len, 0);
    }

    #[test]
    fn isolated_pair_dies_in_one_step() {
        let mut s = sim(10, vec![Cell::alive(0, 0), Cell::alive(1, 0)]);
        assert_eq!(
            s.step(),
            StepOutcome::Advanced {
                generation: Generation(1),
                changed: 2
            }
        );
        assert!(s.grid().is_empty());
        assert_eq!(s.step(), StepOutcome::Stopped(StopReason::FixedPoint));
        assert_eq!(s.generation(), Generation(1));
    }

    #[test]
    fn blinker_oscillates() {
        let mut s = sim(8, Pattern::Blinker.cells(8));
        let start = s.grid().sorted_positions();
        s.step();
        let middle = s.grid().sorted_positions();
        assert_ne!(start, middle);
        assert_eq!(middle.len(), 3);
        s.step();
        assert_eq!(s.grid().sorted_positions(), start);
    }

    #[test]
    fn glider_returns_translated_after_four_steps() {
        let size = 25;
        let mut s = sim(size, Pattern::Glider.cells(size));
        let start = s.grid().sorted_positions();
        for _ in 0..4 {
            assert!(matches!(s.step(), StepOutcome::Advanced { .. }));
            assert_eq!(s.grid().alive_count(), 5);
        }
        let mut moved: Vec<Position> = start
            .iter()
            .map(|p| Position::new((p.x + 1) % size, (p.y + 1) % size))
            .collect();
        moved.sort_unstable();
        assert_eq!(s.grid().sorted_positions(), moved);
    }

    #[test]
    fn frontier_is_rebuilt_from_changes() {
        let mut s = sim(10, vec![Cell::alive(0, 0), Cell::alive(1, 0)]);
        s.step();
        // Both cells changed: themselves plus the union of their neighbours.
        assert_eq!(s.frontier().len(), 12);
        assert!(s.frontier().contains(&Position::new(9, 9)));
    }

    #[test]
    fn stopped_simulation_ignores_steps() {
        let mut s = sim(10, Pattern::Glider.cells(10));
        s.stop();
        let before = s.snapshot();
        assert_eq!(s.step(), StepOutcome::Stopped(StopReason::Cancelled));
        assert_eq!(s.snapshot(), before);
        // A later reason never overwrites the first.
        s.finish(StopReason::FixedPoint);
        assert_eq!(s.stop_reason(), Some(StopReason::Cancelled));
    }

    #[test]
    fn generation_limit_stops_lockstep() {
        let mut config = SimConfig::new(12, Pattern::Glider.cells(12));
        config.max_generations = Some(3);
        let mut s = Simulation::new(config).unwrap();
        assert_eq!(s.run_to_fixed_point(10), Some(StopReason::GenerationLimit));
        assert_eq!(s.generation(), Generation(3));
        assert_eq!(s.metrics().steps, 3);
    }

    #[test]
    fn run_to_fixed_point_reports_exhausted_limit() {
        let mut s = sim(12, Pattern::Glider.cells(12));
        assert_eq!(s.run_to_fixed_point(6), None);
        assert_eq!(s.generation(), Generation(6));
        assert_eq!(s.state(), DriverState::Running);
    }

    // ── Rules ───────────────────────────────────────────────────

    #[test]
    fn set_rule_reseeds_frontier() {
        // A block is stable under Conway but dies under Seeds.
        let mut s = sim(10, Pattern::Block.cells(10));
        s.set_rule(Box::new(RuleSet::seeds())).unwrap();
        assert_eq!(s.frontier().len(), s.grid().full_frontier().len());
        match s.step() {
            StepOutcome::Advanced { changed, .. } => assert!(changed >= 4),
            other => panic!("expected advance, got {other:?}"),
        }
        for pos in Pattern::Block.cells(10).iter().map(|c| c.position) {
            assert_eq!(s.grid().cell_at(pos).state, CellState::Dead);
        }
    }

    #[test]
    fn set_rule_rejects_non_quiescent() {
        let mut s = sim(10, Vec::new());
        let b0: RuleSet = "B0/S".parse().unwrap();
        assert!(matches!(
            s.set_rule(Box::new(b0)),
            Err(ConfigError::RuleNotQuiescent { .. })
        ));
        assert_eq!(s.rule().name(), "B3/S23");
    }

    // ── Snapshots ───────────────────────────────────────────────

    #[test]
    fn snapshot_does_not_alias_grid() {
        let mut s = sim(10, Pattern::Blinker.cells(10));
        let snap = s.snapshot();
        let seeded = s.grid().sorted_positions();
        s.step();
        assert_eq!(snap.generation, Generation(0));
        assert_eq!(snap.sorted_positions(), seeded);
        assert!(seeded.iter().all(|&p| snap.is_alive(p)));
        assert!(s.grid().alive_cells().any(|c| !snap.is_alive(c.position)));
    }
}
