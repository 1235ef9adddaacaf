//! The [`Rule`] trait.
//!
//! A rule decides a cell's next state from its current state and its
//! live-neighbour count. Rules are a property of the simulation, not of
//! the grid, so the driver can swap one for another on a live grid.

use lifestream_core::{Cell, CellState};
use lifestream_grid::Grid;

/// A deterministic, side-effect-free cell update rule.
///
/// # Contract
///
/// - `next_state()` MUST be a pure function of its arguments.
/// - `&self`: rules are stateless between evaluations.
/// - Frontier-based stepping is only equivalent to a full-grid scan for
///   [quiescent](Rule::is_quiescent) rules, so the engine rejects the
///   others at configuration time.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores the active rule as
/// `Box<dyn Rule>`.
///
/// # Examples
///
/// A rule under which every live cell dies:
///
/// ```
/// use lifestream_core::CellState;
/// use lifestream_rule::Rule;
///
/// struct Extinction;
///
/// impl Rule for Extinction {
///     fn name(&self) -> &str { "extinction" }
///
///     fn next_state(&self, _state: CellState, _alive: u8) -> CellState {
///         CellState::Dead
///     }
/// }
///
/// assert_eq!(Extinction.next_state(CellState::Alive, 3), CellState::Dead);
/// assert!(Extinction.is_quiescent());
/// ```
pub trait Rule: Send + 'static {
    /// Human-readable name for logs and error reporting.
    fn name(&self) -> &str;

    /// Next state of a cell in `state` with `alive_neighbours` live
    /// neighbours (0 to 8).
    fn next_state(&self, state: CellState, alive_neighbours: u8) -> CellState;

    /// Next state of `cell` on `grid`.
    ///
    /// Counts the alive cells among the grid's eight toroidal neighbours
    /// of `cell` and defers to [`next_state()`](Rule::next_state).
    fn evaluate(&self, cell: Cell, grid: &Grid) -> CellState {
        self.next_state(cell.state, grid.alive_neighbours(cell.position))
    }

    /// Whether a dead cell with no live neighbours stays dead.
    ///
    /// Cells outside the frontier are never evaluated; that is only
    /// sound if empty regions cannot come alive on their own.
    fn is_quiescent(&self) -> bool {
        self.next_state(CellState::Dead, 0) == CellState::Dead
    }
}
