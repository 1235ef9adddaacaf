//! Sparse toroidal [`Grid`] holding only the currently alive cells.

use indexmap::IndexMap;
use lifestream_core::{Cell, CellState, GridError, Position};
use smallvec::SmallVec;

use crate::frontier::Frontier;
use crate::torus;

/// Mapping from position to alive cell.
///
/// Absence means dead. Every entry's key equals its cell's position and
/// every entry's state is [`CellState::Alive`].
pub type AliveSet = IndexMap<Position, Cell>;

/// A square toroidal grid of side `size`, stored sparsely.
///
/// Space is proportional to the number of alive cells, not to
/// `size * size`. Dead cells are synthesized on lookup.
///
/// The grid has a single owner: the simulation driver mutates it in
/// place between steps, and consumers only ever see copies produced by
/// [`alive_snapshot()`](Grid::alive_snapshot).
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: i32,
    alive: AliveSet,
}

impl Grid {
    /// Build a grid from a side length and an initial cell list.
    ///
    /// Cells are applied in order, so a later cell at a position already
    /// seen overwrites the earlier one (a dead cell removes it).
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidSize`] if `size <= 0`.
    /// - [`GridError::InvalidCellCount`] if more cells are given than
    ///   the grid has positions.
    /// - [`GridError::OutOfBounds`] if any cell lies outside `[0, size)`.
    pub fn new<I>(size: i32, initial_cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Cell>,
    {
        if size <= 0 {
            return Err(GridError::InvalidSize { size });
        }
        let cells: Vec<Cell> = initial_cells.into_iter().collect();
        let capacity = (size as u64) * (size as u64);
        if cells.len() as u64 > capacity {
            return Err(GridError::InvalidCellCount {
                count: cells.len(),
                capacity,
            });
        }
        if let Some(bad) = cells.iter().find(|c| !c.position.in_bounds(size)) {
            return Err(GridError::OutOfBounds {
                position: bad.position,
                size,
            });
        }

        let mut grid = Self {
            size,
            alive: AliveSet::with_capacity(cells.len()),
        };
        grid.apply(&cells);
        Ok(grid)
    }

    /// An empty grid. Fails only on a non-positive size.
    pub fn empty(size: i32) -> Result<Self, GridError> {
        Self::new(size, std::iter::empty())
    }

    /// Side length.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of alive cells.
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    /// Returns `true` if no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// The cell at `position`: the stored alive cell, or a synthesized
    /// dead one.
    ///
    /// `position` must already be wrapped onto `[0, size)`; any other
    /// position is simply reported dead.
    pub fn cell_at(&self, position: Position) -> Cell {
        self.alive
            .get(&position)
            .copied()
            .unwrap_or(Cell::new(position, CellState::Dead))
    }

    /// Returns `true` if the cell at `position` is alive.
    pub fn is_alive(&self, position: Position) -> bool {
        self.alive.contains_key(&position)
    }

    /// The eight Moore neighbours of `position`, wrapped toroidally.
    ///
    /// Order is fixed: `dy` from -1 to 1, and `dx` from -1 to 1 within
    /// each row, skipping the centre.
    pub fn neighbours(&self, position: Position) -> SmallVec<[Cell; 8]> {
        torus::neighbour_positions(position, self.size)
            .into_iter()
            .map(|p| self.cell_at(p))
            .collect()
    }

    /// Count of alive cells among the eight neighbours of `position`.
    pub fn alive_neighbours(&self, position: Position) -> u8 {
        torus::neighbour_positions(position, self.size)
            .iter()
            .filter(|p| self.alive.contains_key(*p))
            .count() as u8
    }

    /// The frontier of `changed`: every changed position plus its
    /// neighbours, each once, in first-occurrence order.
    pub fn frontier(&self, changed: &[Cell]) -> Frontier {
        Frontier::from_changed(changed.iter().map(|c| c.position), self.size)
    }

    /// The frontier for a freshly seeded or re-ruled grid: every alive
    /// cell and its neighbours.
    pub fn full_frontier(&self) -> Frontier {
        Frontier::from_changed(self.alive.keys().copied(), self.size)
    }

    /// Write changed cells back: alive cells are inserted or overwritten,
    /// dead cells are removed.
    pub fn apply(&mut self, changed: &[Cell]) {
        for cell in changed {
            match cell.state {
                CellState::Alive => {
                    self.alive.insert(cell.position, *cell);
                }
                CellState::Dead => {
                    self.alive.swap_remove(&cell.position);
                }
            }
        }
    }

    /// An owned copy of the alive-set.
    ///
    /// The copy never aliases the grid's storage, so it stays valid while
    /// the grid keeps stepping.
    pub fn alive_snapshot(&self) -> AliveSet {
        self.alive.clone()
    }

    /// Iterate over alive cells.
    pub fn alive_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.alive.values()
    }

    /// Alive positions sorted by `(x, y)`.
    pub fn sorted_positions(&self) -> Vec<Position> {
        let mut positions: Vec<Position> = self.alive.keys().copied().collect();
        positions.sort_unstable();
        positions
    }
}
