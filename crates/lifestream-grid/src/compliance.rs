//! Grid invariant compliance helpers.
//!
//! These functions verify the structural invariants a [`Grid`] must keep
//! at all times. Reused by the grid and pattern test modules.

use std::collections::HashSet;

use lifestream_core::{CellState, Position};

use crate::grid::Grid;
use crate::torus;

fn all_positions(grid: &Grid) -> impl Iterator<Item = Position> {
    let size = grid.size();
    (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
}

/// Assert that every stored cell is alive and keyed by its own position.
pub fn assert_alive_set_consistent(grid: &Grid) {
    let snapshot = grid.alive_snapshot();
    for (key, cell) in &snapshot {
        assert_eq!(*key, cell.position, "alive-set key {key} holds {cell}");
        assert_eq!(cell.state, CellState::Alive, "alive-set holds {cell}");
        assert!(key.in_bounds(grid.size()), "alive-set key {key} out of bounds");
    }
}

/// Assert that `cell_at` agrees with the alive-set at every position.
pub fn assert_cell_at_total(grid: &Grid) {
    for position in all_positions(grid) {
        let cell = grid.cell_at(position);
        assert_eq!(cell.position, position);
        assert_eq!(cell.is_alive(), grid.is_alive(position), "mismatch at {position}");
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for position in all_positions(grid) {
        for nb in grid.neighbours(position) {
            let back: HashSet<Position> = grid
                .neighbours(nb.position)
                .iter()
                .map(|c| c.position)
                .collect();
            assert!(
                back.contains(&position),
                "neighbour symmetry violated: {} in N({position}) but not the reverse",
                nb.position
            );
        }
    }
}

/// Assert that the alive-neighbour count equals a direct count over
/// `neighbours()`.
pub fn assert_alive_neighbours_consistent(grid: &Grid) {
    for position in all_positions(grid) {
        let direct = grid
            .neighbours(position)
            .iter()
            .filter(|c| c.is_alive())
            .count() as u8;
        assert_eq!(grid.alive_neighbours(position), direct, "at {position}");
    }
}

/// Assert that the full frontier holds every alive cell and every
/// neighbour of one, exactly once.
pub fn assert_full_frontier_complete(grid: &Grid) {
    let frontier = grid.full_frontier();
    let mut seen = HashSet::new();
    for position in &frontier {
        assert!(seen.insert(*position), "frontier repeats {position}");
    }
    for cell in grid.alive_cells() {
        assert!(frontier.contains(&cell.position));
        for nb in torus::neighbour_positions(cell.position, grid.size()) {
            assert!(frontier.contains(&nb), "frontier misses {nb}");
        }
    }
}

/// Run every compliance check.
pub fn run_full_compliance(grid: &Grid) {
    assert_alive_set_consistent(grid);
    assert_cell_at_total(grid);
    assert_neighbours_symmetric(grid);
    assert_alive_neighbours_consistent(grid);
    assert_full_frontier_complete(grid);
}
