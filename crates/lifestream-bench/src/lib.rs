//! Benchmark profiles and utilities for the lifestream engine.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 torus, 30% random soup
//! - [`stress_profile`]: 316x316 torus (~100K positions), 30% random soup
//! - [`sparse_profile`]: 1000x1000 torus carrying a handful of gliders
//! - [`glider_fleet`]: deterministic lattice of gliders

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use lifestream_core::Cell;
use lifestream_engine::SimConfig;
use lifestream_grid::{random_soup, Pattern, PatternError};

/// Soup density shared by the dense profiles.
pub const SOUP_DENSITY: f64 = 0.3;

fn bench_config(size: i32, initial_cells: Vec<Cell>) -> SimConfig {
    SimConfig {
        tick_interval: Duration::from_millis(1),
        ..SimConfig::new(size, initial_cells)
    }
}

/// Build a reference benchmark profile: 100x100 torus (10K positions).
pub fn reference_profile(seed: u64) -> Result<SimConfig, PatternError> {
    Ok(bench_config(100, random_soup(100, SOUP_DENSITY, seed)?))
}

/// Build a stress benchmark profile: 316x316 torus (~100K positions).
///
/// Same density as [`reference_profile`] at 10x the area.
pub fn stress_profile(seed: u64) -> Result<SimConfig, PatternError> {
    Ok(bench_config(316, random_soup(316, SOUP_DENSITY, seed)?))
}

/// Build a sparse profile: `gliders` gliders on a 1000x1000 torus.
///
/// Work per step should track the glider count, not the area.
pub fn sparse_profile(gliders: usize) -> SimConfig {
    bench_config(1000, glider_fleet(1000, gliders))
}

/// Place `count` gliders on a square lattice with 16-cell spacing,
/// wrapping rows so every glider fits on a torus of `size`.
///
/// Deterministic for a given `(size, count)`.
pub fn glider_fleet(size: i32, count: usize) -> Vec<Cell> {
    const SPACING: i32 = 16;
    let per_row = (size / SPACING).max(1) as usize;
    (0..count)
        .flat_map(|i| {
            let x = (i % per_row) as i32 * SPACING + SPACING / 2;
            let y = (i / per_row) as i32 * SPACING + SPACING / 2;
            Pattern::Glider.cells_at(lifestream_core::Position::new(x, y), size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifestream_engine::Simulation;

    #[test]
    fn reference_profile_validates() {
        let config = reference_profile(42).unwrap();
        config.validate().unwrap();
        assert!(Simulation::new(config).is_ok());
    }

    #[test]
    fn stress_profile_validates() {
        let config = stress_profile(42).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn glider_fleet_has_no_overlap() {
        let cells = glider_fleet(200, 20);
        assert_eq!(cells.len(), 100);
        let unique: std::collections::HashSet<_> = cells.iter().map(|c| c.position).collect();
        assert_eq!(unique.len(), 100, "gliders overlap");
        assert!(cells.iter().all(|c| c.position.in_bounds(200)));
    }

    #[test]
    fn sparse_profile_evaluates_few_cells() {
        let mut sim = Simulation::new(sparse_profile(4)).unwrap();
        sim.step();
        assert!(sim.last_metrics().frontier_len < 4 * 40);
        assert_eq!(sim.grid().alive_count(), 20);
    }
}
