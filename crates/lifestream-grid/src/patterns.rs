//! Built-in seed patterns and a seeded random soup generator.
//!
//! Patterns are fixed relative cell sets placed around the grid
//! midpoint `(size / 2, size / 2)` and wrapped onto the torus. They are
//! deterministic fixtures for tests, benchmarks and demos.

use std::fmt;
use std::str::FromStr;

use lifestream_core::{Cell, Position};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::PatternError;
use crate::torus;

/// A named still life, oscillator or spaceship.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Five-cell spaceship travelling diagonally; period 4.
    Glider,
    /// 2x2 still life.
    Block,
    /// Three-cell period-2 oscillator.
    Blinker,
    /// Two diagonally touching blocks; period-2 oscillator.
    Beacon,
    /// Five-cell methuselah that stabilises after 1103 generations on
    /// an unbounded plane.
    RPentomino,
}

impl Pattern {
    /// Every built-in pattern.
    pub const ALL: [Pattern; 5] = [
        Pattern::Glider,
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Beacon,
        Pattern::RPentomino,
    ];

    /// Lower-case name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Glider => "glider",
            Self::Block => "block",
            Self::Blinker => "blinker",
            Self::Beacon => "beacon",
            Self::RPentomino => "r-pentomino",
        }
    }

    /// `(dx, dy)` offsets from the anchor.
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Self::Glider => &[(0, -1), (1, 0), (1, 1), (0, 1), (-1, 1)],
            Self::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Self::Blinker => &[(-1, 0), (0, 0), (1, 0)],
            Self::Beacon => &[
                (-1, -1),
                (0, -1),
                (-1, 0),
                (0, 0),
                (1, 1),
                (2, 1),
                (1, 2),
                (2, 2),
            ],
            Self::RPentomino => &[(0, -1), (1, -1), (-1, 0), (0, 0), (0, 1)],
        }
    }

    /// Alive cells of the pattern anchored at the grid midpoint.
    pub fn cells(&self, size: i32) -> Vec<Cell> {
        let mid = size / 2;
        self.cells_at(Position::new(mid, mid), size)
    }

    /// Alive cells of the pattern anchored at `anchor`, wrapped onto a
    /// torus of `size`.
    ///
    /// `size` must be positive.
    pub fn cells_at(&self, anchor: Position, size: i32) -> Vec<Cell> {
        self.offsets()
            .iter()
            .map(|&(dx, dy)| {
                let p = torus::wrap(Position::new(anchor.x + dx, anchor.y + dy), size);
                Cell::alive(p.x, p.y)
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or(PatternError::UnknownPattern {
                name: s.to_string(),
            })
    }
}

/// Fill a `size * size` torus at random.
///
/// Each position is independently alive with probability `density`.
/// The same `seed` always produces the same cells, in row-major order.
pub fn random_soup(size: i32, density: f64, seed: u64) -> Result<Vec<Cell>, PatternError> {
    if size <= 0 {
        return Err(PatternError::InvalidSize { size });
    }
    if !density.is_finite() || !(0.0..=1.0).contains(&density) {
        return Err(PatternError::InvalidDensity { density });
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = Vec::new();
    for y in 0..size {
        for x in 0..size {
            if rng.random_bool(density) {
                cells.push(Cell::alive(x, y));
            }
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::grid::Grid;

    #[test]
    fn glider_is_centred_on_midpoint() {
        let cells = Pattern::Glider.cells(25);
        let expected = vec![
            Cell::alive(12, 11),
            Cell::alive(13, 12),
            Cell::alive(13, 13),
            Cell::alive(12, 13),
            Cell::alive(11, 13),
        ];
        assert_eq!(cells, expected);
    }

    #[test]
    fn patterns_wrap_on_small_grids() {
        let cells = Pattern::Glider.cells_at(Position::new(0, 0), 5);
        assert!(cells.iter().all(|c| c.position.in_bounds(5)));
        assert_eq!(cells[0].position, Position::new(0, 4));
    }

    #[test]
    fn every_pattern_seeds_a_compliant_grid() {
        for pattern in Pattern::ALL {
            let g = Grid::new(12, pattern.cells(12)).unwrap();
            assert_eq!(g.alive_count(), pattern.offsets().len(), "{pattern}");
            compliance::run_full_compliance(&g);
        }
    }

    #[test]
    fn names_round_trip() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>().unwrap(), pattern);
        }
        assert_eq!(" Glider ".parse::<Pattern>().unwrap(), Pattern::Glider);
        assert!(matches!(
            "spaceship".parse::<Pattern>(),
            Err(PatternError::UnknownPattern { .. })
        ));
    }

    #[test]
    fn soup_is_deterministic_per_seed() {
        let a = random_soup(16, 0.35, 7).unwrap();
        let b = random_soup(16, 0.35, 7).unwrap();
        let c = random_soup(16, 0.35, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|cell| cell.position.in_bounds(16)));
    }

    #[test]
    fn soup_density_extremes() {
        assert!(random_soup(8, 0.0, 1).unwrap().is_empty());
        assert_eq!(random_soup(8, 1.0, 1).unwrap().len(), 64);
    }

    #[test]
    fn soup_rejects_bad_arguments() {
        assert_eq!(
            random_soup(8, 1.5, 1).unwrap_err(),
            PatternError::InvalidDensity { density: 1.5 }
        );
        assert!(matches!(
            random_soup(8, f64::NAN, 1),
            Err(PatternError::InvalidDensity { .. })
        ));
        assert_eq!(
            random_soup(0, 0.5, 1).unwrap_err(),
            PatternError::InvalidSize { size: 0 }
        );
    }
}
