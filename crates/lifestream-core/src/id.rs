//! Strongly-typed identifiers: grid [`Position`]s and the [`Generation`] counter.

use std::fmt;

/// A coordinate on the toroidal grid.
///
/// `x` is the column and `y` the row; both are in `[0, size)` for any
/// position stored in a grid. Equality and hashing are structural, so
/// positions are used directly as map keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Position {
    /// Create a position from a column and a row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates fall inside `[0, size)`.
    pub fn in_bounds(&self, size: i32) -> bool {
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Monotonically increasing step counter.
///
/// The seeded initial state is generation 0; every applied step
/// increments it by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The successor generation.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds_covers_half_open_range() {
        assert!(Position::new(0, 0).in_bounds(10));
        assert!(Position::new(9, 9).in_bounds(10));
        assert!(!Position::new(10, 0).in_bounds(10));
        assert!(!Position::new(0, -1).in_bounds(10));
    }

    #[test]
    fn positions_order_row_major_after_x() {
        // Derived Ord compares x first, then y.
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }

    #[test]
    fn generation_next_increments() {
        assert_eq!(Generation(0).next(), Generation(1));
        assert_eq!(Generation::from(41).next().to_string(), "42");
    }
}
