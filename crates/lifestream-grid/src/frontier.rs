//! The per-step [`Frontier`]: positions whose next state must be recomputed.
//!
//! Only a cell adjacent to (or equal to) a cell that changed in the
//! previous step can see a different live-neighbour count, so every
//! other cell keeps its state for the next step. The frontier is built
//! from the changed set, consumed by rule evaluation, and then rebuilt
//! from the next changed set.

use indexmap::IndexSet;
use lifestream_core::Position;

use crate::torus;

/// Deduplicated, insertion-ordered set of positions to re-evaluate.
///
/// Each changed position is inserted before its eight neighbours, and a
/// position seen earlier keeps its first slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frontier {
    positions: IndexSet<Position>,
}

impl Frontier {
    /// An empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the frontier of `changed` on a torus of `size`.
    ///
    /// `changed` positions must already be in `[0, size)`.
    pub fn from_changed<I>(changed: I, size: i32) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let changed = changed.into_iter();
        let mut positions = IndexSet::with_capacity(changed.size_hint().0 * 9);
        for position in changed {
            positions.insert(position);
            for neighbour in torus::neighbour_positions(position, size) {
                positions.insert(neighbour);
            }
        }
        Self { positions }
    }

    /// Number of distinct positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if there is nothing left to evaluate.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if `position` is part of the frontier.
    pub fn contains(&self, position: &Position) -> bool {
        self.positions.contains(position)
    }

    /// Positions in first-occurrence order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Position> + '_ {
        self.positions.iter()
    }
}

impl<'a> IntoIterator for &'a Frontier {
    type Item = &'a Position;
    type IntoIter = indexmap::set::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn single_change_yields_nine_positions() {
        let f = Frontier::from_changed([p(5, 5)], 10);
        assert_eq!(f.len(), 9);
        assert_eq!(f.iter().next(), Some(&p(5, 5)));
        for dy in -1..=1 {
            for dx in -1..=1 {
                assert!(f.contains(&p(5 + dx, 5 + dy)));
            }
        }
    }

    #[test]
    fn adjacent_changes_share_neighbours() {
        // Two horizontally adjacent cells: 4x3 block of positions.
        let f = Frontier::from_changed([p(0, 0), p(1, 0)], 10);
        assert_eq!(f.len(), 12);
        let order: Vec<Position> = f.iter().copied().collect();
        assert_eq!(order[0], p(0, 0));
        assert_eq!(order[1], p(9, 9));
        // (1, 0) was first seen as a neighbour of (0, 0), so it keeps that slot.
        assert_eq!(order.iter().position(|q| *q == p(1, 0)), Some(5));
    }

    #[test]
    fn empty_changes_give_empty_frontier() {
        let f = Frontier::from_changed(std::iter::empty(), 10);
        assert!(f.is_empty());
        assert_eq!(f, Frontier::new());
    }

    #[test]
    fn tiny_torus_collapses_duplicates() {
        let f = Frontier::from_changed([p(0, 0)], 1);
        assert_eq!(f.len(), 1);
        let f = Frontier::from_changed([p(0, 0)], 2);
        assert_eq!(f.len(), 4);
    }

    proptest! {
        #[test]
        fn frontier_is_closed_over_changed_neighbourhoods(
            size in 3i32..20,
            raw in proptest::collection::vec((0i32..20, 0i32..20), 0..12),
        ) {
            let changed: Vec<Position> = raw
                .into_iter()
                .map(|(x, y)| p(x % size, y % size))
                .collect();
            let f = Frontier::from_changed(changed.iter().copied(), size);

            let mut seen = std::collections::HashSet::new();
            for q in &f {
                prop_assert!(q.in_bounds(size));
                prop_assert!(seen.insert(*q), "duplicate {:?}", q);
            }
            for c in &changed {
                prop_assert!(f.contains(c));
                for n in torus::neighbour_positions(*c, size) {
                    prop_assert!(f.contains(&n));
                }
            }
            prop_assert!(f.len() <= changed.len() * 9);
        }
    }
}
