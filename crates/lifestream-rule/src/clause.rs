//! Data-described rule clauses: a condition on the current state and
//! neighbour count, paired with the resulting state.

use std::fmt;

use lifestream_core::CellState;

/// A set of live-neighbour counts, stored as a bitmask over `0..=8`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NeighbourMask(u16);

impl NeighbourMask {
    const FULL: u16 = 0x1FF;

    /// Matches no count.
    pub const NONE: Self = Self(0);
    /// Matches every count from 0 to 8.
    pub const ALL: Self = Self(Self::FULL);

    /// Matches only `count`. Counts above 8 match nothing.
    pub const fn exactly(count: u8) -> Self {
        if count > 8 {
            Self::NONE
        } else {
            Self(1 << count)
        }
    }

    /// Matches every count in `lo..=hi`.
    pub const fn between(lo: u8, hi: u8) -> Self {
        if lo > hi || lo > 8 {
            return Self::NONE;
        }
        let hi = if hi > 8 { 8 } else { hi };
        let upto_hi = (1u16 << (hi + 1)) - 1;
        let below_lo = (1u16 << lo) - 1;
        Self(upto_hi & !below_lo)
    }

    /// Matches every count strictly below `count`.
    pub const fn below(count: u8) -> Self {
        if count == 0 {
            Self::NONE
        } else {
            Self::between(0, count - 1)
        }
    }

    /// Matches every count strictly above `count`.
    pub const fn above(count: u8) -> Self {
        if count >= 8 {
            Self::NONE
        } else {
            Self::between(count + 1, 8)
        }
    }

    /// Build a mask from individual counts; counts above 8 are ignored.
    pub fn from_counts<I: IntoIterator<Item = u8>>(counts: I) -> Self {
        counts
            .into_iter()
            .fold(Self::NONE, |mask, c| mask.union(Self::exactly(c)))
    }

    /// Counts in either mask.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Counts not in this mask.
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::FULL)
    }

    /// Returns `true` if `count` is in the mask.
    pub const fn contains(self, count: u8) -> bool {
        count <= 8 && self.0 & (1 << count) != 0
    }

    /// Returns `true` if the mask matches no count.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Counts in ascending order.
    pub fn counts(self) -> impl Iterator<Item = u8> {
        (0..=8u8).filter(move |&c| self.contains(c))
    }
}

impl fmt::Debug for NeighbourMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.counts()).finish()
    }
}

impl fmt::Display for NeighbourMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.counts() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// One short-circuiting rule clause.
///
/// Fires when the cell is in state `when` and its live-neighbour count
/// is in `neighbours`; the cell then becomes `becomes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    /// State the cell must currently be in.
    pub when: CellState,
    /// Live-neighbour counts that trigger the clause.
    pub neighbours: NeighbourMask,
    /// Resulting state when the clause fires.
    pub becomes: CellState,
}

impl Clause {
    /// Build a clause.
    pub const fn new(when: CellState, neighbours: NeighbourMask, becomes: CellState) -> Self {
        Self {
            when,
            neighbours,
            becomes,
        }
    }

    /// `Some(next)` if the clause fires for this state and count.
    pub fn matches(&self, state: CellState, alive_neighbours: u8) -> Option<CellState> {
        (state == self.when && self.neighbours.contains(alive_neighbours)).then_some(self.becomes)
    }
}
