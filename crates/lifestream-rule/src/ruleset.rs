//! [`RuleSet`]: an ordered clause list evaluated first-match-wins.
//!
//! Conway's rule is four independent clauses (underpopulation,
//! survival, overpopulation, birth). Any other outer-totalistic rule in
//! birth/survival notation compiles to clauses the same way, so
//! alternative automata never touch the driver or the grid.

use std::fmt;
use std::str::FromStr;

use lifestream_core::CellState;

use crate::clause::{Clause, NeighbourMask};
use crate::error::RuleError;
use crate::rule::Rule;

/// Ordered clauses interpreted by a fixed evaluator.
///
/// The first clause that fires decides the next state; if none fires the
/// cell keeps its current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    name: String,
    clauses: Vec<Clause>,
}

impl RuleSet {
    /// Build a rule set from clauses, in evaluation order.
    pub fn new(name: impl Into<String>, clauses: Vec<Clause>) -> Self {
        Self {
            name: name.into(),
            clauses,
        }
    }

    /// Conway's Game of Life as four short-circuiting clauses.
    pub fn conway() -> Self {
        use CellState::{Alive, Dead};
        Self::new(
            "B3/S23",
            vec![
                // Underpopulation.
                Clause::new(Alive, NeighbourMask::below(2), Dead),
                // Survival.
                Clause::new(Alive, NeighbourMask::between(2, 3), Alive),
                // Overpopulation.
                Clause::new(Alive, NeighbourMask::above(3), Dead),
                // Birth.
                Clause::new(Dead, NeighbourMask::exactly(3), Alive),
            ],
        )
    }

    /// HighLife, `B36/S23`.
    pub fn high_life() -> Self {
        Self::birth_survival(
            NeighbourMask::from_counts([3, 6]),
            NeighbourMask::from_counts([2, 3]),
        )
    }

    /// Seeds, `B2/S`: every live cell dies each step.
    pub fn seeds() -> Self {
        Self::birth_survival(NeighbourMask::exactly(2), NeighbourMask::NONE)
    }

    /// Day & Night, `B3678/S34678`.
    pub fn day_and_night() -> Self {
        Self::birth_survival(
            NeighbourMask::from_counts([3, 6, 7, 8]),
            NeighbourMask::from_counts([3, 4, 6, 7, 8]),
        )
    }

    /// Compile a birth/survival rule into clauses.
    ///
    /// The rule is named by its canonical notation, e.g. `B36/S23`.
    pub fn birth_survival(birth: NeighbourMask, survive: NeighbourMask) -> Self {
        use CellState::{Alive, Dead};
        Self::new(
            format!("B{birth}/S{survive}"),
            vec![
                Clause::new(Alive, survive, Alive),
                Clause::new(Alive, survive.complement(), Dead),
                Clause::new(Dead, birth, Alive),
            ],
        )
    }

    /// The clauses, in evaluation order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Evaluate the clauses against a state and count.
    pub fn apply(&self, state: CellState, alive_neighbours: u8) -> CellState {
        self.clauses
            .iter()
            .find_map(|clause| clause.matches(state, alive_neighbours))
            .unwrap_or(state)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rule for RuleSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_state(&self, state: CellState, alive_neighbours: u8) -> CellState {
        self.apply(state, alive_neighbours)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn parse_counts(section: char, digits: &str) -> Result<NeighbourMask, RuleError> {
    let mut mask = NeighbourMask::NONE;
    for token in digits.chars() {
        let count = token
            .to_digit(10)
            .filter(|&d| d <= 8)
            .ok_or(RuleError::InvalidCount { token })? as u8;
        if mask.contains(count) {
            return Err(RuleError::DuplicateCount { section, count });
        }
        mask = mask.union(NeighbourMask::exactly(count));
    }
    Ok(mask)
}

impl FromStr for RuleSet {
    type Err = RuleError;

    /// Parse `B<counts>/S<counts>` notation, in either section order and
    /// either letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim();
        let malformed = || RuleError::Malformed {
            notation: notation.to_string(),
        };
        let (first, second) = notation.split_once('/').ok_or_else(malformed)?;

        let mut birth = None;
        let mut survive = None;
        for part in [first, second] {
            let mut chars = part.chars();
            let section = chars
                .next()
                .map(|c| c.to_ascii_uppercase())
                .ok_or_else(malformed)?;
            let slot = match section {
                'B' => &mut birth,
                'S' => &mut survive,
                _ => return Err(malformed()),
            };
            if slot.is_some() {
                return Err(malformed());
            }
            *slot = Some(parse_counts(section, chars.as_str())?);
        }

        match (birth, survive) {
            (Some(birth), Some(survive)) => Ok(Self::birth_survival(birth, survive)),
            _ => Err(malformed()),
        }
    }
}
