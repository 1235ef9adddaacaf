//! Reusable rule fixtures.
//!
//! - [`CountingRule`]: wraps another rule and counts evaluations.
//! - [`FrozenRule`]: quiescent rule under which nothing ever changes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lifestream_core::CellState;
use lifestream_rule::{Rule, RuleSet};

/// Delegates to an inner rule and counts every `next_state()` call.
///
/// The counter is shared, so a test keeps a [`CountingRule::counter()`]
/// handle after moving the rule into a simulation.
pub struct CountingRule {
    inner: Box<dyn Rule>,
    evaluations: Arc<AtomicUsize>,
}

impl CountingRule {
    pub fn new(inner: Box<dyn Rule>) -> Self {
        Self {
            inner,
            evaluations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Counting wrapper around Conway's rule.
    pub fn conway() -> Self {
        Self::new(Box::new(RuleSet::conway()))
    }

    /// Shared handle to the evaluation counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.evaluations)
    }

    /// Evaluations so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::Relaxed)
    }
}

impl Rule for CountingRule {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn next_state(&self, state: CellState, alive_neighbours: u8) -> CellState {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        self.inner.next_state(state, alive_neighbours)
    }

    // Config validation asks this once; it is not an evaluation.
    fn is_quiescent(&self) -> bool {
        self.inner.is_quiescent()
    }
}

/// Every cell keeps its state. Any grid is a fixed point.
pub struct FrozenRule;

impl Rule for FrozenRule {
    fn name(&self) -> &str {
        "frozen"
    }

    fn next_state(&self, state: CellState, _alive_neighbours: u8) -> CellState {
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiescence_check_is_not_counted() {
        let rule = CountingRule::conway();
        assert!(rule.is_quiescent());
        assert_eq!(rule.evaluations(), 0);
    }

    #[test]
    fn counts_each_next_state_call() {
        let rule = CountingRule::conway();
        let counter = rule.counter();
        assert_eq!(rule.next_state(CellState::Dead, 3), CellState::Alive);
        assert_eq!(rule.next_state(CellState::Alive, 1), CellState::Dead);
        assert_eq!(rule.evaluations(), 2);
        assert_eq!(counter.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn frozen_rule_is_quiescent() {
        assert!(FrozenRule.is_quiescent());
        assert_eq!(FrozenRule.next_state(CellState::Dead, 3), CellState::Dead);
    }
}
