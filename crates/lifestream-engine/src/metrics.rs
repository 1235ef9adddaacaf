//! Per-step and per-run counters for the simulation driver.
//!
//! [`StepMetrics`] describes the most recent generation step;
//! [`RunMetrics`] accumulates over the simulation's lifetime.

/// Counters and timing for a single step.
///
/// Durations are in microseconds. The driver overwrites these after
/// every [`step()`](crate::Simulation::step), including the final step
/// that detects a fixed point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Positions evaluated (the frontier going into the step).
    pub frontier_len: usize,
    /// Cells whose state changed.
    pub changed_len: usize,
    /// Alive cells after the step.
    pub alive_len: usize,
    /// Wall-clock time for evaluation and apply, in microseconds.
    pub step_us: u64,
}

/// Cumulative counters since the simulation was created.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Steps that advanced the generation.
    pub steps: u64,
    /// Total rule evaluations, including the fixed-point check.
    pub cells_evaluated: u64,
    /// Total cell state changes applied.
    pub cells_changed: u64,
    /// Snapshots handed to the stream channel. One may still sit in the
    /// handoff slot when the run is cancelled and is never yielded.
    pub emissions: u64,
}

impl RunMetrics {
    pub(crate) fn record_step(&mut self, step: &StepMetrics) {
        self.cells_evaluated += step.frontier_len as u64;
        self.cells_changed += step.changed_len as u64;
        if step.changed_len > 0 {
            self.steps += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.frontier_len, 0);
        assert_eq!(m.changed_len, 0);
        assert_eq!(m.alive_len, 0);
        assert_eq!(m.step_us, 0);
        assert_eq!(RunMetrics::default().emissions, 0);
    }

    #[test]
    fn fixed_point_step_counts_evaluations_only() {
        let mut run = RunMetrics::default();
        run.record_step(&StepMetrics {
            frontier_len: 12,
            changed_len: 2,
            alive_len: 0,
            step_us: 5,
        });
        run.record_step(&StepMetrics {
            frontier_len: 12,
            changed_len: 0,
            alive_len: 0,
            step_us: 3,
        });
        assert_eq!(run.steps, 1);
        assert_eq!(run.cells_evaluated, 24);
        assert_eq!(run.cells_changed, 2);
    }
}
