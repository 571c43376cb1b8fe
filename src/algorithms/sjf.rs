//! Shortest Job First (non-preemptive).
//!
//! At each decision point the arrived process with the smallest burst
//! runs to completion.
//!
//! # Reference
//! Smith (1956), SPT is optimal for mean flow time on a single machine.

use super::selection::{run_non_preemptive, TieBreak};
use super::SchedulingAlgorithm;
use crate::models::{Process, Schedule};

/// Shortest Job First.
///
/// Equal bursts are resolved by [`TieBreak`] over the remaining list in
/// input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf {
    tie_break: TieBreak,
}

impl Sjf {
    /// Creates an SJF scheduler with first-found tie-breaking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl SchedulingAlgorithm for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        run_non_preemptive(processes, self.tie_break, |p| p.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}
