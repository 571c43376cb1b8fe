//! Priority scheduling (non-preemptive).
//!
//! Same control structure as SJF, keyed on the priority value instead of
//! the burst. Lower value = more urgent.

use super::selection::{run_non_preemptive, TieBreak};
use super::SchedulingAlgorithm;
use crate::models::{Process, Schedule};

/// Non-preemptive priority scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduling {
    tie_break: TieBreak,
}

impl PriorityScheduling {
    /// Creates a priority scheduler with first-found tie-breaking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl SchedulingAlgorithm for PriorityScheduling {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        run_non_preemptive(processes, self.tie_break, |p| p.priority)
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling (non-preemptive)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{assert_well_formed, three_processes, triples};

    #[test]
    fn test_priority_in_order_priorities() {
        let processes = three_processes();
        let schedule = PriorityScheduling::new().schedule(&processes);
        assert_eq!(triples(&schedule), vec![(1, 0, 5), (2, 5, 8), (3, 8, 16)]);
        assert_well_formed(&schedule, &processes);
    }

    #[test]
    fn test_lower_value_runs_first() {
        let processes = vec![
            Process::new(1, 0, 4).with_priority(2),
            Process::new(2, 0, 3).with_priority(1),
            Process::new(3, 1, 2).with_priority(0),
        ];
        let schedule = PriorityScheduling::new().schedule(&processes);
        // t=0: P2 (1) over P1 (2); t=3: P3 (0) over P1.
        assert_eq!(triples(&schedule), vec![(2, 0, 3), (3, 3, 5), (1, 5, 9)]);
    }

    #[test]
    fn test_not_preemptive() {
        let processes = vec![
            Process::new(1, 0, 10).with_priority(5),
            Process::new(2, 1, 1).with_priority(0),
        ];
        let schedule = PriorityScheduling::new().schedule(&processes);
        assert_eq!(triples(&schedule), vec![(1, 0, 10), (2, 10, 11)]);
    }

    #[test]
    fn test_priority_ties() {
        let processes = vec![
            Process::new(1, 0, 2).with_priority(3),
            Process::new(2, 0, 2).with_priority(3),
            Process::new(3, 0, 2).with_priority(3),
        ];
        let first = PriorityScheduling::new().schedule(&processes);
        assert_eq!(triples(&first), vec![(1, 0, 2), (2, 2, 4), (3, 4, 6)]);

        let last = PriorityScheduling::new()
            .with_tie_break(TieBreak::LastFound)
            .schedule(&processes);
        assert_eq!(triples(&last), vec![(3, 0, 2), (2, 2, 4), (1, 4, 6)]);
    }
}
