//! First Come First Served.
//!
//! Non-preemptive. Processes run in arrival order; simultaneous arrivals
//! keep their input order (stable sort).

use super::SchedulingAlgorithm;
use crate::models::{Process, Schedule, ScheduleItem};

/// First Come First Served.
///
/// Emits exactly one item per process. If the next process has not yet
/// arrived the CPU idles until it does.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut order: Vec<&Process> = processes.iter().collect();
        order.sort_by_key(|p| p.arrival_time);

        let mut schedule = Schedule::new();
        let mut time: i64 = 0;
        for process in order {
            time = time.max(process.arrival_time);
            if process.burst_time > 0 {
                schedule.push(ScheduleItem::new(
                    process.id,
                    time,
                    time + process.burst_time,
                ));
                time += process.burst_time;
            }
        }
        schedule
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{assert_well_formed, three_processes, triples};

    #[test]
    fn test_fcfs_basic() {
        let processes = three_processes();
        let schedule = Fcfs.schedule(&processes);
        assert_eq!(triples(&schedule), vec![(1, 0, 5), (2, 5, 8), (3, 8, 16)]);
        assert_well_formed(&schedule, &processes);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![
            Process::new(1, 4, 2),
            Process::new(2, 0, 3),
            Process::new(3, 1, 1),
        ];
        let schedule = Fcfs.schedule(&processes);
        assert_eq!(triples(&schedule), vec![(2, 0, 3), (3, 3, 4), (1, 4, 6)]);
    }

    #[test]
    fn test_fcfs_stable_on_equal_arrival() {
        let processes = vec![
            Process::new(9, 0, 2),
            Process::new(3, 0, 1),
            Process::new(5, 0, 4),
        ];
        let schedule = Fcfs.schedule(&processes);
        assert_eq!(triples(&schedule), vec![(9, 0, 2), (3, 2, 3), (5, 3, 7)]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new(1, 2, 3), Process::new(2, 10, 1)];
        let schedule = Fcfs.schedule(&processes);
        assert_eq!(triples(&schedule), vec![(1, 2, 5), (2, 10, 11)]);
        assert_eq!(schedule.idle_time(), 7);
    }

    #[test]
    fn test_fcfs_does_not_touch_input() {
        let processes = vec![Process::new(2, 5, 1), Process::new(1, 0, 1)];
        let before = processes.clone();
        let _ = Fcfs.schedule(&processes);
        assert_eq!(processes, before);
    }

    #[test]
    fn test_fcfs_empty() {
        assert!(Fcfs.schedule(&[]).is_empty());
    }
}
