//! Shortest Remaining Time First.
//!
//! Preemptive SJF. Selection is re-evaluated only at events (a completion
//! or an arrival), never per time unit, so the cost depends on the number
//! of processes rather than on the length of the timeline.
//!
//! # State Machine
//!
//! ```text
//! Idle ──dispatch──▶ Running(p, since)
//! Running(p) ──shorter arrival──▶ emit [since, now) for p, Running(q, now)
//! Running(p) ──p completes──▶ emit [since, now) for p, Idle
//! ```

use tracing::trace;

use super::selection::TieBreak;
use super::SchedulingAlgorithm;
use crate::models::{Process, Schedule, ScheduleItem};

/// Shortest Remaining Time First.
///
/// Items are emitted at preemption and completion boundaries only.
/// Equal remaining times are resolved by [`TieBreak`] over the processes
/// in arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf {
    tie_break: TieBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CpuState {
    Idle,
    /// Index into the arrival-ordered working set, and the start of the
    /// current uninterrupted run.
    Running { index: usize, since: i64 },
}

impl Srtf {
    /// Creates an SRTF scheduler with first-found tie-breaking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl SchedulingAlgorithm for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new();

        let mut order: Vec<&Process> = processes.iter().collect();
        order.sort_by_key(|p| p.arrival_time);
        let mut remaining: Vec<i64> = order.iter().map(|p| p.burst_time).collect();

        let mut time = order.first().map_or(0, |p| p.arrival_time.max(0));
        let mut state = CpuState::Idle;

        while remaining.iter().any(|&r| r > 0) {
            let available = (0..order.len())
                .filter(|&k| order[k].has_arrived(time) && remaining[k] > 0);
            let Some(k) = self.tie_break.select_min(available, |&k| remaining[k]) else {
                let next = (0..order.len())
                    .find(|&k| remaining[k] > 0)
                    .map(|k| order[k].arrival_time);
                if let Some(next) = next {
                    trace!(from = time, to = next, "cpu idle until next arrival");
                    time = next;
                }
                continue;
            };

            let since = match state {
                CpuState::Running { index, since } if index == k => since,
                CpuState::Running { index, since } => {
                    trace!(
                        preempted = order[index].id,
                        by = order[k].id,
                        time,
                        "preemption"
                    );
                    schedule.push(ScheduleItem::new(order[index].id, since, time));
                    time
                }
                CpuState::Idle => time,
            };
            state = CpuState::Running { index: k, since };

            let completion = time + remaining[k];
            let next_arrival = (0..order.len())
                .find(|&j| order[j].arrival_time > time && remaining[j] > 0)
                .map(|j| order[j].arrival_time);
            let next_event = next_arrival.map_or(completion, |a| a.min(completion));

            remaining[k] -= next_event - time;
            if remaining[k] == 0 {
                schedule.push(ScheduleItem::new(order[k].id, since, next_event));
                state = CpuState::Idle;
            }

            time = next_event;
        }

        schedule
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}
