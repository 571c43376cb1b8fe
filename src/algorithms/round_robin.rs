//! Round Robin.
//!
//! Preemptive with a fixed quantum. The ready queue is FIFO; a process
//! that still has work after its slice goes to the tail.
//!
//! # Admission
//!
//! Arrivals are admitted twice per slice: after the head is popped and
//! again after the slice runs. A process arriving exactly when a slice
//! ends is therefore queued ahead of the preempted process.

use std::collections::VecDeque;

use tracing::trace;

use super::SchedulingAlgorithm;
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Process, ProcessId, Schedule, ScheduleItem};

/// Default time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Round Robin with a fixed quantum.
///
/// Every slice becomes its own item, even when the same process runs
/// back-to-back because the queue was otherwise empty.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

/// Working copy of a process.
#[derive(Debug, Clone, Copy)]
struct Slot {
    id: ProcessId,
    arrival_time: i64,
    remaining: i64,
}

impl RoundRobin {
    /// Creates a Round Robin scheduler.
    ///
    /// # Errors
    /// `InvalidQuantum` if `quantum < 1`.
    pub fn new(quantum: i64) -> SimulationResult<Self> {
        if quantum < 1 {
            return Err(SimulationError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

fn admit(incoming: &mut VecDeque<Slot>, ready: &mut VecDeque<Slot>, time: i64) {
    while incoming.front().is_some_and(|s| s.arrival_time <= time) {
        if let Some(slot) = incoming.pop_front() {
            ready.push_back(slot);
        }
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new();

        let mut sorted: Vec<Slot> = processes
            .iter()
            .map(|p| Slot {
                id: p.id,
                arrival_time: p.arrival_time,
                remaining: p.burst_time,
            })
            .collect();
        sorted.sort_by_key(|s| s.arrival_time);
        let mut incoming: VecDeque<Slot> = sorted.into();

        let Some(first) = incoming.pop_front() else {
            return schedule;
        };
        let mut time = first.arrival_time.max(0);
        let mut ready = VecDeque::from([first]);
        let mut completed = 0;

        while completed < processes.len() {
            let Some(mut current) = ready.pop_front() else {
                match incoming.pop_front() {
                    Some(next) => {
                        trace!(from = time, to = next.arrival_time, "cpu idle until next arrival");
                        time = time.max(next.arrival_time);
                        ready.push_back(next);
                        continue;
                    }
                    None => break,
                }
            };

            admit(&mut incoming, &mut ready, time);

            let slice = self.quantum.min(current.remaining);
            if slice > 0 {
                schedule.push(ScheduleItem::new(current.id, time, time + slice));
                time += slice;
                current.remaining -= slice;
            }

            admit(&mut incoming, &mut ready, time);

            if current.remaining > 0 {
                trace!(process = current.id, remaining = current.remaining, time, "requeue");
                ready.push_back(current);
            } else {
                completed += 1;
            }
        }

        schedule
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
