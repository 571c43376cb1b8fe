//! Point-in-time view of a computed schedule.
//!
//! Playback steps a time cursor over an existing schedule. It never
//! re-runs an algorithm: everything here is derived by indexing into the
//! schedule that was already produced.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Process, ProcessId, Schedule};
use crate::scheduler::Algorithm;

/// State of the CPU and ready queue at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Cursor time.
    pub time: i64,
    /// Process holding the CPU, if any.
    pub running: Option<ProcessId>,
    /// Time the running process has spent in its current item.
    pub slice_elapsed: Option<i64>,
    /// Burst left per process (burst minus CPU received before `time`).
    pub remaining_times: BTreeMap<ProcessId, i64>,
    /// Arrived, unfinished, not running; in the order the algorithm
    /// would consider them.
    pub ready_queue: Vec<ProcessId>,
    /// Processes with no burst left.
    pub completed: Vec<ProcessId>,
}

impl Snapshot {
    /// Builds the snapshot at `time`.
    pub fn at(schedule: &Schedule, processes: &[Process], algorithm: Algorithm, time: i64) -> Self {
        let current = schedule.item_at(time);
        let running = current.map(|i| i.process_id);

        let mut remaining_times = BTreeMap::new();
        for p in processes {
            let used: i64 = schedule
                .items_for(p.id)
                .iter()
                .filter(|i| i.start_time < time)
                .map(|i| i.end_time.min(time) - i.start_time)
                .sum();
            remaining_times.insert(p.id, (p.burst_time - used).max(0));
        }

        let completed = processes
            .iter()
            .filter(|p| remaining_times[&p.id] == 0)
            .map(|p| p.id)
            .collect();

        let mut ready: Vec<&Process> = processes
            .iter()
            .filter(|p| p.has_arrived(time))
            .filter(|p| Some(p.id) != running && remaining_times[&p.id] > 0)
            .collect();
        ready.sort_by_key(|p| p.arrival_time);
        match algorithm {
            Algorithm::Sjf => ready.sort_by_key(|p| p.burst_time),
            Algorithm::Priority => ready.sort_by_key(|p| p.priority),
            Algorithm::Srtf => ready.sort_by_key(|p| remaining_times[&p.id]),
            Algorithm::Fcfs | Algorithm::RoundRobin => {}
        }

        Self {
            time,
            running,
            slice_elapsed: current.map(|i| time - i.start_time),
            remaining_times,
            ready_queue: ready.into_iter().map(|p| p.id).collect(),
            completed,
        }
    }

    /// Whether every process has finished.
    pub fn is_finished(&self) -> bool {
        self.remaining_times.values().all(|&r| r == 0)
    }

    /// Whether the CPU is idle.
    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }
}

/// Snapshots at every integer time from 0 through the makespan.
pub fn timeline(schedule: &Schedule, processes: &[Process], algorithm: Algorithm) -> Vec<Snapshot> {
    let end = schedule.makespan().unwrap_or(0);
    (0..=end)
        .map(|t| Snapshot::at(schedule, processes, algorithm, t))
        .collect()
}
