//! Schedule performance metrics.
//!
//! Computes per-process and aggregate statistics from a completed
//! schedule and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | CPU Utilization | sum(burst) / makespan |
//! | Throughput | process count / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulationResult};
use crate::models::{Process, ProcessId, Schedule};

/// Schedule performance indicators.
///
/// A pure function of `(schedule, processes)`: calculating twice from the
/// same inputs yields identical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingMetrics {
    /// Waiting time per process.
    pub waiting_times: BTreeMap<ProcessId, i64>,
    /// Turnaround time per process.
    pub turnaround_times: BTreeMap<ProcessId, i64>,
    /// Response time per process.
    pub response_times: BTreeMap<ProcessId, i64>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
    /// Busy fraction of `[0, makespan)`.
    pub cpu_utilization: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// Latest end time in the schedule.
    pub makespan: i64,
}

impl SchedulingMetrics {
    /// Computes metrics from a schedule and its input processes.
    ///
    /// Processes without any item in the schedule get zero waiting,
    /// turnaround and response time.
    ///
    /// # Errors
    /// - `EmptyProcessList` if `processes` is empty.
    /// - `EmptySchedule` if the schedule has no item ending after t=0.
    pub fn calculate(schedule: &Schedule, processes: &[Process]) -> SimulationResult<Self> {
        if processes.is_empty() {
            return Err(SimulationError::EmptyProcessList);
        }
        let makespan = match schedule.makespan() {
            Some(end) if end > 0 => end,
            _ => return Err(SimulationError::EmptySchedule),
        };

        // completion and first start per process
        let mut spans: BTreeMap<ProcessId, (i64, i64)> = BTreeMap::new();
        for item in schedule {
            spans
                .entry(item.process_id)
                .and_modify(|(first, last)| {
                    *first = (*first).min(item.start_time);
                    *last = (*last).max(item.end_time);
                })
                .or_insert((item.start_time, item.end_time));
        }

        let mut waiting_times = BTreeMap::new();
        let mut turnaround_times = BTreeMap::new();
        let mut response_times = BTreeMap::new();

        for process in processes {
            let (waiting, turnaround, response) = match spans.get(&process.id) {
                Some(&(first_start, completion)) => {
                    let turnaround = completion - process.arrival_time;
                    (
                        turnaround - process.burst_time,
                        turnaround,
                        first_start - process.arrival_time,
                    )
                }
                None => (0, 0, 0),
            };
            waiting_times.insert(process.id, waiting);
            turnaround_times.insert(process.id, turnaround);
            response_times.insert(process.id, response);
        }

        let count = processes.len() as f64;
        let average =
            |values: &BTreeMap<ProcessId, i64>| values.values().sum::<i64>() as f64 / count;
        let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();

        Ok(Self {
            average_waiting_time: average(&waiting_times),
            average_turnaround_time: average(&turnaround_times),
            average_response_time: average(&response_times),
            cpu_utilization: total_burst as f64 / makespan as f64,
            throughput: count / makespan as f64,
            makespan,
            waiting_times,
            turnaround_times,
            response_times,
        })
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_average_waiting: f64, min_utilization: f64) -> bool {
        self.average_waiting_time <= max_average_waiting && self.cpu_utilization >= min_utilization
    }
}
