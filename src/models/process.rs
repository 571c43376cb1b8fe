//! Process model.
//!
//! A process is the schedulable unit of a simulation run: it becomes
//! ready at its arrival time and needs `burst_time` units of CPU to finish.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Caller-assigned process identifier.
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// Processes are read-only inputs: algorithms derive their own working
/// state (remaining time, queues) and never modify the records they are given.
///
/// # Time Representation
/// All times are integer time units relative to the simulation start (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Display label. Not used by any algorithm.
    #[serde(default)]
    pub name: String,
    /// Time at which the process becomes schedulable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent).
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process named `P<id>` with priority 0.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            name: format!("P{id}"),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}
