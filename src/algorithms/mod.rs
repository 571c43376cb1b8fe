//! CPU scheduling algorithms.
//!
//! Each algorithm turns a process set into a [`Schedule`]. Metrics are
//! computed separately from the produced schedule (see
//! [`crate::scheduler::SchedulingMetrics`]).
//!
//! | Algorithm | Preemptive | Selection key |
//! |-----------|-----------|---------------|
//! | [`Fcfs`] | no | arrival order |
//! | [`Sjf`] | no | burst time |
//! | [`PriorityScheduling`] | no | priority value |
//! | [`RoundRobin`] | yes (quantum) | FIFO ready queue |
//! | [`Srtf`] | yes (arrivals) | remaining time |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod selection;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::PriorityScheduling;
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use selection::TieBreak;
pub use sjf::Sjf;
pub use srtf::Srtf;

use crate::models::{Process, Schedule};
use std::fmt::Debug;

/// A scheduling discipline.
///
/// Implementations are pure: they read `processes`, keep any working
/// state (remaining time, ready queues) locally, and return a fresh
/// schedule ordered by start time.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Produces the schedule for the given processes.
    fn schedule(&self, processes: &[Process]) -> Schedule;

    /// Algorithm description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
