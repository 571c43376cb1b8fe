//! Simulation dispatch and metrics.
//!
//! Selects an algorithm by identifier, runs it, and derives performance
//! metrics from the produced schedule.
//!
//! # Dispatch
//!
//! `run_simulation` accepts the wire identifiers `fcfs`, `sjf`,
//! `priority`, `round-robin` and `srtf`. Anything else runs FCFS; use
//! `"...".parse::<Algorithm>()` first when strict validation is needed.
//!
//! # Metrics
//!
//! `SchedulingMetrics` computes waiting, turnaround and response times
//! per process, their averages, CPU utilization and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod config;
mod metrics;
mod simulator;

pub use algorithm::Algorithm;
pub use config::SimulationConfig;
pub use metrics::SchedulingMetrics;
pub use simulator::{run_simulation, SchedulingResult, Simulator};
