//! Uniprocessor CPU scheduling simulator.
//!
//! Simulates classical scheduling disciplines over a finite process set
//! and produces a timeline plus derived performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ScheduleItem`, `Schedule`
//! - **`algorithms`**: FCFS, SJF, Priority, Round Robin, SRTF behind the
//!   `SchedulingAlgorithm` trait
//! - **`scheduler`**: Dispatch by identifier, `SimulationConfig`,
//!   `SchedulingMetrics`, `SchedulingResult`
//! - **`validation`**: Input integrity checks (duplicate IDs, bad bursts)
//! - **`export`**: CSV, report and JSON renderings of a result
//! - **`playback`**: Point-in-time snapshots of a computed schedule
//! - **`workload`**: Sample and random process sets
//!
//! # Time Model
//!
//! Time is a discrete integer unit. Algorithms advance the clock from
//! event to event (arrival, completion, quantum expiry) rather than tick
//! by tick. Runs are synchronous and share no state.
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::scheduler::run_simulation;
//! use u_cpu_schedule::workload::sample_processes;
//!
//! let result = run_simulation("sjf", &sample_processes(), None).unwrap();
//! assert_eq!(result.schedule.len(), 3);
//! assert!((result.metrics.cpu_utilization - 1.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod algorithms;
pub mod error;
pub mod export;
pub mod models;
pub mod playback;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SimulationError, SimulationResult};
