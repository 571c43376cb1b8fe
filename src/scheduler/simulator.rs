//! Algorithm dispatch and result assembly.
//!
//! # Flow
//!
//! 1. Validate the process set.
//! 2. Build the scheduler for the chosen algorithm from the config.
//! 3. Produce the schedule.
//! 4. Compute metrics from the schedule.
//!
//! Each run owns all of its working state, so independent runs may
//! proceed concurrently on shared inputs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Algorithm, SchedulingMetrics, SimulationConfig};
use crate::algorithms::{Fcfs, PriorityScheduling, RoundRobin, SchedulingAlgorithm, Sjf, Srtf};
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Process, Schedule};
use crate::validation::validate_processes;

/// Output of one simulation run.
///
/// Read-only for consumers: exporters and playback index into it and
/// never re-derive the metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Algorithm that produced the schedule.
    pub algorithm: Algorithm,
    /// CPU timeline.
    pub schedule: Schedule,
    /// Metrics derived from `schedule`.
    pub metrics: SchedulingMetrics,
}

/// Runs scheduling algorithms under a fixed configuration.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::{Algorithm, SimulationConfig, Simulator};
///
/// let processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 8),
/// ];
/// let simulator = Simulator::new(SimulationConfig::new().with_quantum(2));
/// let result = simulator.run(Algorithm::Srtf, &processes).unwrap();
/// assert_eq!(result.schedule.len(), 4);
/// assert_eq!(result.metrics.makespan, 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Builds the scheduler for an algorithm.
    ///
    /// # Errors
    /// `InvalidQuantum` for Round Robin with a quantum below 1.
    pub fn scheduler_for(
        &self,
        algorithm: Algorithm,
    ) -> SimulationResult<Box<dyn SchedulingAlgorithm>> {
        let tie_break = self.config.tie_break;
        let scheduler: Box<dyn SchedulingAlgorithm> = match algorithm {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf::new().with_tie_break(tie_break)),
            Algorithm::Priority => Box::new(PriorityScheduling::new().with_tie_break(tie_break)),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(self.config.quantum)?),
            Algorithm::Srtf => Box::new(Srtf::new().with_tie_break(tie_break)),
        };
        Ok(scheduler)
    }

    /// Runs one algorithm over the processes.
    ///
    /// # Errors
    /// - `InvalidInput` if the processes fail validation.
    /// - `InvalidQuantum` for Round Robin with a quantum below 1.
    pub fn run(
        &self,
        algorithm: Algorithm,
        processes: &[Process],
    ) -> SimulationResult<SchedulingResult> {
        validate_processes(processes).map_err(SimulationError::InvalidInput)?;
        let scheduler = self.scheduler_for(algorithm)?;

        debug!(
            algorithm = algorithm.id(),
            processes = processes.len(),
            quantum = self.config.quantum,
            "simulation started"
        );

        let schedule = scheduler.schedule(processes);
        let metrics = SchedulingMetrics::calculate(&schedule, processes)?;

        debug!(
            algorithm = algorithm.id(),
            items = schedule.len(),
            makespan = metrics.makespan,
            avg_waiting = metrics.average_waiting_time,
            "simulation finished"
        );

        Ok(SchedulingResult {
            algorithm,
            schedule,
            metrics,
        })
    }

    /// Runs every algorithm over the same processes.
    ///
    /// Results are in [`Algorithm::ALL`] order.
    pub fn compare(&self, processes: &[Process]) -> SimulationResult<Vec<SchedulingResult>> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| self.run(algorithm, processes))
            .collect()
    }
}

/// Runs a simulation by algorithm identifier.
///
/// Unknown identifiers run FCFS. `quantum` defaults to 2 and only
/// matters for Round Robin.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::run_simulation;
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let result = run_simulation("round-robin", &processes, Some(2)).unwrap();
/// assert_eq!(result.metrics.makespan, 8);
/// ```
pub fn run_simulation(
    algorithm_id: &str,
    processes: &[Process],
    quantum: Option<i64>,
) -> SimulationResult<SchedulingResult> {
    let algorithm = Algorithm::from_id_or_default(algorithm_id);
    let mut config = SimulationConfig::default();
    if let Some(quantum) = quantum {
        config = config.with_quantum(quantum);
    }
    Simulator::new(config).run(algorithm, processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::TieBreak;
    use crate::models::ScheduleItem;
    use crate::validation::ValidationErrorKind;
    use pretty_assertions::assert_eq;

    fn three_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5).with_priority(1),
            Process::new(2, 1, 3).with_priority(2),
            Process::new(3, 2, 8).with_priority(3),
        ]
    }

    #[test]
    fn test_run_fcfs() {
        let result = run_simulation("fcfs", &three_processes(), None).unwrap();
        assert_eq!(result.algorithm, Algorithm::Fcfs);
        assert_eq!(
            result.schedule.items,
            vec![
                ScheduleItem::new(1, 0, 5),
                ScheduleItem::new(2, 5, 8),
                ScheduleItem::new(3, 8, 16),
            ]
        );
        assert!((result.metrics.average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_id_runs_fcfs() {
        let processes = three_processes();
        let fallback = run_simulation("lottery", &processes, None).unwrap();
        let fcfs = run_simulation("fcfs", &processes, None).unwrap();
        assert_eq!(fallback, fcfs);
    }

    #[test]
    fn test_round_robin_metrics() {
        let result = run_simulation("round-robin", &three_processes(), Some(2)).unwrap();
        assert_eq!(result.schedule.len(), 9);
        assert_eq!(result.metrics.turnaround_times[&1], 12);
        assert_eq!(result.metrics.turnaround_times[&2], 8);
        assert_eq!(result.metrics.turnaround_times[&3], 14);
        assert!((result.metrics.average_waiting_time - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_default_quantum_is_two() {
        let processes = three_processes();
        let implicit = run_simulation("round-robin", &processes, None).unwrap();
        let explicit = run_simulation("round-robin", &processes, Some(2)).unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_invalid_quantum_only_for_round_robin() {
        let processes = three_processes();
        assert!(matches!(
            run_simulation("round-robin", &processes, Some(0)),
            Err(SimulationError::InvalidQuantum(0))
        ));
        assert!(run_simulation("srtf", &processes, Some(0)).is_ok());
    }

    #[test]
    fn test_empty_process_list_rejected() {
        let err = run_simulation("fcfs", &[], None).unwrap_err();
        match err {
            SimulationError::InvalidInput(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessList);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let processes = three_processes();
        let before = processes.clone();
        for algorithm in Algorithm::ALL {
            let _ = Simulator::default().run(algorithm, &processes).unwrap();
        }
        assert_eq!(processes, before);
    }

    #[test]
    fn test_compare_runs_all() {
        let results = Simulator::default().compare(&three_processes()).unwrap();
        let algorithms: Vec<_> = results.iter().map(|r| r.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());
        // SRTF minimizes average waiting on this input.
        let best = results
            .iter()
            .min_by(|a, b| {
                a.metrics
                    .average_waiting_time
                    .total_cmp(&b.metrics.average_waiting_time)
            })
            .map(|r| r.algorithm);
        assert_eq!(best, Some(Algorithm::Srtf));
    }

    #[test]
    fn test_tie_break_config_reaches_algorithms() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 4)];
        let simulator = Simulator::new(SimulationConfig::new().with_tie_break(TieBreak::LastFound));
        let result = simulator.run(Algorithm::Sjf, &processes).unwrap();
        assert_eq!(result.schedule.items[0].process_id, 2);
    }

    #[test]
    fn test_result_json_shape() {
        let result = run_simulation("sjf", &three_processes(), None).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["algorithm"], "sjf");
        assert_eq!(json["schedule"][1]["processId"], 2);
        assert_eq!(json["metrics"]["makespan"], 16);

        let back: SchedulingResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.algorithm, result.algorithm);
        assert_eq!(back.schedule, result.schedule);
        assert_eq!(back.metrics.waiting_times, result.metrics.waiting_times);
    }
}
