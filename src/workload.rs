//! Sample and randomly generated process sets.
//!
//! # Generation
//!
//! `WorkloadGenerator` draws arrival, burst and priority uniformly from
//! inclusive ranges. Pass a seeded RNG for reproducible sets.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::Process;

/// Default burst for a newly added process.
const NEW_PROCESS_BURST: i64 = 5;
/// Default priority for a newly added process.
const NEW_PROCESS_PRIORITY: i32 = 1;

/// The three-process demo set: P1(0,5,pr1), P2(1,3,pr2), P3(2,8,pr3).
pub fn sample_processes() -> Vec<Process> {
    vec![
        Process::new(1, 0, 5).with_priority(1),
        Process::new(2, 1, 3).with_priority(2),
        Process::new(3, 2, 8).with_priority(3),
    ]
}

/// A fresh process to append to `existing`.
///
/// Gets id = max existing id + 1 (1 for an empty set), arrives at 0,
/// bursts for 5 units with priority 1.
pub fn next_process(existing: &[Process]) -> Process {
    let id = existing.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
    Process::new(id, 0, NEW_PROCESS_BURST).with_priority(NEW_PROCESS_PRIORITY)
}

/// Random process set generator.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_cpu_schedule::workload::WorkloadGenerator;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let processes = WorkloadGenerator::new(5).with_burst(1..=4).generate(&mut rng);
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (1..=4).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    arrival: RangeInclusive<i64>,
    burst: RangeInclusive<i64>,
    priority: RangeInclusive<i32>,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// Defaults: arrival 0..=10, burst 1..=10, priority 1..=5.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: 0..=10,
            burst: 1..=10,
            priority: 1..=5,
        }
    }

    /// Sets the arrival time range. Negative bounds are clamped to 0.
    pub fn with_arrival(mut self, range: RangeInclusive<i64>) -> Self {
        self.arrival = clamp_range(range, 0);
        self
    }

    /// Sets the burst time range. Bounds below 1 are clamped to 1.
    pub fn with_burst(mut self, range: RangeInclusive<i64>) -> Self {
        self.burst = clamp_range(range, 1);
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, range: RangeInclusive<i32>) -> Self {
        let (lo, hi) = range.into_inner();
        self.priority = lo.min(hi)..=lo.max(hi);
        self
    }

    /// Generates the process set, ids 1..=count, names `P<id>`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|i| {
                Process::new(
                    i as u32,
                    rng.random_range(self.arrival.clone()),
                    rng.random_range(self.burst.clone()),
                )
                .with_priority(rng.random_range(self.priority.clone()))
            })
            .collect()
    }
}

fn clamp_range(range: RangeInclusive<i64>, floor: i64) -> RangeInclusive<i64> {
    let (lo, hi) = range.into_inner();
    let (lo, hi) = (lo.min(hi).max(floor), lo.max(hi).max(floor));
    lo..=hi
}
