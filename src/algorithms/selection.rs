//! Candidate selection shared by the key-driven algorithms.
//!
//! SJF, Priority and SRTF all pick the candidate with the smallest key
//! from a left-to-right scan. Only the tie rule differs between callers,
//! so it is configurable here.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{Process, Schedule, ScheduleItem};

/// How equal keys are resolved during a selection scan.
///
/// The scan order is the order of the candidate list (input order for
/// SJF/Priority, arrival order for SRTF), never a secondary key such as id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The first candidate met with the minimal key wins.
    #[default]
    FirstFound,
    /// The last candidate met with the minimal key wins.
    LastFound,
}

impl TieBreak {
    /// Returns the candidate with the smallest key.
    pub(crate) fn select_min<T, K, F>(
        self,
        candidates: impl IntoIterator<Item = T>,
        key: F,
    ) -> Option<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut best: Option<(K, T)> = None;
        for candidate in candidates {
            let k = key(&candidate);
            let replace = match &best {
                None => true,
                Some((best_key, _)) => match self {
                    TieBreak::FirstFound => k < *best_key,
                    TieBreak::LastFound => k <= *best_key,
                },
            };
            if replace {
                best = Some((k, candidate));
            }
        }
        best.map(|(_, candidate)| candidate)
    }
}

/// Non-preemptive selection loop used by SJF and Priority.
///
/// Repeatedly picks the arrived process with the smallest key, runs it to
/// completion, and removes it from the pending list. When nothing has
/// arrived the clock jumps to the earliest pending arrival.
pub(crate) fn run_non_preemptive<K, F>(
    processes: &[Process],
    tie_break: TieBreak,
    key: F,
) -> Schedule
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut schedule = Schedule::new();
    let mut pending: Vec<&Process> = processes.iter().collect();
    let mut time: i64 = 0;

    while !pending.is_empty() {
        let available = pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_arrived(time));
        let picked = tie_break
            .select_min(available, |(_, p)| key(**p))
            .map(|(idx, p)| (idx, *p));

        let Some((idx, process)) = picked else {
            if let Some(next) = pending.iter().map(|p| p.arrival_time).min() {
                trace!(from = time, to = next, "cpu idle until next arrival");
                time = next;
            }
            continue;
        };

        if process.burst_time > 0 {
            schedule.push(ScheduleItem::new(
                process.id,
                time,
                time + process.burst_time,
            ));
            time += process.burst_time;
        }
        pending.remove(idx);
    }

    schedule
}
