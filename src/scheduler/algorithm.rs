//! Algorithm catalog and identifier parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::error::SimulationError;

/// Supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// First Come First Served.
    #[default]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Priority scheduling (non-preemptive).
    Priority,
    /// Round Robin.
    RoundRobin,
    /// Shortest Remaining Time First.
    Srtf,
}

impl Algorithm {
    /// All algorithms, in catalog order.
    pub const ALL: [Algorithm; 5] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Priority,
        Self::RoundRobin,
        Self::Srtf,
    ];

    /// Wire identifier (`fcfs`, `sjf`, `priority`, `round-robin`, `srtf`).
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "round-robin",
            Self::Srtf => "srtf",
        }
    }

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Served (FCFS)",
            Self::Sjf => "Shortest Job First (SJF)",
            Self::Priority => "Priority Scheduling",
            Self::RoundRobin => "Round Robin",
            Self::Srtf => "Shortest Remaining Time First",
        }
    }

    /// One-line description.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "Processes are executed in the order they arrive in the ready queue.",
            Self::Sjf => "Process with the smallest execution time is selected for execution next.",
            Self::Priority => "Process with the highest priority is selected for execution next.",
            Self::RoundRobin => "Each process is assigned a fixed time slot in a cyclic way.",
            Self::Srtf => concat!(
                "Preemptive version of SJF, where the process with the smallest ",
                "remaining time is selected."
            ),
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin | Self::Srtf)
    }

    /// Whether the time quantum affects this algorithm.
    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Parses an identifier, falling back to FCFS for anything unknown.
    pub fn from_id_or_default(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            warn!(algorithm = id, "unknown algorithm, falling back to fcfs");
            Self::Fcfs
        })
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    /// Strict parse of a wire identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| SimulationError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
