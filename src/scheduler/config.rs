//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::algorithms::{TieBreak, DEFAULT_QUANTUM};
use crate::error::{SimulationError, SimulationResult};

/// Tunables shared by all algorithm runs.
///
/// Missing JSON fields take their defaults.
///
/// # Example
/// ```
/// use u_cpu_schedule::scheduler::SimulationConfig;
/// use u_cpu_schedule::algorithms::TieBreak;
///
/// let config = SimulationConfig::from_json(r#"{"quantum": 4}"#).unwrap();
/// assert_eq!(config.quantum, 4);
/// assert_eq!(config.tie_break, TieBreak::FirstFound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Round Robin time quantum. Ignored by other algorithms.
    pub quantum: i64,
    /// Tie rule for SJF, Priority and SRTF.
    pub tie_break: TieBreak,
}

impl SimulationConfig {
    /// Creates the default configuration (quantum 2, first-found ties).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Checks that the quantum is usable.
    pub fn validate(&self) -> SimulationResult<()> {
        if self.quantum < 1 {
            return Err(SimulationError::InvalidQuantum(self.quantum));
        }
        Ok(())
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> SimulationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            tie_break: TieBreak::FirstFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimulationConfig::new();
        assert_eq!(c.quantum, 2);
        assert_eq!(c.tie_break, TieBreak::FirstFound);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = SimulationConfig::new()
            .with_quantum(5)
            .with_tie_break(TieBreak::LastFound);
        assert_eq!(c.quantum, 5);
        assert_eq!(c.tie_break, TieBreak::LastFound);
    }

    #[test]
    fn test_validate_quantum() {
        assert!(matches!(
            SimulationConfig::new().with_quantum(0).validate(),
            Err(SimulationError::InvalidQuantum(0))
        ));
    }

    #[test]
    fn test_from_json() {
        let c = SimulationConfig::from_json(r#"{"quantum":3,"tieBreak":"last-found"}"#).unwrap();
        assert_eq!(c, SimulationConfig::new().with_quantum(3).with_tie_break(TieBreak::LastFound));

        let empty = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(empty, SimulationConfig::default());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = SimulationConfig::from_json(r#"{"quantum":"two"}"#).unwrap_err();
        assert!(matches!(err, SimulationError::Serialization(_)));
    }
}
