//! Error types for simulation runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// Simulation result alias.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors raised by the simulation engine.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Round Robin needs a quantum of at least one time unit.
    #[error("Invalid quantum: {0} (must be >= 1)")]
    InvalidQuantum(i64),

    /// Metrics need at least one schedule item to define a horizon.
    #[error("Schedule is empty")]
    EmptySchedule,

    /// Averages are undefined over zero processes.
    #[error("Process list is empty")]
    EmptyProcessList,

    /// The process set failed validation.
    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Strict algorithm lookup failed.
    #[error("Unknown algorithm '{0}'. Valid: fcfs, sjf, priority, round-robin, srtf")]
    UnknownAlgorithm(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SimulationError::InvalidQuantum(0).to_string(),
            "Invalid quantum: 0 (must be >= 1)"
        );
        assert_eq!(SimulationError::EmptySchedule.to_string(), "Schedule is empty");
        assert!(SimulationError::UnknownAlgorithm("lottery".into())
            .to_string()
            .contains("'lottery'"));
    }

    #[test]
    fn test_invalid_input_joins_messages() {
        let err = SimulationError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "Process 2 has burst 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid input: Duplicate process ID: 1; Process 2 has burst 0"
        );
    }
}
