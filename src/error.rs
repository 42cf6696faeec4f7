//! Unified error type for fittrack
//!
//! Every failure the calculation pipeline can report lives here, each with
//! a user-facing message.

use crate::models::WorkoutKind;
use thiserror::Error;

/// Top-level error type for all fittrack operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    /// The package code is not one of the known workout codes
    #[error("Unrecognized workout code: {code}")]
    UnrecognizedWorkoutCode { code: String },

    /// The package carries the wrong number of sensor values for its kind
    #[error("{kind} expects {expected} parameters, got {actual}")]
    ParameterCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// A sensor value is outside the range the formulas accept
    #[error("Invalid parameter for {kind}: {field}={value}")]
    InvalidParameter {
        kind: WorkoutKind,
        field: &'static str,
        value: f64,
    },

    /// A formula produced a value that is not finite (inputs too large)
    #[error("{kind} {metric} is not finite: {value}")]
    NonFiniteResult {
        kind: WorkoutKind,
        metric: &'static str,
        value: f64,
    },
}

/// Result type alias for fittrack operations
pub type Result<T> = std::result::Result<T, TrainingError>;

impl TrainingError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrainingError::UnrecognizedWorkoutCode { code } => {
                format!(
                    "No workout type is registered for code '{}'. Known codes: {}",
                    code,
                    WorkoutKind::ALL
                        .iter()
                        .map(|kind| kind.code())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            TrainingError::ParameterCount {
                kind,
                expected,
                actual,
            } => {
                format!(
                    "A {} package needs {} sensor values but {} were supplied",
                    kind, expected, actual
                )
            }
            TrainingError::NonFiniteResult { kind, metric, .. } => {
                format!(
                    "The {} {} is too large to compute; check the sensor values",
                    kind, metric
                )
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code() {
        let err = TrainingError::UnrecognizedWorkoutCode {
            code: "XYZ".to_string(),
        };
        assert_eq!(err.to_string(), "Unrecognized workout code: XYZ");
    }

    #[test]
    fn test_user_messages() {
        let err = TrainingError::UnrecognizedWorkoutCode {
            code: "BIKE".to_string(),
        };
        let message = err.user_message();
        assert!(message.contains("'BIKE'"));
        assert!(message.contains("SWM, RUN, WLK"));

        let err = TrainingError::ParameterCount {
            kind: WorkoutKind::Swimming,
            expected: 5,
            actual: 3,
        };
        assert_eq!(
            err.user_message(),
            "A Swimming package needs 5 sensor values but 3 were supplied"
        );

        let err = TrainingError::NonFiniteResult {
            kind: WorkoutKind::Running,
            metric: "calories",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Running calories is not finite: inf");
        assert!(err.user_message().contains("Running calories is too large"));
    }
}
