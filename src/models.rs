use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TrainingError};

/// Workout types the calculator knows how to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    /// All kinds, in the order their codes are registered
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Three-letter code used by the sensor packages
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Name shown in the summary line
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Resolve a package code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| TrainingError::UnrecognizedWorkoutCode {
                code: code.to_string(),
            })
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for WorkoutKind {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

/// Derived, display-ready metrics for one workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Which workout produced these numbers
    pub training_kind: WorkoutKind,

    /// Duration in hours
    pub duration_hours: f64,

    /// Distance covered in kilometers
    pub distance_km: f64,

    /// Average speed in km/h
    pub mean_speed_kmh: f64,

    /// Calories burned (kcal)
    pub calories: f64,
}

impl Summary {
    /// Render the fixed-template summary line
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Reject summaries whose metrics overflowed to infinity or NaN
    pub fn ensure_finite(self) -> Result<Self> {
        let metrics = [
            ("distance_km", self.distance_km),
            ("mean_speed_kmh", self.mean_speed_kmh),
            ("calories", self.calories),
        ];

        match metrics.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((metric, value)) => Err(TrainingError::NonFiniteResult {
                kind: self.training_kind,
                metric,
                value,
            }),
            None => Ok(self),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.training_kind,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}
