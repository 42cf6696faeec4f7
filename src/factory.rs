//! Build workouts from raw sensor packages
//!
//! A package is a workout code plus an ordered list of numbers. The numbers
//! are assigned positionally to the variant's constructor:
//!
//! | Code | Variant | Parameters |
//! |------|---------|------------|
//! | `SWM` | [`Swimming`] | action, duration, weight, pool length, pool laps |
//! | `RUN` | [`Running`] | action, duration, weight |
//! | `WLK` | [`SportsWalking`] | action, duration, weight, height |

use crate::error::{Result, TrainingError};
use crate::models::{Summary, WorkoutKind};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::{to_count, Training, TrainingData};
use crate::walking::SportsWalking;

/// Any supported workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl WorkoutKind {
    /// Number of sensor values a package of this kind carries
    pub fn parameter_count(&self) -> usize {
        match self {
            WorkoutKind::Swimming => 5,
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
        }
    }
}

/// Construct the workout a package describes
pub fn read_package(code: &str, params: &[f64]) -> Result<Workout> {
    let kind = WorkoutKind::from_code(code)?;

    let expected = kind.parameter_count();
    if params.len() != expected {
        return Err(TrainingError::ParameterCount {
            kind,
            expected,
            actual: params.len(),
        });
    }

    let action_count = to_count(kind, "action_count", params[0])?;
    let (duration_hours, weight_kg) = (params[1], params[2]);

    let workout = match kind {
        WorkoutKind::Swimming => {
            let pool_lap_count = to_count(kind, "pool_lap_count", params[4])?;
            Workout::Swimming(Swimming::new(
                action_count,
                duration_hours,
                weight_kg,
                params[3],
                pool_lap_count,
            )?)
        }
        WorkoutKind::Running => {
            Workout::Running(Running::new(action_count, duration_hours, weight_kg)?)
        }
        WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking::new(
            action_count,
            duration_hours,
            weight_kg,
            params[3],
        )?),
    };

    tracing::trace!(code, ?workout, "Package decoded");
    Ok(workout)
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Swimming(w) => w,
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
        }
    }
}

impl Training for Workout {
    fn data(&self) -> &TrainingData {
        self.as_training().data()
    }

    fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    fn step_length(&self) -> f64 {
        self.as_training().step_length()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }

    fn summary(&self) -> Summary {
        self.as_training().summary()
    }
}
