//! Running calorie model

use crate::error::Result;
use crate::models::WorkoutKind;
use crate::training::{Training, TrainingData, MIN_IN_H, M_IN_KM};

/// Speed multiplier in the running calorie formula
pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;

/// Speed shift in the running calorie formula
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// A running workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        let data =
            TrainingData::new(WorkoutKind::Running, action_count, duration_hours, weight_kg)?;
        Ok(Self { data })
    }
}

impl Training for Running {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * self.data.weight_kg
            / M_IN_KM
            * self.data.duration_hours
            * MIN_IN_H
    }
}
