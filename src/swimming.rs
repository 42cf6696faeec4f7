//! Swimming calorie model
//!
//! Swimming counts strokes rather than steps, so the step length differs,
//! and mean speed comes from the pool dimensions instead of the stroke
//! distance.

use crate::error::Result;
use crate::models::WorkoutKind;
use crate::training::{ensure_non_negative, Training, TrainingData, M_IN_KM, SWIM_LEN_STEP_M};

pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// A pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    data: TrainingData,
    /// Pool length in meters
    pool_length_m: f64,
    /// Number of pool lengths swum
    pool_lap_count: u32,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> Result<Self> {
        let kind = WorkoutKind::Swimming;
        let data = TrainingData::new(kind, action_count, duration_hours, weight_kg)?;
        ensure_non_negative(kind, "pool_length_m", pool_length_m)?;

        Ok(Self {
            data,
            pool_length_m,
            pool_lap_count,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_lap_count(&self) -> u32 {
        self.pool_lap_count
    }
}

impl Training for Swimming {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn step_length(&self) -> f64 {
        SWIM_LEN_STEP_M
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lap_count) / M_IN_KM / self.data.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.data.weight_kg
            * self.data.duration_hours
    }
}
