//! Sports walking calorie model
//!
//! Unlike running, the walking formula weighs the athlete's height: the
//! speed term is converted to m/s, squared and divided by height in meters.

use crate::error::Result;
use crate::models::WorkoutKind;
use crate::training::{ensure_positive, Training, TrainingData, MIN_IN_H};

pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// km/h to m/s
pub const KMH_IN_MSEC: f64 = 0.278;

pub const CM_IN_M: f64 = 100.0;

/// A sports walking workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    data: TrainingData,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        let kind = WorkoutKind::SportsWalking;
        let data = TrainingData::new(kind, action_count, duration_hours, weight_kg)?;
        ensure_positive(kind, "height_cm", height_cm)?;
        Ok(Self { data, height_cm })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.data.weight_kg;
        let speed_ms = self.mean_speed() * KMH_IN_MSEC;

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / (self.height_cm / CM_IN_M))
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * self.data.duration_hours
            * MIN_IN_H
    }
}
