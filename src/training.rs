//! Shared training abstraction
//!
//! Every workout variant carries the same three sensor readings (action
//! count, duration, athlete weight) and derives distance, mean speed and a
//! summary the same way. Only the calorie formula is variant-specific, so
//! it is the one method [`Training`] leaves without a default.

use crate::error::{Result, TrainingError};
use crate::models::{Summary, WorkoutKind};

/// Distance covered by one step, in meters
pub const LEN_STEP_M: f64 = 0.65;

/// Distance covered by one swimming stroke, in meters
pub const SWIM_LEN_STEP_M: f64 = 1.38;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Sensor readings common to every workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingData {
    /// Steps or strokes counted by the sensor
    pub action_count: u32,

    /// Workout duration in hours, always > 0
    pub duration_hours: f64,

    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl TrainingData {
    /// Build a validated record
    pub fn new(
        kind: WorkoutKind,
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self> {
        ensure_positive(kind, "duration_hours", duration_hours)?;
        ensure_non_negative(kind, "weight_kg", weight_kg)?;

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
        })
    }
}

/// Calculation capability shared by all workout variants
pub trait Training {
    /// Raw sensor readings
    fn data(&self) -> &TrainingData;

    /// Concrete workout type, used as the summary label
    fn kind(&self) -> WorkoutKind;

    /// Length of one action in meters
    fn step_length(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        f64::from(self.data().action_count) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.data().duration_hours
    }

    /// Calories spent during the workout
    fn spent_calories(&self) -> f64;

    /// Collect the derived metrics into a [`Summary`]
    fn summary(&self) -> Summary {
        Summary {
            training_kind: self.kind(),
            duration_hours: self.data().duration_hours,
            distance_km: self.distance(),
            mean_speed_kmh: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

pub(crate) fn ensure_non_negative(
    kind: WorkoutKind,
    field: &'static str,
    value: f64,
) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TrainingError::InvalidParameter { kind, field, value })
    }
}

pub(crate) fn ensure_positive(
    kind: WorkoutKind,
    field: &'static str,
    value: f64,
) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TrainingError::InvalidParameter { kind, field, value })
    }
}

/// Convert a raw sensor value into a whole count
pub(crate) fn to_count(kind: WorkoutKind, field: &'static str, value: f64) -> Result<u32> {
    ensure_non_negative(kind, field, value)?;
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(TrainingError::InvalidParameter { kind, field, value });
    }
    Ok(value as u32)
}
