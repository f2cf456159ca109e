use crate::{amount_or_zero, ensure_finite, ValidationResult};
use serde::{Deserialize, Serialize};

/// Activity metrics for the current session
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub calories_burned: f64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub steps: f64,
    /// Beats per minute
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub heart_rate: f64,
}

/// Partial update of `WorkoutStats`
///
/// Also the request body for logging a workout against the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStatsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
}

impl WorkoutStatsPatch {
    pub fn calories_burned(mut self, value: f64) -> Self {
        self.calories_burned = Some(value);
        self
    }

    pub fn steps(mut self, value: f64) -> Self {
        self.steps = Some(value);
        self
    }

    pub fn heart_rate(mut self, value: f64) -> Self {
        self.heart_rate = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> ValidationResult<()> {
        for (field, value) in [
            ("caloriesBurned", self.calories_burned),
            ("steps", self.steps),
            ("heartRate", self.heart_rate),
        ] {
            if let Some(value) = value {
                ensure_finite(field, value)?;
            }
        }
        Ok(())
    }

    pub fn apply_to(&self, target: &mut WorkoutStats) {
        if let Some(v) = self.calories_burned {
            target.calories_burned = v;
        }
        if let Some(v) = self.steps {
            target.steps = v;
        }
        if let Some(v) = self.heart_rate {
            target.heart_rate = v;
        }
    }
}
