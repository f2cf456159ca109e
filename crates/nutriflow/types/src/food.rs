//! Foods and macronutrient accounting.
//!
//! A `FoodItem` carries four macro amounts. Any amount missing on the source
//! record is zero, so summing a meal log never fails and never yields NaN.

use crate::{amount_or_zero, ensure_finite, FoodId, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A food as returned by the catalog and as stored in the meal log
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Absent on ad-hoc entries; such entries cannot be removed by id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FoodId>,
    pub name: String,
    /// Energy in kcal
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub calories: f64,
    /// Grams
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub protein: f64,
    /// Grams
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub carbs: f64,
    /// Grams
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FoodItem {
    /// Create a food with all macros at zero
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            category: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<FoodId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_calories(mut self, calories: f64) -> Self {
        self.calories = calories;
        self
    }

    pub fn with_protein(mut self, protein: f64) -> Self {
        self.protein = protein;
        self
    }

    pub fn with_carbs(mut self, carbs: f64) -> Self {
        self.carbs = carbs;
        self
    }

    pub fn with_fat(mut self, fat: f64) -> Self {
        self.fat = fat;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether this entry carries the given id
    pub fn has_id(&self, id: &FoodId) -> bool {
        self.id.as_ref() == Some(id)
    }

    /// This food's contribution to the daily totals
    pub fn macros(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }

    /// Check that every amount is a finite, non-negative number
    pub fn validate(&self) -> ValidationResult<()> {
        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            ensure_finite(field, value)?;
            if value < 0.0 {
                return Err(ValidationError::Negative { field, value });
            }
        }
        Ok(())
    }
}

/// Running macronutrient totals
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroTotals {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Component-wise sum over a meal log
    pub fn from_meals(meals: &[FoodItem]) -> Self {
        meals.iter().map(FoodItem::macros).sum()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Fails if any component has overflowed or become NaN
    pub fn validate(&self) -> ValidationResult<()> {
        ensure_finite("calories", self.calories)?;
        ensure_finite("protein", self.protein)?;
        ensure_finite("carbs", self.carbs)?;
        ensure_finite("fat", self.fat)
    }
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for MacroTotals {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            calories: self.calories - rhs.calories,
            protein: self.protein - rhs.protein,
            carbs: self.carbs - rhs.carbs,
            fat: self.fat - rhs.fat,
        }
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Partial update of `MacroTotals`; `None` fields are left as they are
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

impl MacroPatch {
    pub fn calories(mut self, value: f64) -> Self {
        self.calories = Some(value);
        self
    }

    pub fn protein(mut self, value: f64) -> Self {
        self.protein = Some(value);
        self
    }

    pub fn carbs(mut self, value: f64) -> Self {
        self.carbs = Some(value);
        self
    }

    pub fn fat(mut self, value: f64) -> Self {
        self.fat = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> ValidationResult<()> {
        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            if let Some(value) = value {
                ensure_finite(field, value)?;
            }
        }
        Ok(())
    }

    /// Overwrite the present fields of `target`
    pub fn apply_to(&self, target: &mut MacroTotals) {
        if let Some(v) = self.calories {
            target.calories = v;
        }
        if let Some(v) = self.protein {
            target.protein = v;
        }
        if let Some(v) = self.carbs {
            target.carbs = v;
        }
        if let Some(v) = self.fat {
            target.fat = v;
        }
    }
}

impl From<MacroTotals> for MacroPatch {
    /// A patch that sets every field
    fn from(totals: MacroTotals) -> Self {
        Self {
            calories: Some(totals.calories),
            protein: Some(totals.protein),
            carbs: Some(totals.carbs),
            fat: Some(totals.fat),
        }
    }
}
