use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, ValidationError};

/// Serving size used when an entry leaves it blank.
pub const DEFAULT_SERVING_SIZE: &str = "serving";

/// Largest accepted value for calories or any macro on a single item.
pub const MAX_FOOD_AMOUNT: f64 = 100_000.0;

/// A logged food entry.
///
/// Items are created by the ledger and never mutated afterwards; deleting one
/// removes it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving_size: String,
    pub timestamp: DateTime<Local>,
}

impl FoodItem {
    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} cal, P:{} C:{} F:{}",
            self.name, self.serving_size, self.calories, self.protein, self.carbs, self.fat
        )
    }

    /// Apply the entry rules to an already stored item.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        check_food(
            &self.name,
            Some(self.calories),
            [self.protein, self.carbs, self.fat].map(Some),
        )
    }
}

/// User input for a new food item: everything except id and timestamp.
///
/// Numeric fields are optional; an absent value counts as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub name: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub serving_size: Option<String>,
}

impl FoodEntry {
    pub fn new(name: impl Into<String>, calories: f64) -> Self {
        Self {
            name: name.into(),
            calories: Some(calories),
            ..Default::default()
        }
    }

    pub fn with_macros(mut self, protein: f64, carbs: f64, fat: f64) -> Self {
        self.protein = Some(protein);
        self.carbs = Some(carbs);
        self.fat = Some(fat);
        self
    }

    pub fn with_serving_size(mut self, serving_size: impl Into<String>) -> Self {
        self.serving_size = Some(serving_size.into());
        self
    }

    /// Build an entry from raw form text. Unparseable numbers become absent.
    pub fn from_form(
        name: &str,
        calories: &str,
        protein: &str,
        carbs: &str,
        fat: &str,
        serving_size: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            calories: parse_amount(calories),
            protein: parse_amount(protein),
            carbs: parse_amount(carbs),
            fat: parse_amount(fat),
            serving_size: Some(serving_size.to_string()),
        }
    }

    /// Check required fields and numeric ranges.
    ///
    /// Name must be non-blank and calories present and non-zero once rounded
    /// to hundredths. Every amount must be finite and within `0..=MAX_FOOD_AMOUNT`.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        check_food(&self.name, self.calories, [self.protein, self.carbs, self.fat])
    }

    /// Resolve defaults and stamp identity. Amounts are kept to two decimals.
    pub(crate) fn into_item(self, id: String, timestamp: DateTime<Local>) -> FoodItem {
        let serving_size = self
            .serving_size
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVING_SIZE.to_string());

        FoodItem {
            id,
            name: self.name.trim().to_string(),
            calories: to_hundredths(self.calories.unwrap_or(0.0)),
            protein: to_hundredths(self.protein.unwrap_or(0.0)),
            carbs: to_hundredths(self.carbs.unwrap_or(0.0)),
            fat: to_hundredths(self.fat.unwrap_or(0.0)),
            serving_size,
            timestamp,
        }
    }
}

fn check_food(
    name: &str,
    calories: Option<f64>,
    macros: [Option<f64>; 3],
) -> std::result::Result<(), ValidationError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "Food name is required"));
    }

    match calories {
        None => errors.push(FieldError::new("calories", "Calories are required")),
        Some(c) if c.is_finite() && to_hundredths(c) == 0.0 => {
            errors.push(FieldError::new("calories", "Calories are required"))
        }
        _ => {}
    }

    let [protein, carbs, fat] = macros;
    let numeric = [
        ("calories", calories),
        ("protein", protein),
        ("carbs", carbs),
        ("fat", fat),
    ];
    for (field, value) in numeric {
        match value {
            Some(v) if !v.is_finite() => errors.push(FieldError::new(field, "must be a number")),
            Some(v) if v < 0.0 => errors.push(FieldError::new(field, "cannot be negative")),
            Some(v) if v > MAX_FOOD_AMOUNT => {
                errors.push(FieldError::new(field, "is unrealistically large"))
            }
            _ => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Meal bucket derived from the hour an item was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealTime {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealTime {
    /// All meal times in the order of a day.
    pub const ALL: [MealTime; 4] = [
        MealTime::Breakfast,
        MealTime::Lunch,
        MealTime::Snack,
        MealTime::Dinner,
    ];

    /// Boundary hours belong to the later bucket.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            h if h < 10 => MealTime::Breakfast,
            h if h < 14 => MealTime::Lunch,
            h if h < 18 => MealTime::Snack,
            _ => MealTime::Dinner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "Breakfast",
            MealTime::Lunch => "Lunch",
            MealTime::Snack => "Snack",
            MealTime::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
