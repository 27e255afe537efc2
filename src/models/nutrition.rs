use serde::{Deserialize, Serialize};

use crate::error::{FieldError, ValidationError};
use crate::ledger::calculations::macro_percentage;

pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;
pub const DEFAULT_PROTEIN_GOAL: f64 = 120.0;
pub const DEFAULT_CARBS_GOAL: f64 = 200.0;
pub const DEFAULT_FAT_GOAL: f64 = 60.0;

/// Daily targets for calories (kcal) and macros (grams).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoals {
    pub calorie_goal: f64,
    pub protein_goal: f64,
    pub carbs_goal: f64,
    pub fat_goal: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calorie_goal: DEFAULT_CALORIE_GOAL,
            protein_goal: DEFAULT_PROTEIN_GOAL,
            carbs_goal: DEFAULT_CARBS_GOAL,
            fat_goal: DEFAULT_FAT_GOAL,
        }
    }
}

impl NutritionGoals {
    /// Every goal must be a positive number.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let fields = [
            ("calorieGoal", self.calorie_goal),
            ("proteinGoal", self.protein_goal),
            ("carbsGoal", self.carbs_goal),
            ("fatGoal", self.fat_goal),
        ];
        let errors: Vec<FieldError> = fields
            .into_iter()
            .filter(|(_, v)| !(v.is_finite() && *v > 0.0))
            .map(|(field, _)| FieldError::new(field, "Goal must be a positive number"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

/// Calories plus the three tracked macronutrients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Consumed amounts next to their goals, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummary {
    pub calories_consumed: f64,
    pub calorie_goal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub protein_goal: f64,
    pub carbs_goal: f64,
    pub fat_goal: f64,
}

impl NutritionSummary {
    pub fn new(consumed: Macros, goals: NutritionGoals) -> Self {
        Self {
            calories_consumed: consumed.calories,
            calorie_goal: goals.calorie_goal,
            protein: consumed.protein,
            carbs: consumed.carbs,
            fat: consumed.fat,
            protein_goal: goals.protein_goal,
            carbs_goal: goals.carbs_goal,
            fat_goal: goals.fat_goal,
        }
    }

    pub fn consumed(&self) -> Macros {
        Macros {
            calories: self.calories_consumed,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }

    pub fn goals(&self) -> NutritionGoals {
        NutritionGoals {
            calorie_goal: self.calorie_goal,
            protein_goal: self.protein_goal,
            carbs_goal: self.carbs_goal,
            fat_goal: self.fat_goal,
        }
    }

    pub fn calorie_percentage(&self) -> i64 {
        macro_percentage(self.calories_consumed, self.calorie_goal)
    }

    pub fn protein_percentage(&self) -> i64 {
        macro_percentage(self.protein, self.protein_goal)
    }

    pub fn carbs_percentage(&self) -> i64 {
        macro_percentage(self.carbs, self.carbs_goal)
    }

    pub fn fat_percentage(&self) -> i64 {
        macro_percentage(self.fat, self.fat_goal)
    }

    /// Calories left before the goal; negative once the goal is exceeded.
    pub fn remaining_calories(&self) -> f64 {
        self.calorie_goal - self.calories_consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> NutritionSummary {
        NutritionSummary::new(
            Macros {
                calories: 780.0,
                protein: 62.0,
                carbs: 75.0,
                fat: 23.0,
            },
            NutritionGoals::default(),
        )
    }

    #[test]
    fn test_percentages() {
        let summary = sample_summary();
        assert_eq!(summary.calorie_percentage(), 39);
        assert_eq!(summary.protein_percentage(), 52);
        assert_eq!(summary.carbs_percentage(), 38);
        assert_eq!(summary.fat_percentage(), 38);
    }

    #[test]
    fn test_remaining_calories() {
        let summary = sample_summary();
        assert!((summary.remaining_calories() - 1220.0).abs() < 1e-9);
    }

    #[test]
    fn test_goals_validate() {
        assert!(NutritionGoals::default().validate().is_ok());
        let bad = NutritionGoals {
            fat_goal: 0.0,
            carbs_goal: f64::INFINITY,
            ..Default::default()
        };
        let err = bad.validate().unwrap_err();
        assert!(err.has_field("fatGoal"));
        assert!(err.has_field("carbsGoal"));
        assert!(!err.has_field("calorieGoal"));
    }

    #[test]
    fn test_goals_roundtrip_through_summary() {
        let goals = NutritionGoals {
            calorie_goal: 2500.0,
            ..Default::default()
        };
        let summary = NutritionSummary::new(Macros::default(), goals);
        assert_eq!(summary.goals(), goals);
        assert_eq!(summary.consumed(), Macros::default());
    }
}
