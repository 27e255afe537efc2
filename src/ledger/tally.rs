use std::ops::{AddAssign, SubAssign};

use crate::models::{FoodItem, Macros};

/// Consumed amounts in integer hundredths of a unit.
///
/// An item's contribution depends only on its immutable values, so adding and
/// later subtracting the same item always cancels exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct NutrientTally {
    calories: i64,
    protein: i64,
    carbs: i64,
    fat: i64,
}

fn centi(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

impl NutrientTally {
    pub(crate) fn of(item: &FoodItem) -> Self {
        Self {
            calories: centi(item.calories),
            protein: centi(item.protein),
            carbs: centi(item.carbs),
            fat: centi(item.fat),
        }
    }

    pub(crate) fn to_macros(self) -> Macros {
        Macros {
            calories: self.calories as f64 / 100.0,
            protein: self.protein as f64 / 100.0,
            carbs: self.carbs as f64 / 100.0,
            fat: self.fat as f64 / 100.0,
        }
    }
}

impl AddAssign for NutrientTally {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
    }
}

impl SubAssign for NutrientTally {
    fn sub_assign(&mut self, rhs: Self) {
        self.calories -= rhs.calories;
        self.protein -= rhs.protein;
        self.carbs -= rhs.carbs;
        self.fat -= rhs.fat;
    }
}
