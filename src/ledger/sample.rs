use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::ledger::NutritionLedger;
use crate::models::{FoodItem, NutritionGoals};

/// Greek yogurt, chicken and a quinoa bowl: 780 kcal over three meals.
pub fn sample_food_items(date: NaiveDate) -> Vec<FoodItem> {
    vec![
        sample_item("1", "Greek Yogurt", 150.0, 15.0, 10.0, 5.0, "1 cup", date, 8, 30),
        sample_item("2", "Chicken Breast", 280.0, 35.0, 0.0, 10.0, "6 oz", date, 12, 15),
        sample_item("3", "Quinoa Bowl", 350.0, 12.0, 65.0, 8.0, "1 bowl", date, 18, 0),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample_item(
    id: &str,
    name: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    serving_size: &str,
    date: NaiveDate,
    hour: u32,
    minute: u32,
) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        calories,
        protein,
        carbs,
        fat,
        serving_size: serving_size.to_string(),
        timestamp: local_at(date, hour, minute),
    }
}

fn local_at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Local> {
    let naive = date.and_hms_opt(hour, minute, 0).unwrap_or_default();
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

impl NutritionLedger {
    /// A ledger pre-filled with a sample day and default goals.
    pub fn with_sample_day(date: NaiveDate) -> Self {
        Self::from_items(sample_food_items(date), NutritionGoals::default())
    }
}
