use chrono::Timelike;

use crate::calculator::round_half_up;
use crate::models::MealTime;

/// Classify a timestamp into a meal bucket by its hour of day.
pub fn get_meal_time<T: Timelike>(timestamp: &T) -> MealTime {
    MealTime::from_hour(timestamp.hour())
}

/// Share of a goal consumed, as a whole percentage in `0..=100`.
///
/// A non-positive goal yields 0.
pub fn macro_percentage(consumed: f64, goal: f64) -> i64 {
    if goal <= 0.0 || !goal.is_finite() || !consumed.is_finite() {
        return 0;
    }
    let pct = round_half_up(consumed / goal * 100.0) as i64;
    pct.clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_get_meal_time() {
        assert_eq!(get_meal_time(&at(9, 0)), MealTime::Breakfast);
        assert_eq!(get_meal_time(&at(9, 59)), MealTime::Breakfast);
        assert_eq!(get_meal_time(&at(10, 0)), MealTime::Lunch);
        assert_eq!(get_meal_time(&at(14, 0)), MealTime::Snack);
        assert_eq!(get_meal_time(&at(17, 59)), MealTime::Snack);
        assert_eq!(get_meal_time(&at(18, 0)), MealTime::Dinner);
    }

    #[test]
    fn test_macro_percentage() {
        assert_eq!(macro_percentage(50.0, 100.0), 50);
        assert_eq!(macro_percentage(150.0, 100.0), 100);
        assert_eq!(macro_percentage(0.0, 100.0), 0);
        assert_eq!(macro_percentage(62.0, 120.0), 52);
        assert_eq!(macro_percentage(75.0, 200.0), 38);
    }

    #[test]
    fn test_macro_percentage_floors_and_guards() {
        assert_eq!(macro_percentage(-10.0, 100.0), 0);
        assert_eq!(macro_percentage(10.0, 0.0), 0);
        assert_eq!(macro_percentage(10.0, -5.0), 0);
    }
}
