use tracing::{debug, warn};

use crate::calculator::constants::*;
use crate::error::{FieldError, Result, ValidationError};
use crate::models::{GoalDirection, GoalInput, GoalResult, Sex};

/// Round to the nearest integer, with halves going up (2.5 -> 3, -2.5 -> -2).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Check every numeric field. All violations are reported together.
pub fn validate(input: &GoalInput) -> std::result::Result<(), ValidationError> {
    let mut errors = Vec::new();

    let weights = [
        ("currentWeight", input.current_weight_kg, "Weight must be a positive number"),
        ("targetWeight", input.target_weight_kg, "Weight must be a positive number"),
        ("height", input.height_cm, "Height must be a positive number"),
    ];
    for (field, value, message) in weights {
        if !(value.is_finite() && value > 0.0) {
            errors.push(FieldError::new(field, message));
        }
    }

    if input.age_years == 0 || input.age_years >= MAX_AGE_YEARS {
        errors.push(FieldError::new("age", "Age must be between 1 and 120"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

/// Basal metabolic rate via the Mifflin-St Jeor equation.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm - BMR_AGE_COEFF * age_years as f64
        + offset
}

/// Equal weights count as a gain.
pub fn goal_direction(current_weight_kg: f64, target_weight_kg: f64) -> GoalDirection {
    if target_weight_kg < current_weight_kg {
        GoalDirection::Loss
    } else {
        GoalDirection::Gain
    }
}

/// Unrounded daily calorie target for a direction.
pub fn target_calories(maintenance: f64, direction: GoalDirection) -> f64 {
    match direction {
        GoalDirection::Loss => maintenance - DAILY_CALORIE_ADJUSTMENT,
        GoalDirection::Gain => maintenance + DAILY_CALORIE_ADJUSTMENT,
    }
}

/// Weeks to move `weight_difference_kg` at the given daily calorie gap, to one decimal.
///
/// Returns 0.0 when the daily gap is zero.
pub fn weeks_to_goal(weight_difference_kg: f64, daily_gap: f64) -> f64 {
    let calories_needed = weight_difference_kg.abs() * KCAL_PER_KG;
    let calories_per_week = daily_gap.abs() * DAYS_PER_WEEK;
    if calories_per_week == 0.0 {
        return 0.0;
    }
    round_half_up(calories_needed / calories_per_week * 10.0) / 10.0
}

pub fn advice_for(direction: GoalDirection) -> &'static str {
    match direction {
        GoalDirection::Loss => LOSS_ADVICE,
        GoalDirection::Gain => GAIN_ADVICE,
    }
}

/// Compute maintenance calories, a calorie target and the time to reach the target weight.
///
/// Nothing is computed if any field fails validation.
pub fn calculate(input: &GoalInput) -> Result<GoalResult> {
    if let Err(e) = validate(input) {
        warn!(errors = %e, "goal calculation rejected");
        return Err(e.into());
    }

    let bmr = calculate_bmr(
        input.current_weight_kg,
        input.height_cm,
        input.age_years,
        input.sex,
    );
    let maintenance = bmr * input.activity.factor();
    let direction = goal_direction(input.current_weight_kg, input.target_weight_kg);
    let target = target_calories(maintenance, direction);
    let weeks = weeks_to_goal(
        input.target_weight_kg - input.current_weight_kg,
        target - maintenance,
    );

    debug!(bmr, maintenance, target, weeks, %direction, "goal calculated");

    Ok(GoalResult {
        bmr,
        maintenance_calories: round_half_up(maintenance) as i64,
        target_calories: round_half_up(target) as i64,
        weeks_to_goal: weeks,
        direction,
        advice: advice_for(direction),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HealthError;
    use crate::models::ActivityLevel;

    fn sample_input() -> GoalInput {
        GoalInput {
            current_weight_kg: 80.0,
            target_weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30,
            sex: Sex::Male,
            activity: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_bmr_male_and_female() {
        assert!((calculate_bmr(80.0, 175.0, 30, Sex::Male) - 1748.75).abs() < 1e-9);
        assert!((calculate_bmr(80.0, 175.0, 30, Sex::Female) - 1582.75).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_loss_scenario() {
        let result = calculate(&sample_input()).unwrap();
        assert_eq!(result.maintenance_calories, 2711);
        assert_eq!(result.target_calories, 2211);
        assert!((result.weeks_to_goal - 22.0).abs() < 1e-9);
        assert_eq!(result.direction, GoalDirection::Loss);
        assert_eq!(result.advice, LOSS_ADVICE);
    }

    #[test]
    fn test_equal_weight_is_gain_with_zero_weeks() {
        let input = GoalInput {
            target_weight_kg: 80.0,
            ..sample_input()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.direction, GoalDirection::Gain);
        assert_eq!(result.target_calories, result.maintenance_calories + 500);
        assert_eq!(result.weeks_to_goal, 0.0);
        assert_eq!(result.advice, GAIN_ADVICE);
    }

    #[test]
    fn test_weeks_round_to_one_decimal() {
        // 3 kg * 7700 / 3500 = 6.6
        assert!((weeks_to_goal(3.0, 500.0) - 6.6).abs() < 1e-9);
        // 1 kg * 7700 / 3500 = 2.2
        assert!((weeks_to_goal(-1.0, -500.0) - 2.2).abs() < 1e-9);
        assert_eq!(weeks_to_goal(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_validation_reports_every_field() {
        let input = GoalInput {
            current_weight_kg: 0.0,
            target_weight_kg: -5.0,
            height_cm: f64::NAN,
            age_years: 120,
            ..sample_input()
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.errors.len(), 4);
        assert!(err.has_field("currentWeight"));
        assert!(err.has_field("targetWeight"));
        assert!(err.has_field("height"));
        assert_eq!(err.message_for("age"), Some("Age must be between 1 and 120"));

        match calculate(&input) {
            Err(HealthError::Validation(v)) => assert_eq!(v, err),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_age_bounds() {
        let young = GoalInput {
            age_years: 1,
            ..sample_input()
        };
        assert!(validate(&young).is_ok());

        let old = GoalInput {
            age_years: 119,
            ..sample_input()
        };
        assert!(validate(&old).is_ok());

        let zero = GoalInput {
            age_years: 0,
            ..sample_input()
        };
        assert!(validate(&zero).is_err());
    }
}
