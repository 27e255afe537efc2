use assert_float_eq::*;

use health_tracker_rs::calculator::{calculate, calculate_bmr, weeks_to_goal, LOSS_ADVICE};
use health_tracker_rs::models::{ActivityLevel, GoalDirection, GoalInput, Sex};
use health_tracker_rs::HealthError;

fn input(
    current: f64,
    target: f64,
    height: f64,
    age: u32,
    sex: Sex,
    activity: ActivityLevel,
) -> GoalInput {
    GoalInput {
        current_weight_kg: current,
        target_weight_kg: target,
        height_cm: height,
        age_years: age,
        sex,
        activity,
    }
}

#[test]
fn test_moderate_male_losing_ten_kg() {
    let result = calculate(&input(80.0, 70.0, 175.0, 30, Sex::Male, ActivityLevel::Moderate))
        .unwrap();

    assert_float_absolute_eq!(result.bmr, 1748.75, 1e-9);
    assert_eq!(result.maintenance_calories, 2711);
    assert_eq!(result.target_calories, 2211);
    assert_float_absolute_eq!(result.weeks_to_goal, 22.0, 1e-9);
    assert_eq!(result.direction, GoalDirection::Loss);
    assert_eq!(result.advice, LOSS_ADVICE);
}

#[test]
fn test_sedentary_female() {
    let result = calculate(&input(60.0, 55.0, 165.0, 25, Sex::Female, ActivityLevel::Sedentary))
        .unwrap();

    assert_float_absolute_eq!(result.bmr, 1345.25, 1e-9);
    assert_eq!(result.maintenance_calories, 1614);
    assert_eq!(result.target_calories, 1114);
    assert_float_absolute_eq!(result.weeks_to_goal, 11.0, 1e-9);
}

#[test]
fn test_gain_adds_surplus() {
    let result = calculate(&input(60.0, 65.0, 180.0, 25, Sex::Male, ActivityLevel::Active))
        .unwrap();

    assert_eq!(result.direction, GoalDirection::Gain);
    assert_eq!(result.maintenance_calories, 2769);
    assert_eq!(result.target_calories, 3269);
    assert_float_absolute_eq!(result.weeks_to_goal, 11.0, 1e-9);
}

#[test]
fn test_equal_weights_need_no_time() {
    let result = calculate(&input(70.0, 70.0, 170.0, 40, Sex::Female, ActivityLevel::Light))
        .unwrap();
    assert_eq!(result.direction, GoalDirection::Gain);
    assert_eq!(result.weeks_to_goal, 0.0);
}

#[test]
fn test_weeks_to_goal_rounds_to_one_decimal() {
    assert_float_absolute_eq!(weeks_to_goal(-3.0, -500.0), 6.6, 1e-9);
    assert_float_absolute_eq!(weeks_to_goal(1.0, 500.0), 2.2, 1e-9);
    assert_eq!(weeks_to_goal(4.0, 0.0), 0.0);
}

#[test]
fn test_bmr_sex_offset() {
    let male = calculate_bmr(70.0, 170.0, 35, Sex::Male);
    let female = calculate_bmr(70.0, 170.0, 35, Sex::Female);
    assert_float_absolute_eq!(male - female, 166.0, 1e-9);
}

#[test]
fn test_every_invalid_field_is_reported() {
    let err = calculate(&input(0.0, -5.0, f64::NAN, 0, Sex::Male, ActivityLevel::Moderate))
        .unwrap_err();
    let HealthError::Validation(e) = err else {
        panic!("expected a validation error");
    };

    for field in ["currentWeight", "targetWeight", "height", "age"] {
        assert!(e.has_field(field), "missing error for {}", field);
    }
    assert_eq!(e.errors.len(), 4);
}

#[test]
fn test_age_limit() {
    let base = input(80.0, 70.0, 175.0, 119, Sex::Male, ActivityLevel::Moderate);
    assert!(calculate(&base).is_ok());

    let too_old = GoalInput { age_years: 120, ..base };
    let err = calculate(&too_old).unwrap_err();
    let HealthError::Validation(e) = err else {
        panic!("expected a validation error");
    };
    assert!(e.has_field("age"));
    assert_eq!(e.errors.len(), 1);
}
