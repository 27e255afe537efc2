use crate::models::ActivityLevel;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients (metric units)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;

/// Constant term for the male equation.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Constant term for the female equation.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Goal planning
// ─────────────────────────────────────────────────────────────────────────────

/// Daily deficit (loss) or surplus (gain) applied to maintenance calories.
pub const DAILY_CALORIE_ADJUSTMENT: f64 = 500.0;

/// Approximate energy content of one kilogram of body weight.
pub const KCAL_PER_KG: f64 = 7700.0;

pub const DAYS_PER_WEEK: f64 = 7.0;

/// Ages at or above this are rejected.
pub const MAX_AGE_YEARS: u32 = 120;

pub const LOSS_ADVICE: &str =
    "Focus on creating a calorie deficit through diet and exercise. Prioritize protein and strength training to preserve muscle mass.";

pub const GAIN_ADVICE: &str =
    "To gain weight, focus on a calorie surplus with nutrient-dense foods. Combine with strength training to build muscle rather than just fat.";

/// Activity multiplier table.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}
