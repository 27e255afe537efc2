use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::constants::activity_factor;

/// Biological sex category used by the BMR equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(format!("unknown sex '{}', expected male or female", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Multiplier applied to BMR to get maintenance calories.
    pub fn factor(&self) -> f64 {
        activity_factor(*self)
    }

    pub fn key(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light (1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (3-5 days/week)",
            ActivityLevel::Active => "Active (6-7 days/week)",
            ActivityLevel::VeryActive => "Very Active (2x per day)",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.key() == normalized)
            .ok_or_else(|| {
                let expected: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.key()).collect();
                format!(
                    "unknown activity level '{}', expected one of: {}",
                    s,
                    expected.join(", ")
                )
            })
    }
}

/// Body metrics for a goal calculation, in metric units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInput {
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    pub activity: ActivityLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalDirection {
    Loss,
    Gain,
}

impl fmt::Display for GoalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalDirection::Loss => f.write_str("weight loss"),
            GoalDirection::Gain => f.write_str("weight gain"),
        }
    }
}

/// Output of a goal calculation. Recomputed on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResult {
    pub bmr: f64,
    pub maintenance_calories: i64,
    pub target_calories: i64,
    pub weeks_to_goal: f64,
    pub direction: GoalDirection,
    pub advice: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_parse() {
        assert_eq!("very-active".parse(), Ok(ActivityLevel::VeryActive));
        assert_eq!("Very Active".parse(), Ok(ActivityLevel::VeryActive));
        assert_eq!("very_active".parse(), Ok(ActivityLevel::VeryActive));
        assert_eq!("moderate".parse(), Ok(ActivityLevel::Moderate));
        assert!("couch".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_sex_parse() {
        assert_eq!("Male".parse(), Ok(Sex::Male));
        assert_eq!("f".parse(), Ok(Sex::Female));
        assert!("other".parse::<Sex>().is_err());
    }

    #[test]
    fn test_activity_level_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "\"very-active\"");
    }
}
