use serde::{Deserialize, Serialize};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Today's step count with a week of history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepData {
    pub current: u32,
    pub goal: u32,
    pub weekly_data: [u32; 7],
    pub weekly_labels: [String; 7],
}

impl StepData {
    pub fn new(current: u32, goal: u32, weekly_data: [u32; 7]) -> Self {
        Self {
            current,
            goal,
            weekly_data,
            weekly_labels: WEEKDAY_LABELS.map(str::to_string),
        }
    }

    pub fn sample() -> Self {
        Self::new(6824, 10000, [9234, 7841, 8512, 10243, 6824, 0, 0])
    }

    /// Progress towards today's goal, unrounded and uncapped.
    pub fn percentage(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        self.current as f64 / self.goal as f64 * 100.0
    }

    pub fn weekly_total(&self) -> u64 {
        self.weekly_data.iter().map(|&s| s as u64).sum()
    }

    /// Average over days with any steps recorded.
    pub fn weekly_average(&self) -> f64 {
        let active: Vec<u32> = self.weekly_data.iter().copied().filter(|&s| s > 0).collect();
        if active.is_empty() {
            return 0.0;
        }
        active.iter().map(|&s| s as f64).sum::<f64>() / active.len() as f64
    }

    /// Label and count of the best day, if any steps were recorded.
    pub fn best_day(&self) -> Option<(&str, u32)> {
        self.weekly_data
            .iter()
            .zip(self.weekly_labels.iter())
            .filter(|(steps, _)| **steps > 0)
            .max_by_key(|(steps, _)| **steps)
            .map(|(steps, label)| (label.as_str(), *steps))
    }

    /// Days in the week that met the goal.
    pub fn days_goal_met(&self) -> usize {
        self.weekly_data.iter().filter(|&&s| s >= self.goal).count()
    }
}

/// Headline activity figures for the day plus a week of calories burned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub active_minutes: u32,
    pub calories_burned: u32,
    pub heart_rate_bpm: u32,
    pub weekly_calories_burned: [u32; 7],
}

impl ActivityStats {
    pub fn sample() -> Self {
        Self {
            active_minutes: 45,
            calories_burned: 320,
            heart_rate_bpm: 72,
            weekly_calories_burned: [280, 350, 290, 320, 400, 380, 320],
        }
    }

    pub fn weekly_calories_total(&self) -> u32 {
        self.weekly_calories_burned.iter().sum()
    }
}

/// Render a count with comma thousands separators.
pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact axis label: values above 999 become whole thousands ("9k").
pub fn format_compact(num: u32) -> String {
    if num > 999 {
        format!("{:.0}k", num as f64 / 1000.0)
    } else {
        num.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_percentage() {
        let steps = StepData::sample();
        assert!((steps.percentage() - 68.24).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_stats() {
        let steps = StepData::sample();
        assert_eq!(steps.weekly_total(), 42654);
        assert!((steps.weekly_average() - 8530.8).abs() < 1e-9);
        assert_eq!(steps.best_day(), Some(("Thu", 10243)));
        assert_eq!(steps.days_goal_met(), 1);
    }

    #[test]
    fn test_empty_week() {
        let steps = StepData::new(0, 10000, [0; 7]);
        assert_eq!(steps.weekly_average(), 0.0);
        assert_eq!(steps.best_day(), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(6824), "6,824");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(320), "320");
        assert_eq!(format_compact(9234), "9k");
        assert_eq!(format_compact(10243), "10k");
    }

    #[test]
    fn test_activity_weekly_total() {
        assert_eq!(ActivityStats::sample().weekly_calories_total(), 2340);
    }
}
