use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily water target in millilitres.
pub const DEFAULT_WATER_GOAL_ML: u32 = 2000;

/// Size of one glass in millilitres.
pub const GLASS_SIZE_ML: u32 = 250;

/// Water intake for the day, counted in glasses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterTracker {
    pub intake_ml: u32,
    pub goal_ml: u32,
    pub glass_ml: u32,
}

impl Default for WaterTracker {
    fn default() -> Self {
        Self::new(0)
    }
}

impl WaterTracker {
    pub fn new(intake_ml: u32) -> Self {
        Self {
            intake_ml,
            goal_ml: DEFAULT_WATER_GOAL_ML,
            glass_ml: GLASS_SIZE_ML,
        }
    }

    pub fn add_glass(&mut self) {
        self.intake_ml = self.intake_ml.saturating_add(self.glass_ml);
        debug!(intake_ml = self.intake_ml, "glass added");
    }

    /// Remove one glass; intake never drops below zero.
    pub fn remove_glass(&mut self) {
        self.intake_ml = self.intake_ml.saturating_sub(self.glass_ml);
        debug!(intake_ml = self.intake_ml, "glass removed");
    }

    pub fn reset(&mut self) {
        self.intake_ml = 0;
    }

    /// Progress towards the goal, capped at 100. Not rounded.
    pub fn progress_percentage(&self) -> f64 {
        if self.goal_ml == 0 {
            return 100.0;
        }
        (self.intake_ml as f64 / self.goal_ml as f64 * 100.0).min(100.0)
    }

    pub fn remaining_ml(&self) -> u32 {
        self.goal_ml.saturating_sub(self.intake_ml)
    }

    /// Whole glasses drunk so far.
    pub fn glasses_count(&self) -> u32 {
        if self.glass_ml == 0 {
            return 0;
        }
        self.intake_ml / self.glass_ml
    }

    /// Glasses needed to reach the goal, rounding up.
    pub fn total_glasses(&self) -> u32 {
        if self.glass_ml == 0 {
            return 0;
        }
        self.goal_ml.div_ceil(self.glass_ml)
    }

    pub fn goal_reached(&self) -> bool {
        self.intake_ml >= self.goal_ml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_glasses() {
        let mut water = WaterTracker::default();
        water.add_glass();
        water.add_glass();
        assert_eq!(water.intake_ml, 500);
        assert_eq!(water.glasses_count(), 2);

        water.remove_glass();
        water.remove_glass();
        water.remove_glass();
        assert_eq!(water.intake_ml, 0);
    }

    #[test]
    fn test_progress_and_remaining() {
        let mut water = WaterTracker::new(750);
        assert!((water.progress_percentage() - 37.5).abs() < 1e-9);
        assert_eq!(water.remaining_ml(), 1250);
        assert_eq!(water.total_glasses(), 8);
        assert!(!water.goal_reached());

        water.intake_ml = 2600;
        assert_eq!(water.progress_percentage(), 100.0);
        assert_eq!(water.remaining_ml(), 0);
        assert!(water.goal_reached());

        water.reset();
        assert_eq!(water.intake_ml, 0);
    }

    #[test]
    fn test_partial_glass_counts() {
        let water = WaterTracker {
            intake_ml: 380,
            goal_ml: 2100,
            glass_ml: 250,
        };
        assert_eq!(water.glasses_count(), 1);
        assert_eq!(water.total_glasses(), 9);
    }
}
