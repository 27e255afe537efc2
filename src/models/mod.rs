pub mod food;
pub mod goal;
pub mod nutrition;

pub use food::{FoodEntry, FoodItem, MealTime};
pub use goal::{ActivityLevel, GoalDirection, GoalInput, GoalResult, Sex};
pub use nutrition::{Macros, NutritionGoals, NutritionSummary};
