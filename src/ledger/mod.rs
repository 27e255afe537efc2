pub mod calculations;
mod manager;
mod sample;
mod tally;

pub use calculations::{get_meal_time, macro_percentage};
pub use manager::{LedgerSnapshot, NutritionLedger};
pub use sample::sample_food_items;
