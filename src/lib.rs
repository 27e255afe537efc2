pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod ledger;
pub mod models;
pub mod state;
pub mod tracking;

pub use error::{FieldError, HealthError, Result, ValidationError};
pub use ledger::NutritionLedger;
pub use models::{FoodEntry, FoodItem, GoalInput, GoalResult, NutritionSummary};
