pub mod advice;
pub mod calculations;
pub mod constants;

pub use advice::{advice_tips, AdviceTip};
pub use calculations::{
    calculate, calculate_bmr, goal_direction, round_half_up, target_calories, validate,
    weeks_to_goal,
};
pub use constants::*;
