pub mod prompts;
pub mod render;

pub use prompts::{prompt_food_entry, prompt_goal_input, prompt_pick_food, prompt_yes_no};
pub use render::{
    display_events, display_food_log, display_goal_result, display_steps, display_summary,
    display_tip, display_water, progress_bar,
};
