use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::models::{ActivityLevel, Sex};
use crate::tracking::{EventCategory, TipCategory};

/// Health tracker: log food, plan weight goals, and follow water, steps and habits.
#[derive(Parser, Debug)]
#[command(name = "health_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the state JSON file.
    #[arg(short, long, global = true, default_value = "health_state.json")]
    pub data: String,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show today's nutrition summary and food log.
    Summary,

    /// Log a food item. Missing fields are prompted for.
    Add {
        #[arg(long)]
        name: Option<String>,

        /// Calories (kcal).
        #[arg(long)]
        calories: Option<String>,

        /// Protein (g).
        #[arg(long)]
        protein: Option<String>,

        /// Carbohydrates (g).
        #[arg(long)]
        carbs: Option<String>,

        /// Fat (g).
        #[arg(long)]
        fat: Option<String>,

        /// Serving size, e.g. "1 cup".
        #[arg(long)]
        serving: Option<String>,
    },

    /// Delete a logged food item by id or name.
    Delete {
        /// Item id, or a (fuzzy) food name.
        target: String,
    },

    /// Show or change nutrition goals.
    Goals {
        #[arg(long)]
        calories: Option<f64>,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,
    },

    /// Calculate maintenance and target calories for a weight goal.
    Calc {
        /// Current weight (kg).
        #[arg(long)]
        weight: Option<f64>,

        /// Target weight (kg).
        #[arg(long)]
        target: Option<f64>,

        /// Height (cm).
        #[arg(long)]
        height: Option<f64>,

        #[arg(long)]
        age: Option<u32>,

        /// male or female.
        #[arg(long)]
        sex: Option<Sex>,

        /// sedentary, light, moderate, active or very-active.
        #[arg(long)]
        activity: Option<ActivityLevel>,
    },

    /// Track water intake.
    Water {
        #[command(subcommand)]
        action: Option<WaterAction>,
    },

    /// Show step and activity overview.
    Steps,

    /// Show health events for a day.
    Calendar {
        /// Day to show (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Only show events of this category.
        #[arg(long)]
        category: Option<EventCategory>,

        /// Toggle completion of the event with this id.
        #[arg(long)]
        toggle: Option<u32>,
    },

    /// Browse health tips.
    Tips {
        #[command(subcommand)]
        action: Option<TipsAction>,

        /// Seed for tip selection and like counts.
        #[arg(long, default_value = "2024")]
        seed: u64,
    },

    /// Export the food log as CSV.
    Export {
        /// Output file.
        path: String,
    },

    /// Replace the food log with a sample day.
    ResetSample,
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary
    }
}

#[derive(Subcommand, Debug, Clone, Copy, Default)]
pub enum WaterAction {
    /// Show progress.
    #[default]
    Show,
    /// Drink one glass.
    Add,
    /// Undo one glass.
    Remove,
    /// Start over at zero.
    Reset,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum TipsAction {
    /// Show a random tip.
    Random,
    /// List tips, optionally for one category.
    List {
        #[arg(long)]
        category: Option<TipCategory>,
    },
    /// Like a tip.
    Like { id: u32 },
    /// Add or remove a tip from favorites.
    Favorite { id: u32 },
    /// List favorite tips.
    Favorites,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc_flags() {
        let cli = Cli::parse_from([
            "health_tracker",
            "calc",
            "--weight",
            "80",
            "--sex",
            "male",
            "--activity",
            "very-active",
        ]);
        match cli.command {
            Some(Command::Calc {
                weight,
                sex,
                activity,
                ..
            }) => {
                assert_eq!(weight, Some(80.0));
                assert_eq!(sex, Some(Sex::Male));
                assert_eq!(activity, Some(ActivityLevel::VeryActive));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_default_data_path() {
        let cli = Cli::parse_from(["health_tracker"]);
        assert_eq!(cli.data, "health_state.json");
        assert!(cli.command.is_none());
    }
}
