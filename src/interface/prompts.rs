use dialoguer::{Confirm, Input, Select};

use crate::error::{HealthError, Result};
use crate::models::{ActivityLevel, FoodEntry, FoodItem, GoalInput, Sex};

fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()?)
}

fn prompt_number(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    input
        .trim()
        .parse()
        .map_err(|_| HealthError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for the food form, keeping any fields already given on the command line.
///
/// Raw text is passed through unchanged so the ledger decides what is valid.
pub fn prompt_food_entry(
    name: Option<String>,
    calories: Option<String>,
    protein: Option<String>,
    carbs: Option<String>,
    fat: Option<String>,
    serving: Option<String>,
) -> Result<FoodEntry> {
    let name = match name {
        Some(n) => n,
        None => prompt_text("Food name", true)?,
    };
    let calories = match calories {
        Some(c) => c,
        None => prompt_text("Calories", true)?,
    };

    // Optional fields are only prompted for when nothing at all was passed.
    let interactive = protein.is_none() && carbs.is_none() && fat.is_none() && serving.is_none();
    let optional = |value: Option<String>, prompt: &str| -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None if interactive => prompt_text(prompt, true),
            None => Ok(String::new()),
        }
    };

    let protein = optional(protein, "Protein (g)")?;
    let carbs = optional(carbs, "Carbs (g)")?;
    let fat = optional(fat, "Fat (g)")?;
    let serving = optional(serving, "Serving size")?;

    Ok(FoodEntry::from_form(
        &name, &calories, &protein, &carbs, &fat, &serving,
    ))
}

/// Let the user pick one of several matching food items.
pub fn prompt_pick_food<'a>(candidates: &[&'a FoodItem]) -> Result<Option<&'a FoodItem>> {
    match candidates {
        [] => Ok(None),
        [only] => {
            let confirm = prompt_yes_no(
                &format!("Delete '{}' ({} cal)?", only.name, only.calories),
                true,
            )?;
            Ok(confirm.then_some(*only))
        }
        _ => {
            let mut options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|item| {
                    format!(
                        "{} ({} cal, {})",
                        item.name,
                        item.calories,
                        item.timestamp.format("%H:%M")
                    )
                })
                .collect();
            let shown = options.len();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which item?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok((selection < shown).then(|| candidates[selection]))
        }
    }
}

/// Prompt for the calculator fields that were not given on the command line.
pub fn prompt_goal_input(
    weight: Option<f64>,
    target: Option<f64>,
    height: Option<f64>,
    age: Option<u32>,
    sex: Option<Sex>,
    activity: Option<ActivityLevel>,
) -> Result<GoalInput> {
    let current_weight_kg = match weight {
        Some(w) => w,
        None => prompt_number("Current weight (kg)")?,
    };
    let target_weight_kg = match target {
        Some(t) => t,
        None => prompt_number("Target weight (kg)")?,
    };
    let height_cm = match height {
        Some(h) => h,
        None => prompt_number("Height (cm)")?,
    };
    let age_years = match age {
        Some(a) => a,
        None => {
            let input: String = Input::new().with_prompt("Age").interact_text()?;
            input
                .trim()
                .parse()
                .map_err(|_| HealthError::InvalidInput("Age must be a whole number".to_string()))?
        }
    };
    let sex = match sex {
        Some(s) => s,
        None => {
            let selection = Select::new()
                .with_prompt("Sex")
                .items(&["Male", "Female"])
                .default(0)
                .interact()?;
            if selection == 0 { Sex::Male } else { Sex::Female }
        }
    };
    let activity = match activity {
        Some(a) => a,
        None => {
            let options: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.description()).collect();
            let selection = Select::new()
                .with_prompt("Activity level")
                .items(&options)
                .default(2)
                .interact()?;
            ActivityLevel::ALL[selection]
        }
    };

    Ok(GoalInput {
        current_weight_kg,
        target_weight_kg,
        height_cm,
        age_years,
        sex,
        activity,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
