use chrono::{Datelike, Local};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, EnvFilter};

use health_tracker_rs::calculator::calculate;
use health_tracker_rs::cli::{Cli, Command, TipsAction, WaterAction};
use health_tracker_rs::error::{HealthError, Result};
use health_tracker_rs::interface::{
    display_events, display_food_log, display_goal_result, display_steps, display_summary,
    display_tip, display_water, prompt_food_entry, prompt_goal_input, prompt_pick_food,
    prompt_yes_no,
};
use health_tracker_rs::ledger::{sample_food_items, NutritionLedger};
use health_tracker_rs::models::{FoodEntry, GoalInput, NutritionGoals};
use health_tracker_rs::state::{
    export_food_log_csv, load_calendar, load_ledger, load_tips, load_water, save_calendar,
    save_ledger, save_tips, save_water, JsonFileStore,
};
use health_tracker_rs::tracking::{ActivityStats, EventCategory, StepData, TipCategory};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut store = JsonFileStore::open(&cli.data)?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Summary => cmd_summary(&store),
        Command::Add {
            name,
            calories,
            protein,
            carbs,
            fat,
            serving,
        } => {
            let entry = prompt_food_entry(name, calories, protein, carbs, fat, serving)?;
            cmd_add(&mut store, entry)
        }
        Command::Delete { target } => cmd_delete(&mut store, &target),
        Command::Goals {
            calories,
            protein,
            carbs,
            fat,
        } => cmd_goals(&mut store, calories, protein, carbs, fat),
        Command::Calc {
            weight,
            target,
            height,
            age,
            sex,
            activity,
        } => {
            let input = prompt_goal_input(weight, target, height, age, sex, activity)?;
            cmd_calc(&input)
        }
        Command::Water { action } => cmd_water(&mut store, action.unwrap_or_default()),
        Command::Steps => {
            display_steps(&StepData::sample(), &ActivityStats::sample());
            Ok(())
        }
        Command::Calendar {
            date,
            category,
            toggle,
        } => cmd_calendar(&mut store, date, category, toggle),
        Command::Tips { action, seed } => {
            cmd_tips(&mut store, action.unwrap_or(TipsAction::Random), seed)
        }
        Command::Export { path } => {
            let ledger = load_or_empty(&store)?;
            export_food_log_csv(ledger.items(), &path)?;
            println!("Exported {} items to {}", ledger.len(), path);
            Ok(())
        }
        Command::ResetSample => cmd_reset_sample(&mut store),
    }
}

fn load_or_empty(store: &JsonFileStore) -> Result<NutritionLedger> {
    Ok(load_ledger(store)?.unwrap_or_default())
}

/// Show the nutrition summary and the food log.
fn cmd_summary(store: &JsonFileStore) -> Result<()> {
    let ledger = load_or_empty(store)?;
    display_summary(&ledger.summary());
    display_food_log(&ledger);
    Ok(())
}

/// Log a food item and save the ledger.
fn cmd_add(store: &mut JsonFileStore, entry: FoodEntry) -> Result<()> {
    let mut ledger = load_or_empty(store)?;

    let name = match ledger.add_food(entry) {
        Ok(item) => item.name.clone(),
        Err(HealthError::Validation(e)) => {
            println!("Food not added:");
            for field in &e.errors {
                println!("  {}", field);
            }
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    save_ledger(store, &ledger)?;
    println!("{} has been logged successfully.", name);
    display_summary(&ledger.summary());
    Ok(())
}

/// Delete by id or unique id prefix, falling back to a name search.
fn cmd_delete(store: &mut JsonFileStore, target: &str) -> Result<()> {
    let mut ledger = load_or_empty(store)?;

    let by_id = ledger
        .get_food(target)
        .or_else(|| ledger.find_by_id_prefix(target))
        .map(|item| item.id.clone());

    let id = if by_id.is_some() {
        by_id
    } else {
        let candidates = ledger.find_by_name(target);
        if candidates.is_empty() {
            println!("No logged food matches '{}'.", target);
            return Ok(());
        }
        prompt_pick_food(&candidates)?.map(|item| item.id.clone())
    };

    let Some(id) = id else {
        println!("Nothing deleted.");
        return Ok(());
    };

    if let Some(item) = ledger.delete_food(&id) {
        save_ledger(store, &ledger)?;
        println!("Deleted {}.", item.name);
        display_summary(&ledger.summary());
    }
    Ok(())
}

/// Show goals, or update the ones given.
fn cmd_goals(
    store: &mut JsonFileStore,
    calories: Option<f64>,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
) -> Result<()> {
    let mut ledger = load_or_empty(store)?;
    let current = ledger.goals();

    if calories.is_none() && protein.is_none() && carbs.is_none() && fat.is_none() {
        println!(
            "Goals: {:.0} kcal, protein {:.0} g, carbs {:.0} g, fat {:.0} g",
            current.calorie_goal, current.protein_goal, current.carbs_goal, current.fat_goal
        );
        return Ok(());
    }

    let goals = NutritionGoals {
        calorie_goal: calories.unwrap_or(current.calorie_goal),
        protein_goal: protein.unwrap_or(current.protein_goal),
        carbs_goal: carbs.unwrap_or(current.carbs_goal),
        fat_goal: fat.unwrap_or(current.fat_goal),
    };
    ledger.set_goals(goals)?;
    save_ledger(store, &ledger)?;
    println!("Goals updated.");
    display_summary(&ledger.summary());
    Ok(())
}

/// Run the goal calculator, listing every rejected field on bad input.
fn cmd_calc(input: &GoalInput) -> Result<()> {
    match calculate(input) {
        Ok(result) => {
            display_goal_result(&result);
            Ok(())
        }
        Err(HealthError::Validation(e)) => {
            println!("Cannot calculate:");
            for field in &e.errors {
                println!("  {}", field);
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn cmd_water(store: &mut JsonFileStore, action: WaterAction) -> Result<()> {
    let mut water = load_water(store)?;

    match action {
        WaterAction::Show => {}
        WaterAction::Add => water.add_glass(),
        WaterAction::Remove => water.remove_glass(),
        WaterAction::Reset => water.reset(),
    }
    if !matches!(action, WaterAction::Show) {
        save_water(store, &water)?;
    }

    display_water(&water);
    Ok(())
}

fn cmd_calendar(
    store: &mut JsonFileStore,
    date: Option<chrono::NaiveDate>,
    category: Option<EventCategory>,
    toggle: Option<u32>,
) -> Result<()> {
    let mut calendar = load_calendar(store)?;

    if let Some(id) = toggle {
        let completed = calendar.toggle_completion(id)?;
        save_calendar(store, &calendar)?;
        println!(
            "Event #{} marked {}.",
            id,
            if completed { "completed" } else { "not completed" }
        );
    }

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let events = match category {
        Some(c) => calendar.events_for_date_in(date, c),
        None => calendar.events_for_date(date),
    };
    display_events(date, &events);

    if events.is_empty() {
        let upcoming: Vec<String> = calendar
            .event_dates()
            .into_iter()
            .filter(|d| *d > date)
            .take(3)
            .map(|d| d.to_string())
            .collect();
        if !upcoming.is_empty() {
            println!("Next days with events: {}", upcoming.join(", "));
        }
    }
    Ok(())
}

fn cmd_tips(store: &mut JsonFileStore, action: TipsAction, seed: u64) -> Result<()> {
    let mut tips = load_tips(store, seed)?;

    match action {
        TipsAction::Random => {
            // One tip per day for a given seed.
            let day = Local::now().date_naive().num_days_from_ce() as u64;
            let mut rng = StdRng::seed_from_u64(seed ^ day);
            if let Some(tip) = tips.random_tip(&mut rng) {
                display_tip(tip, tips.is_favorite(tip.id), tips.is_liked(tip.id));
            }
        }
        TipsAction::List { category } => {
            let categories = match category {
                Some(c) => vec![c],
                None => TipCategory::ALL.to_vec(),
            };
            for category in categories {
                println!();
                println!("=== {} ===", category);
                for tip in tips.by_category(category) {
                    display_tip(tip, tips.is_favorite(tip.id), tips.is_liked(tip.id));
                }
            }
        }
        TipsAction::Like { id } => {
            if tips.like(id)? {
                save_tips(store, &tips)?;
                println!("Liked tip #{}.", id);
            } else {
                println!("Tip #{} was already liked.", id);
            }
        }
        TipsAction::Favorite { id } => {
            let now_favorite = tips.toggle_favorite(id)?;
            save_tips(store, &tips)?;
            if now_favorite {
                println!("Tip #{} added to favorites.", id);
            } else {
                println!("Tip #{} removed from favorites.", id);
            }
        }
        TipsAction::Favorites => {
            if tips.favorites().is_empty() {
                println!("No favorite tips yet.");
            }
            for tip in tips.favorites() {
                display_tip(tip, true, tips.is_liked(tip.id));
            }
        }
    }
    Ok(())
}

/// Replace the food log with the sample day, keeping current goals.
fn cmd_reset_sample(store: &mut JsonFileStore) -> Result<()> {
    let existing = load_ledger(store)?;

    if let Some(ledger) = &existing {
        if !ledger.is_empty() {
            let proceed = prompt_yes_no(
                &format!("Replace {} logged items with the sample day?", ledger.len()),
                false,
            )?;
            if !proceed {
                return Ok(());
            }
        }
    }

    let goals = existing.map(|l| l.goals()).unwrap_or_default();
    let ledger = NutritionLedger::from_items(sample_food_items(Local::now().date_naive()), goals);

    save_ledger(store, &ledger)?;
    println!(
        "Food log in {} replaced with the sample day.",
        store.path().display()
    );
    display_summary(&ledger.summary());
    display_food_log(&ledger);
    Ok(())
}
