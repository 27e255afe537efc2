use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::ledger::{get_meal_time, LedgerSnapshot, NutritionLedger};
use crate::models::FoodItem;
use crate::state::store::{load_json, save_json, StateStore};
use crate::tracking::{Calendar, HealthEvent, Tip, TipBrowser, WaterTracker};

pub const FOOD_LOG_KEY: &str = "foodLog";
pub const WATER_INTAKE_KEY: &str = "waterIntake";
pub const FAVORITE_TIPS_KEY: &str = "favoriteTips";
pub const LIKED_TIPS_KEY: &str = "likedTips";
pub const CALENDAR_EVENTS_KEY: &str = "calendarEvents";

/// Load the stored food log, if one was saved.
///
/// Stored items that no longer pass entry validation are skipped.
pub fn load_ledger<S: StateStore + ?Sized>(store: &S) -> Result<Option<NutritionLedger>> {
    let snapshot: Option<LedgerSnapshot> = load_json(store, FOOD_LOG_KEY)?;
    Ok(snapshot.map(NutritionLedger::from_snapshot))
}

pub fn save_ledger<S: StateStore + ?Sized>(store: &mut S, ledger: &NutritionLedger) -> Result<()> {
    save_json(store, FOOD_LOG_KEY, &ledger.to_snapshot())?;
    info!(items = ledger.len(), "food log saved");
    Ok(())
}

/// Load today's water intake. Missing state means nothing drunk yet.
pub fn load_water<S: StateStore + ?Sized>(store: &S) -> Result<WaterTracker> {
    let intake: Option<u32> = load_json(store, WATER_INTAKE_KEY)?;
    Ok(WaterTracker::new(intake.unwrap_or(0)))
}

pub fn save_water<S: StateStore + ?Sized>(store: &mut S, water: &WaterTracker) -> Result<()> {
    save_json(store, WATER_INTAKE_KEY, &water.intake_ml)
}

/// Build a tip browser from the seeded catalogue plus saved favourites and likes.
///
/// Liked ids that no longer exist in the catalogue are dropped, as are
/// duplicate ids.
pub fn load_tips<S: StateStore + ?Sized>(store: &S, seed: u64) -> Result<TipBrowser> {
    let catalog = TipBrowser::seeded(seed);
    let favorites: Vec<Tip> = load_json(store, FAVORITE_TIPS_KEY)?.unwrap_or_default();
    let liked: Vec<u32> = load_json(store, LIKED_TIPS_KEY)?.unwrap_or_default();

    let mut seen = HashSet::new();
    let liked: Vec<u32> = liked
        .into_iter()
        .filter(|id| catalog.get(*id).is_some() && seen.insert(*id))
        .collect();

    let mut tips = catalog.tips().to_vec();
    for tip in tips.iter_mut() {
        if liked.contains(&tip.id) {
            tip.likes += 1;
        }
    }

    Ok(TipBrowser::new(tips, favorites, liked))
}

pub fn save_tips<S: StateStore + ?Sized>(store: &mut S, tips: &TipBrowser) -> Result<()> {
    save_json(store, FAVORITE_TIPS_KEY, tips.favorites())?;
    save_json(store, LIKED_TIPS_KEY, tips.liked())
}

/// Load saved calendar events, falling back to the sample calendar.
pub fn load_calendar<S: StateStore + ?Sized>(store: &S) -> Result<Calendar> {
    let events: Option<Vec<HealthEvent>> = load_json(store, CALENDAR_EVENTS_KEY)?;
    Ok(events.map(Calendar::new).unwrap_or_else(Calendar::sample))
}

pub fn save_calendar<S: StateStore + ?Sized>(store: &mut S, calendar: &Calendar) -> Result<()> {
    save_json(store, CALENDAR_EVENTS_KEY, calendar.events())
}

/// Write the food log to a CSV file, one row per item.
pub fn export_food_log_csv<P: AsRef<Path>>(items: &[FoodItem], path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "meal",
        "calories",
        "protein",
        "carbs",
        "fat",
        "servingSize",
        "timestamp",
    ])?;

    for item in items {
        wtr.write_record([
            item.id.clone(),
            item.name.clone(),
            get_meal_time(&item.timestamp).to_string(),
            format!("{}", item.calories),
            format!("{}", item.protein),
            format!("{}", item.carbs),
            format!("{}", item.fat),
            item.serving_size.clone(),
            item.timestamp.to_rfc3339(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
