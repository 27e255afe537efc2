mod persistence;
mod store;

pub use persistence::{
    export_food_log_csv, load_calendar, load_ledger, load_tips, load_water, save_calendar,
    save_ledger, save_tips, save_water, CALENDAR_EVENTS_KEY, FAVORITE_TIPS_KEY, FOOD_LOG_KEY,
    LIKED_TIPS_KEY, WATER_INTAKE_KEY,
};
pub use store::{load_json, save_json, JsonFileStore, MemoryStore, StateStore};
