pub mod calendar;
pub mod steps;
pub mod tips;
pub mod water;

pub use calendar::{Calendar, EventCategory, HealthEvent};
pub use steps::{format_compact, format_number, ActivityStats, StepData};
pub use tips::{random_tip, tip_catalog, Tip, TipBrowser, TipCategory};
pub use water::WaterTracker;
