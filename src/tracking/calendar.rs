use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{HealthError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Exercise,
    Nutrition,
    Health,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Exercise => "exercise",
            EventCategory::Nutrition => "nutrition",
            EventCategory::Health => "health",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exercise" => Ok(EventCategory::Exercise),
            "nutrition" => Ok(EventCategory::Nutrition),
            "health" => Ok(EventCategory::Health),
            other => Err(format!(
                "unknown category '{}', expected exercise, nutrition or health",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthEvent {
    pub id: u32,
    pub date: NaiveDate,
    pub title: String,
    pub category: EventCategory,
    pub completed: bool,
}

/// A list of dated health events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    events: Vec<HealthEvent>,
}

impl Calendar {
    pub fn new(events: Vec<HealthEvent>) -> Self {
        Self { events }
    }

    /// Five events spread over mid-October 2023.
    pub fn sample() -> Self {
        let event = |id, day, title: &str, category, completed| HealthEvent {
            id,
            date: NaiveDate::from_ymd_opt(2023, 10, day).unwrap_or_default(),
            title: title.to_string(),
            category,
            completed,
        };
        Self::new(vec![
            event(1, 15, "Cardio workout", EventCategory::Exercise, true),
            event(2, 16, "Meal prep", EventCategory::Nutrition, true),
            event(3, 18, "Doctor appointment", EventCategory::Health, false),
            event(4, 20, "Yoga class", EventCategory::Exercise, false),
            event(5, 22, "Weigh-in", EventCategory::Health, false),
        ])
    }

    pub fn events(&self) -> &[HealthEvent] {
        &self.events
    }

    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&HealthEvent> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    pub fn events_for_date_in(
        &self,
        date: NaiveDate,
        category: EventCategory,
    ) -> Vec<&HealthEvent> {
        self.events
            .iter()
            .filter(|e| e.date == date && e.category == category)
            .collect()
    }

    pub fn has_event_on_date(&self, date: NaiveDate) -> bool {
        self.events.iter().any(|e| e.date == date)
    }

    /// Dates that carry at least one event, sorted and deduplicated.
    pub fn event_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.events.iter().map(|e| e.date).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    /// Flip an event's completion flag and return the new value.
    pub fn toggle_completion(&mut self, id: u32) -> Result<bool> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(HealthError::EventNotFound(id))?;
        event.completed = !event.completed;
        info!(id, completed = event.completed, title = %event.title, "event toggled");
        Ok(event.completed)
    }

    /// Add an event with the next free id.
    pub fn add_event(
        &mut self,
        date: NaiveDate,
        title: impl Into<String>,
        category: EventCategory,
    ) -> Result<&HealthEvent> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(HealthError::InvalidInput(
                "Event title is required".to_string(),
            ));
        }

        let id = self.events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.events.push(HealthEvent {
            id,
            date,
            title: title.trim().to_string(),
            category,
            completed: false,
        });
        info!(id, %date, %category, "event added");
        Ok(&self.events[self.events.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oct(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, day).unwrap()
    }

    #[test]
    fn test_events_for_date() {
        let calendar = Calendar::sample();
        let events = calendar.events_for_date(oct(18));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Doctor appointment");

        assert!(calendar.has_event_on_date(oct(15)));
        assert!(!calendar.has_event_on_date(oct(17)));
        assert!(calendar.events_for_date(oct(17)).is_empty());
    }

    #[test]
    fn test_events_for_date_in_category() {
        let calendar = Calendar::sample();
        assert_eq!(
            calendar
                .events_for_date_in(oct(20), EventCategory::Exercise)
                .len(),
            1
        );
        assert!(calendar
            .events_for_date_in(oct(20), EventCategory::Health)
            .is_empty());
    }

    #[test]
    fn test_toggle_completion() {
        let mut calendar = Calendar::sample();
        assert!(calendar.toggle_completion(3).unwrap());
        assert!(!calendar.toggle_completion(3).unwrap());
        assert!(matches!(
            calendar.toggle_completion(99),
            Err(HealthError::EventNotFound(99))
        ));
    }

    #[test]
    fn test_add_event_assigns_next_id() {
        let mut calendar = Calendar::sample();
        let event = calendar
            .add_event(oct(25), "Swim", EventCategory::Exercise)
            .unwrap();
        assert_eq!(event.id, 6);
        assert!(!event.completed);
        assert!(calendar.add_event(oct(25), "  ", EventCategory::Health).is_err());
        assert_eq!(calendar.event_dates().len(), 6);
    }
}
