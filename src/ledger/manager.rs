use std::collections::HashSet;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::ledger::calculations::get_meal_time;
use crate::ledger::tally::NutrientTally;
use crate::models::{FoodEntry, FoodItem, Macros, MealTime, NutritionGoals, NutritionSummary};

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Serialized form of a ledger. The summary is rebuilt from the items on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub goals: NutritionGoals,
    #[serde(default)]
    pub items: Vec<FoodItem>,
}

/// Logged food items plus the running nutrition summary.
///
/// Items are kept most-recent-first. The consumed tally is adjusted on every
/// add and delete and always equals the sum over the current items.
#[derive(Debug, Clone, Default)]
pub struct NutritionLedger {
    items: Vec<FoodItem>,
    goals: NutritionGoals,
    consumed: NutrientTally,
}

impl NutritionLedger {
    /// Create an empty ledger with the given goals.
    pub fn new(goals: NutritionGoals) -> Self {
        Self {
            items: Vec::new(),
            goals,
            consumed: NutrientTally::default(),
        }
    }

    /// Create a ledger from existing items, in the order given.
    ///
    /// Items that fail entry validation, or whose id was seen earlier in the
    /// list, are dropped.
    pub fn from_items(items: Vec<FoodItem>, goals: NutritionGoals) -> Self {
        let mut seen = HashSet::new();
        let mut ledger = Self::new(goals);
        for item in items {
            if let Err(e) = item.validate() {
                warn!(id = %item.id, errors = %e, "dropping invalid food item");
                continue;
            }
            if !seen.insert(item.id.clone()) {
                warn!(id = %item.id, "dropping duplicate food item");
                continue;
            }
            ledger.consumed += NutrientTally::of(&item);
            ledger.items.push(item);
        }
        ledger
    }

    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        Self::from_items(snapshot.items, snapshot.goals)
    }

    pub fn to_snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            goals: self.goals,
            items: self.items.clone(),
        }
    }

    /// Log a food entry stamped with the current local time.
    pub fn add_food(&mut self, entry: FoodEntry) -> Result<&FoodItem> {
        self.add_food_at(entry, Local::now())
    }

    /// Log a food entry with an explicit timestamp.
    ///
    /// Fails without touching the ledger if the entry does not validate.
    pub fn add_food_at(
        &mut self,
        entry: FoodEntry,
        timestamp: DateTime<Local>,
    ) -> Result<&FoodItem> {
        if let Err(e) = entry.validate() {
            warn!(name = %entry.name, errors = %e, "food entry rejected");
            return Err(e.into());
        }

        let item = entry.into_item(Uuid::new_v4().to_string(), timestamp);
        self.consumed += NutrientTally::of(&item);
        info!(id = %item.id, food = %item.debug_string(), "food logged");
        self.items.insert(0, item);

        Ok(&self.items[0])
    }

    /// Remove an item by id. Unknown ids are ignored.
    pub fn delete_food(&mut self, id: &str) -> Option<FoodItem> {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            debug!(id, "delete ignored, no such food item");
            return None;
        };

        let item = self.items.remove(pos);
        self.consumed -= NutrientTally::of(&item);
        info!(id, food = %item.debug_string(), "food deleted");
        Some(item)
    }

    pub fn get_food(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The single item whose id starts with `prefix`, if exactly one does.
    pub fn find_by_id_prefix(&self, prefix: &str) -> Option<&FoodItem> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return None;
        }
        let mut matches = self.items.iter().filter(|item| item.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Some(item),
            _ => None,
        }
    }

    /// Find items by name: exact (case-insensitive) matches if any, otherwise
    /// fuzzy matches ordered by similarity.
    pub fn find_by_name(&self, query: &str) -> Vec<&FoodItem> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let exact: Vec<&FoodItem> = self
            .items
            .iter()
            .filter(|item| item.name.to_lowercase() == query)
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        let mut candidates: Vec<(&FoodItem, f64)> = self
            .items
            .iter()
            .map(|item| (item, jaro_winkler(&item.name.to_lowercase(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(item, _)| item).collect()
    }

    /// All items, most recent first.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Items grouped by meal, in day order. Empty meals are omitted.
    pub fn items_by_meal(&self) -> Vec<(MealTime, Vec<&FoodItem>)> {
        MealTime::ALL
            .into_iter()
            .map(|meal| {
                let items: Vec<&FoodItem> = self
                    .items
                    .iter()
                    .filter(|item| get_meal_time(&item.timestamp) == meal)
                    .collect();
                (meal, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    pub fn summary(&self) -> NutritionSummary {
        NutritionSummary::new(self.consumed.to_macros(), self.goals)
    }

    pub fn goals(&self) -> NutritionGoals {
        self.goals
    }

    /// Replace the goals. Consumed amounts are unaffected.
    pub fn set_goals(&mut self, goals: NutritionGoals) -> Result<()> {
        goals.validate()?;
        debug!(?goals, "nutrition goals updated");
        self.goals = goals;
        Ok(())
    }

    /// Totals summed from scratch over the current items.
    pub fn recomputed_totals(&self) -> Macros {
        self.items
            .iter()
            .fold(NutrientTally::default(), |mut acc, item| {
                acc += NutrientTally::of(item);
                acc
            })
            .to_macros()
    }

    /// Remove every item, keeping the goals.
    pub fn clear(&mut self) {
        self.items.clear();
        self.consumed = NutrientTally::default();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
