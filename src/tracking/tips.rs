use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{HealthError, Result};

/// Initial like counts are drawn from `0..MAX_INITIAL_LIKES`.
pub const MAX_INITIAL_LIKES: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Nutrition,
    Fitness,
    Mindfulness,
    Sleep,
}

impl TipCategory {
    pub const ALL: [TipCategory; 4] = [
        TipCategory::Nutrition,
        TipCategory::Fitness,
        TipCategory::Mindfulness,
        TipCategory::Sleep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TipCategory::Nutrition => "nutrition",
            TipCategory::Fitness => "fitness",
            TipCategory::Mindfulness => "mindfulness",
            TipCategory::Sleep => "sleep",
        }
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        TipCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| format!("unknown tip category '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub id: u32,
    pub category: TipCategory,
    pub title: String,
    pub content: String,
    pub likes: u32,
}

const NUTRITION_TIPS: [(&str, &str); 7] = [
    (
        "Eat the Rainbow",
        "Try to include fruits and vegetables of different colors in your diet to ensure you're getting a variety of nutrients and antioxidants.",
    ),
    (
        "Meal Prep Sundays",
        "Dedicate a few hours on Sunday to prep meals for the week. This helps control portions and reduces the temptation to order takeout.",
    ),
    (
        "Protein First",
        "Start your meals with protein to help you feel fuller and reduce overall calorie intake in the meal.",
    ),
    (
        "Healthy Snack Stations",
        "Create mini snack stations at home and work with pre-portioned healthy options like nuts, fruits, or yogurt.",
    ),
    (
        "Mindful Eating",
        "Put away electronics while eating and focus on your food. This helps recognize fullness cues and enhances satisfaction.",
    ),
    (
        "Hydration Habit",
        "Drink a glass of water before each meal to help with digestion and create a sense of fullness before eating.",
    ),
    (
        "Veggie Boost",
        "Add extra vegetables to every meal - even breakfast! Try spinach in smoothies or adding shredded carrots to sauces.",
    ),
];

const FITNESS_TIPS: [(&str, &str); 7] = [
    (
        "Two-Minute Rule",
        "If an exercise takes less than two minutes to complete, do it right away without procrastinating.",
    ),
    (
        "Walking Meetings",
        "Turn phone calls or audio meetings into walking meetings to add more movement to your day.",
    ),
    (
        "Morning Micro-Workout",
        "Start your day with a 5-minute workout - even just a few pushups, squats, and jumping jacks can energize you.",
    ),
    (
        "Exercise Snacking",
        "Break up exercise into 'snack-sized' portions throughout the day. Try 3-5 minutes of activity every hour.",
    ),
    (
        "Active TV Time",
        "Do bodyweight exercises during commercial breaks or while watching your favorite shows.",
    ),
    (
        "NEAT Boosters",
        "Increase Non-Exercise Activity Thermogenesis by taking stairs, parking farther away, or doing household chores more vigorously.",
    ),
    (
        "Buddy System",
        "Find a workout buddy or join a fitness community to stay accountable and motivated.",
    ),
];

const MINDFULNESS_TIPS: [(&str, &str); 5] = [
    (
        "60-Second Breath Focus",
        "Take 60 seconds several times a day to focus solely on your breathing, counting each inhale and exhale.",
    ),
    (
        "Gratitude Journaling",
        "Write down three things you're grateful for each day to shift focus toward positive aspects of life.",
    ),
    (
        "Sensory Reset",
        "When stressed, focus on naming 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste.",
    ),
    (
        "Screen-Free Meals",
        "Make at least one meal per day completely screen-free to practice mindful eating and present-moment awareness.",
    ),
    (
        "Mindful Walking",
        "During a short walk, pay attention to each step, the sensations in your feet, and your surroundings.",
    ),
];

const SLEEP_TIPS: [(&str, &str); 5] = [
    (
        "Consistent Sleep Schedule",
        "Go to bed and wake up at the same time every day, even on weekends, to regulate your body's internal clock.",
    ),
    (
        "Electronics Curfew",
        "Stop using electronic devices at least 30-60 minutes before bedtime to reduce blue light exposure.",
    ),
    (
        "Optimal Sleep Temperature",
        "Keep your bedroom between 60-67°F (15-19°C) for the most comfortable sleep environment.",
    ),
    (
        "Progressive Muscle Relaxation",
        "Before bed, tense and then relax each muscle group from toes to head to release physical tension.",
    ),
    (
        "Sleep-Friendly Bedtime Snacks",
        "If hungry before bed, choose small snacks containing tryptophan like a small banana with almond butter or a small glass of milk.",
    ),
];

/// Build the tip catalogue. Ids run from 1 in category order; like counts
/// come from `rng`, so the same seed always yields the same catalogue.
pub fn tip_catalog(rng: &mut impl Rng) -> Vec<Tip> {
    let groups: [(TipCategory, &[(&str, &str)]); 4] = [
        (TipCategory::Nutrition, &NUTRITION_TIPS),
        (TipCategory::Fitness, &FITNESS_TIPS),
        (TipCategory::Mindfulness, &MINDFULNESS_TIPS),
        (TipCategory::Sleep, &SLEEP_TIPS),
    ];

    let mut tips = Vec::new();
    let mut id = 1;
    for (category, entries) in groups {
        for (title, content) in entries {
            tips.push(Tip {
                id,
                category,
                title: title.to_string(),
                content: content.to_string(),
                likes: rng.gen_range(0..MAX_INITIAL_LIKES),
            });
            id += 1;
        }
    }
    tips
}

/// Pick one tip uniformly at random.
pub fn random_tip<'a>(tips: &'a [Tip], rng: &mut impl Rng) -> Option<&'a Tip> {
    if tips.is_empty() {
        return None;
    }
    Some(&tips[rng.gen_range(0..tips.len())])
}

/// The tip catalogue together with the user's favourites and likes.
#[derive(Debug, Clone)]
pub struct TipBrowser {
    tips: Vec<Tip>,
    favorites: Vec<Tip>,
    liked: Vec<u32>,
}

impl TipBrowser {
    pub fn new(tips: Vec<Tip>, favorites: Vec<Tip>, liked: Vec<u32>) -> Self {
        Self {
            tips,
            favorites,
            liked,
        }
    }

    /// A browser over the catalogue generated from `seed`, with no saved state.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(tip_catalog(&mut rng), Vec::new(), Vec::new())
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn favorites(&self) -> &[Tip] {
        &self.favorites
    }

    pub fn liked(&self) -> &[u32] {
        &self.liked
    }

    pub fn get(&self, id: u32) -> Option<&Tip> {
        self.tips.iter().find(|t| t.id == id)
    }

    pub fn by_category(&self, category: TipCategory) -> Vec<&Tip> {
        self.tips.iter().filter(|t| t.category == category).collect()
    }

    pub fn random_tip(&self, rng: &mut impl Rng) -> Option<&Tip> {
        random_tip(&self.tips, rng)
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.iter().any(|t| t.id == id)
    }

    pub fn is_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    /// Add the tip to favourites, or remove it if already there.
    ///
    /// Returns whether the tip is a favourite afterwards.
    pub fn toggle_favorite(&mut self, id: u32) -> Result<bool> {
        if self.is_favorite(id) {
            self.favorites.retain(|t| t.id != id);
            info!(id, "tip removed from favorites");
            return Ok(false);
        }

        let tip = self.get(id).cloned().ok_or(HealthError::TipNotFound(id))?;
        self.favorites.push(tip);
        info!(id, "tip added to favorites");
        Ok(true)
    }

    /// Like a tip once. Returns false if it was already liked.
    pub fn like(&mut self, id: u32) -> Result<bool> {
        if self.get(id).is_none() {
            return Err(HealthError::TipNotFound(id));
        }
        if self.is_liked(id) {
            debug!(id, "tip already liked");
            return Ok(false);
        }

        self.liked.push(id);
        for tip in self.tips.iter_mut().chain(self.favorites.iter_mut()) {
            if tip.id == id {
                tip.likes += 1;
            }
        }
        info!(id, "tip liked");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_layout() {
        let mut rng = StdRng::seed_from_u64(1);
        let tips = tip_catalog(&mut rng);
        assert_eq!(tips.len(), 24);
        assert_eq!(tips[0].id, 1);
        assert_eq!(tips[0].title, "Eat the Rainbow");
        assert_eq!(tips[7].category, TipCategory::Fitness);
        assert_eq!(tips[23].category, TipCategory::Sleep);
        assert!(tips.iter().all(|t| t.likes < MAX_INITIAL_LIKES));
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = TipBrowser::seeded(42);
        let b = TipBrowser::seeded(42);
        assert_eq!(a.tips(), b.tips());

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        assert_eq!(a.random_tip(&mut rng_a), b.random_tip(&mut rng_b));
    }

    #[test]
    fn test_random_tip_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_tip(&[], &mut rng).is_none());
    }

    #[test]
    fn test_by_category_counts() {
        let browser = TipBrowser::seeded(3);
        assert_eq!(browser.by_category(TipCategory::Nutrition).len(), 7);
        assert_eq!(browser.by_category(TipCategory::Fitness).len(), 7);
        assert_eq!(browser.by_category(TipCategory::Mindfulness).len(), 5);
        assert_eq!(browser.by_category(TipCategory::Sleep).len(), 5);
    }

    #[test]
    fn test_toggle_favorite_adds_and_removes_only_that_tip() {
        let mut browser = TipBrowser::seeded(3);
        assert!(browser.toggle_favorite(2).unwrap());
        assert!(browser.toggle_favorite(5).unwrap());
        assert!(!browser.toggle_favorite(2).unwrap());

        let ids: Vec<u32> = browser.favorites().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5]);
        assert!(matches!(
            browser.toggle_favorite(999),
            Err(HealthError::TipNotFound(999))
        ));
    }

    #[test]
    fn test_like_is_idempotent_and_updates_favorites() {
        let mut browser = TipBrowser::seeded(9);
        let before = browser.get(4).unwrap().likes;
        browser.toggle_favorite(4).unwrap();

        assert!(browser.like(4).unwrap());
        assert!(!browser.like(4).unwrap());

        assert_eq!(browser.get(4).unwrap().likes, before + 1);
        assert_eq!(browser.favorites()[0].likes, before + 1);
        assert!(browser.is_liked(4));
        assert!(browser.like(0).is_err());
    }
}
