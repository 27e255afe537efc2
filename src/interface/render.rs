use chrono::NaiveDate;

use crate::calculator::advice_tips;
use crate::ledger::NutritionLedger;
use crate::models::{FoodItem, GoalResult, NutritionSummary};
use crate::tracking::{
    format_compact, format_number, ActivityStats, HealthEvent, StepData, Tip, WaterTracker,
};

const BAR_WIDTH: usize = 20;

/// Text progress bar for a 0-100 percentage.
pub fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Display consumed-vs-goal for calories and each macro.
pub fn display_summary(summary: &NutritionSummary) {
    println!();
    println!("=== Nutrition Summary ===");
    println!();

    let consumed = summary.consumed();
    let goals = summary.goals();
    let rows = [
        ("Calories", consumed.calories, goals.calorie_goal, summary.calorie_percentage(), "kcal"),
        ("Protein", consumed.protein, goals.protein_goal, summary.protein_percentage(), "g"),
        ("Carbs", consumed.carbs, goals.carbs_goal, summary.carbs_percentage(), "g"),
        ("Fat", consumed.fat, goals.fat_goal, summary.fat_percentage(), "g"),
    ];

    for (label, consumed, goal, pct, unit) in rows {
        println!(
            "  {:<9} {} {:>3}%  {:.0} / {:.0} {}",
            label,
            progress_bar(pct as f64),
            pct,
            consumed,
            goal,
            unit
        );
    }

    let remaining = summary.remaining_calories();
    println!();
    if remaining >= 0.0 {
        println!("{:.0} kcal remaining today.", remaining);
    } else {
        println!("{:.0} kcal over today's goal.", -remaining);
    }
    println!();
}

fn display_food_line(item: &FoodItem) {
    println!(
        "    {} {:<24} {:>6} cal  P:{:<5} C:{:<5} F:{:<5} ({})  [{}]",
        item.timestamp.format("%H:%M"),
        item.name,
        item.calories,
        item.protein,
        item.carbs,
        item.fat,
        item.serving_size,
        short_id(&item.id)
    );
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Display the food log grouped by meal.
pub fn display_food_log(ledger: &NutritionLedger) {
    if ledger.is_empty() {
        println!("No food logged yet. Use 'add' to log a meal.");
        return;
    }

    println!("=== Food Log ({} items) ===", ledger.len());
    for (meal, items) in ledger.items_by_meal() {
        let calories: f64 = items.iter().map(|i| i.calories).sum();
        println!();
        println!("  {} - {:.0} cal", meal, calories);
        for item in items {
            display_food_line(item);
        }
    }
    println!();
}

/// Display the result of a goal calculation with matching advice.
pub fn display_goal_result(result: &GoalResult) {
    println!();
    println!("=== Weight Goal ===");
    println!();
    let maintenance = format_number(result.maintenance_calories.max(0) as u64);
    let target = format_number(result.target_calories.max(0) as u64);
    println!("Maintenance calories: {} kcal/day", maintenance);
    println!("Target calories:      {} kcal/day", target);
    println!("Estimated time:       {:.1} weeks ({})", result.weeks_to_goal, result.direction);
    println!();
    println!("{}", result.advice);
    println!();
    println!("--- Tips ---");
    for tip in advice_tips(result.direction) {
        println!("  * {}: {}", tip.title, tip.description);
    }
    println!();
}

pub fn display_water(water: &WaterTracker) {
    println!();
    println!("=== Water Intake ===");
    println!();
    println!(
        "  {} {:.0}%  {} / {} ml",
        progress_bar(water.progress_percentage()),
        water.progress_percentage(),
        water.intake_ml,
        water.goal_ml
    );
    println!(
        "  Glasses: {} of {} ({} ml each)",
        water.glasses_count(),
        water.total_glasses(),
        water.glass_ml
    );
    if water.goal_reached() {
        println!("  Daily goal reached!");
    } else {
        println!("  {} ml to go.", water.remaining_ml());
    }
    println!();
}

pub fn display_steps(steps: &StepData, activity: &ActivityStats) {
    println!();
    println!("=== Steps ===");
    println!();
    println!(
        "  {} {:.0}%  {} / {} steps",
        progress_bar(steps.percentage()),
        steps.percentage(),
        format_number(steps.current as u64),
        format_number(steps.goal as u64)
    );
    println!();
    for ((label, count), burned) in steps
        .weekly_labels
        .iter()
        .zip(steps.weekly_data.iter())
        .zip(activity.weekly_calories_burned.iter())
    {
        println!("  {:<4} {:>6} steps  {:>4} kcal", label, format_compact(*count), burned);
    }
    println!();
    println!("  Weekly total:   {}", format_number(steps.weekly_total()));
    println!("  Daily average:  {:.0}", steps.weekly_average());
    if let Some((day, count)) = steps.best_day() {
        println!("  Best day:       {} ({})", day, format_number(count as u64));
    }
    println!("  Goal met:       {} of 7 days", steps.days_goal_met());
    println!("  Burned this week: {} kcal", format_number(activity.weekly_calories_total() as u64));
    println!();
    println!("  Active minutes: {}", activity.active_minutes);
    println!("  Calories burned today: {}", activity.calories_burned);
    println!("  Heart rate: {} bpm", activity.heart_rate_bpm);
    println!();
}

pub fn display_events(date: NaiveDate, events: &[&HealthEvent]) {
    println!();
    println!("=== Events for {} ===", date.format("%B %-d, %Y"));
    println!();
    if events.is_empty() {
        println!("  No events scheduled for this day.");
    }
    for event in events {
        let mark = if event.completed { "x" } else { " " };
        println!("  [{}] #{} {} ({})", mark, event.id, event.title, event.category);
    }
    println!();
}

pub fn display_tip(tip: &Tip, favorite: bool, liked: bool) {
    let star = if favorite { " *" } else { "" };
    let like = if liked { ", liked" } else { "" };
    println!("#{} [{}] {}{}", tip.id, tip.category, tip.title, star);
    println!("    {}", tip.content);
    println!("    {} likes{}", tip.likes, like);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0), format!("[{}]", ".".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(100.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(250.0), progress_bar(100.0));
        assert_eq!(progress_bar(-5.0), progress_bar(0.0));
        assert_eq!(progress_bar(50.0).matches('#').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("1"), "1");
        assert_eq!(short_id("0123456789abcdef"), "01234567");
    }
}
