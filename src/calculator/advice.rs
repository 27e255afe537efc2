use crate::models::GoalDirection;

/// A titled piece of weight-management advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceTip {
    pub title: &'static str,
    pub description: &'static str,
}

const fn tip(title: &'static str, description: &'static str) -> AdviceTip {
    AdviceTip { title, description }
}

pub static WEIGHT_LOSS_TIPS: [AdviceTip; 5] = [
    tip(
        "Create a Calorie Deficit",
        "Aim for a sustainable calorie deficit of 500-1000 calories per day to lose 1-2 pounds per week. Track your food intake using a food diary or app.",
    ),
    tip(
        "Focus on Protein",
        "Increase protein intake to 1.6-2.2g per kg of body weight to preserve muscle mass while losing fat and help control hunger.",
    ),
    tip(
        "Strength Training",
        "Include resistance training 2-3 times per week to maintain muscle mass while losing weight.",
    ),
    tip(
        "Increase Daily Activity",
        "Add more movement throughout your day - take the stairs, walk during lunch breaks, or stand while working.",
    ),
    tip(
        "Prioritize Sleep",
        "Aim for 7-9 hours of quality sleep per night to regulate hunger hormones and support recovery.",
    ),
];

pub static WEIGHT_GAIN_TIPS: [AdviceTip; 5] = [
    tip(
        "Calorie Surplus",
        "Consume 300-500 calories above your daily maintenance level for steady, lean weight gain.",
    ),
    tip(
        "Protein Distribution",
        "Spread protein intake evenly across 4-6 meals daily, aiming for 1.6-2.2g per kg of body weight.",
    ),
    tip(
        "Progressive Overload",
        "Gradually increase workout intensity with heavier weights or more repetitions to stimulate muscle growth.",
    ),
    tip(
        "Recovery Nutrition",
        "Consume a meal with protein and carbohydrates within 45 minutes after training to optimize recovery.",
    ),
    tip(
        "Consistency Over Quantity",
        "Maintain a consistent eating schedule rather than forcing excessive food intake in fewer meals.",
    ),
];

pub fn advice_tips(direction: GoalDirection) -> &'static [AdviceTip] {
    match direction {
        GoalDirection::Loss => &WEIGHT_LOSS_TIPS,
        GoalDirection::Gain => &WEIGHT_GAIN_TIPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice_tips_by_direction() {
        assert_eq!(advice_tips(GoalDirection::Loss)[0].title, "Create a Calorie Deficit");
        assert_eq!(advice_tips(GoalDirection::Gain)[0].title, "Calorie Surplus");
        assert_eq!(advice_tips(GoalDirection::Gain).len(), 5);
    }
}
