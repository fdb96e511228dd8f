use chrono::Utc;

use crate::domain::planner::entities::{DietaryPlan, FitnessPlan, PlanBundle, UserProfile};

pub const DIETARY_RATIONALE: &str =
    "High Protein, Healthy Fats, Moderate Carbohydrates, and Caloric Balance";

pub const DIETARY_CONSIDERATIONS: [&str; 4] = [
    "Hydration: Drink plenty of water throughout the day",
    "Electrolytes: Monitor sodium, potassium, and magnesium levels",
    "Fiber: Ensure adequate intake through vegetables and fruits",
    "Listen to your body: Adjust portion sizes as needed",
];

pub const FITNESS_GOALS: &str = "Build strength, improve endurance, and maintain overall fitness";

pub const FITNESS_TIPS: [&str; 4] = [
    "Track your progress regularly",
    "Allow proper rest between workouts",
    "Focus on proper form",
    "Stay consistent with your routine",
];

pub const MEAL_PLAN_FALLBACK: &str = "Plan not available";
pub const ROUTINE_FALLBACK: &str = "Routine not available";
pub const ANSWER_FALLBACK: &str = "Sorry, I couldn't generate a response at this time.";

/// Floats use `Debug` formatting: the shortest text that parses back to the
/// same value, with `.0` kept on whole numbers.
fn profile_block(profile: &UserProfile) -> String {
    format!(
        "Age: {}\nWeight: {:?}kg\nHeight: {:?}cm\nSex: {}\nActivity Level: {}\n\
         Dietary Preferences: {}\nFitness Goals: {}",
        profile.age,
        profile.weight_kg,
        profile.height_cm,
        profile.sex,
        profile.activity_level,
        profile.dietary_preference,
        profile.fitness_goal,
    )
}

pub fn build_dietary_prompt(profile: &UserProfile) -> String {
    format!(
        "Create a personalized dietary plan for a user with the following profile:\n\n{}",
        profile_block(profile)
    )
}

pub fn build_fitness_prompt(profile: &UserProfile) -> String {
    format!(
        "Create a personalized fitness plan for a user with the following profile:\n\n{}",
        profile_block(profile)
    )
}

/// Follow-up prompt: both plan texts as context, then the question.
pub fn build_followup_prompt(plans: &PlanBundle, question: &str) -> String {
    format!(
        "Dietary Plan: {}\n\nFitness Plan: {}\nUser Question: {}",
        plans.dietary_plan.meal_plan, plans.fitness_plan.routine, question
    )
}

fn text_or(text: Option<String>, fallback: &str) -> String {
    match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback.to_string(),
    }
}

/// Splices the model texts into the static advisory content.
pub fn assemble_plans(meal_plan: Option<String>, routine: Option<String>) -> PlanBundle {
    PlanBundle {
        dietary_plan: DietaryPlan {
            why_this_plan_works: DIETARY_RATIONALE.to_string(),
            meal_plan: text_or(meal_plan, MEAL_PLAN_FALLBACK),
            important_considerations: DIETARY_CONSIDERATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
        fitness_plan: FitnessPlan {
            goals: FITNESS_GOALS.to_string(),
            routine: text_or(routine, ROUTINE_FALLBACK),
            tips: FITNESS_TIPS.iter().map(|s| s.to_string()).collect(),
        },
        generated_at: Utc::now(),
    }
}

pub fn answer_or_fallback(answer: Option<String>) -> String {
    text_or(answer, ANSWER_FALLBACK)
}
