use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sex {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ActivityLevel {
    Sedentary,
    #[serde(rename = "Lightly Active")]
    LightlyActive,
    #[serde(rename = "Moderately Active")]
    ModeratelyActive,
    #[serde(rename = "Very Active")]
    VeryActive,
    #[serde(rename = "Extremely Active")]
    ExtremelyActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DietaryPreference {
    Vegetarian,
    Keto,
    #[serde(rename = "Gluten Free")]
    GlutenFree,
    #[serde(rename = "Low Carb")]
    LowCarb,
    #[serde(rename = "Dairy Free")]
    DairyFree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FitnessGoal {
    #[serde(rename = "Lose Weight")]
    LoseWeight,
    #[serde(rename = "Gain Muscle")]
    GainMuscle,
    Endurance,
    #[serde(rename = "Stay Fit")]
    StayFit,
    #[serde(rename = "Strength Training")]
    StrengthTraining,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        };
        f.write_str(label)
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Keto => "Keto",
            DietaryPreference::GlutenFree => "Gluten Free",
            DietaryPreference::LowCarb => "Low Carb",
            DietaryPreference::DairyFree => "Dairy Free",
        };
        f.write_str(label)
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FitnessGoal::LoseWeight => "Lose Weight",
            FitnessGoal::GainMuscle => "Gain Muscle",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::StayFit => "Stay Fit",
            FitnessGoal::StrengthTraining => "Strength Training",
        };
        f.write_str(label)
    }
}

/// Profile used to build the planning prompts. Range checks happen at the
/// HTTP boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub age: u8,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub dietary_preference: DietaryPreference,
    pub fitness_goal: FitnessGoal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietaryPlan {
    pub why_this_plan_works: String,
    pub meal_plan: String,
    pub important_considerations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FitnessPlan {
    pub goals: String,
    pub routine: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanBundle {
    pub dietary_plan: DietaryPlan,
    pub fitness_plan: FitnessPlan,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
    pub answered_at: DateTime<Utc>,
}

impl QaPair {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            question,
            answer,
            answered_at: Utc::now(),
        }
    }
}
