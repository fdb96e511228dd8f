use healthsuite_core::domain::planner::entities::{
    ActivityLevel, DietaryPreference, FitnessGoal, Sex, UserProfile,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GeneratePlansValidator {
    #[validate(range(min = 10, max = 100, message = "age must be between 10 and 100"))]
    pub age: u8,

    #[validate(range(
        min = 100.0,
        max = 250.0,
        message = "height_cm must be between 100 and 250"
    ))]
    pub height_cm: f64,

    #[validate(range(
        min = 20.0,
        max = 300.0,
        message = "weight_kg must be between 20 and 300"
    ))]
    pub weight_kg: f64,

    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub dietary_preference: DietaryPreference,
    pub fitness_goal: FitnessGoal,
}

impl From<GeneratePlansValidator> for UserProfile {
    fn from(value: GeneratePlansValidator) -> Self {
        UserProfile {
            age: value.age,
            height_cm: value.height_cm,
            weight_kg: value.weight_kg,
            sex: value.sex,
            activity_level: value.activity_level,
            dietary_preference: value.dietary_preference,
            fitness_goal: value.fitness_goal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AskQuestionValidator {
    /// Blank questions are rejected after the API key check.
    pub question: String,
}
