pub mod ask_question;
pub mod generate_plans;
