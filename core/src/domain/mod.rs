pub mod common;
pub mod health;
pub mod imaging;
pub mod llm;
pub mod planner;
pub mod session;
