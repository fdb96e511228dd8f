pub mod health;
pub mod imaging;
pub mod planner;
pub mod server;
pub mod session;
pub mod ui;
