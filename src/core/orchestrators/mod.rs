pub mod app_orchestrator;
pub mod search_controller;

pub use search_controller::{SearchController, SearchOutcome};
