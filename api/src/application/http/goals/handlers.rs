pub mod get_goals;
pub mod get_progress;
pub mod update_goals;
