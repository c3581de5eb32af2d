pub mod create_note;
pub mod delete_note;
pub mod get_day;
pub mod get_days;
pub mod get_note;
pub mod update_note;
