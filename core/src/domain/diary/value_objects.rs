use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    diary::entities::{DayKey, Goals, LineItem, Note},
    nutrition::{MacroPercent, MacroSet},
};

#[derive(Debug, Clone)]
pub struct CreateNoteInput {
    /// Defaults to today when absent.
    pub day_key: Option<DayKey>,
    pub text: String,
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone)]
pub struct UpdateNoteInput {
    pub note_id: Uuid,
    pub day_key: DayKey,
    pub text: String,
    pub items: Vec<LineItem>,
}

/// Notes of one day, newest first, with their combined totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiaryDay {
    pub day_key: DayKey,
    pub notes: Vec<Note>,
    pub totals: MacroSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyProgress {
    pub day_key: DayKey,
    pub totals: MacroSet,
    pub goals: Goals,
    pub percent: MacroPercent,
}
