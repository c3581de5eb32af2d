use macronote_core::domain::diary::entities::{DayKey, LineItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNoteValidator {
    /// Defaults to today (UTC).
    #[serde(default)]
    pub day_key: Option<DayKey>,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub items: Vec<LineItem>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNoteValidator {
    /// Moving a note to another day changes the bucket it is listed under.
    pub day_key: DayKey,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub items: Vec<LineItem>,
}
