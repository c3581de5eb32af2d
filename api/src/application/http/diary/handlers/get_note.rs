use axum::extract::{Path, State};
use macronote_core::domain::diary::{
    entities::{DayKey, Note},
    ports::DiaryService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetNoteResponse {
    /// Day the note is listed under.
    pub day_key: DayKey,
    pub data: Note,
}

#[utoipa::path(
    get,
    path = "/notes/{note_id}",
    tag = "diary",
    summary = "Get note",
    params(
        ("note_id" = Uuid, Path, description = "Note ID"),
    ),
    responses(
        (status = 200, body = GetNoteResponse),
        (status = 404, description = "Note not found")
    )
)]
pub async fn get_note(
    Path(note_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetNoteResponse>, ApiError> {
    let (day_key, note) = state
        .service
        .get_note(note_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetNoteResponse {
        day_key,
        data: note,
    }))
}
