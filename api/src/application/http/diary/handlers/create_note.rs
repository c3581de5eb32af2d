use axum::extract::State;
use macronote_core::domain::diary::{
    entities::Note, ports::DiaryService, value_objects::CreateNoteInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    diary::validators::CreateNoteValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NoteResponse {
    pub data: Note,
}

#[utoipa::path(
    post,
    path = "/notes",
    tag = "diary",
    summary = "Create note",
    description = "Saves a note at the top of its day.",
    request_body = CreateNoteValidator,
    responses(
        (status = 201, body = NoteResponse),
        (status = 400, description = "Invalid body")
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateNoteValidator>,
) -> Result<Response<NoteResponse>, ApiError> {
    let note = state
        .service
        .save_note(CreateNoteInput {
            day_key: payload.day_key,
            text: payload.text,
            items: payload.items,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(NoteResponse { data: note }))
}
